mod common;

use std::{
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use voyage_core::{
    display::{Notice, StageView},
    params::{NavigateBack, SelectDay, StartPlanning, ToggleItem},
    Itinerary, ItineraryGenerator, PlanSource, RetryPolicy, Selection, SessionBuilder, StageKind, StaticItinerary,
    Transition, TripError, TripParameters,
};

use common::{create_catalog_file, create_test_session, plan_trip, SMALL_CATALOG};

/// Generator that is unavailable for its first `failures` calls.
struct Warmup {
    failures: u32,
    calls: Arc<AtomicU32>,
}

#[async_trait]
impl ItineraryGenerator for Warmup {
    async fn generate(&self, trip: &TripParameters, selection: Option<&Selection>) -> voyage_core::Result<Itinerary> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(TripError::unavailable("warming up"));
        }
        StaticItinerary.generate(trip, selection).await
    }
}

fn toggle(id: &str) -> ToggleItem {
    ToggleItem { id: id.to_string() }
}

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_wizard_workflow() {
    let (_temp_dir, mut session) = create_test_session();
    assert_eq!(session.stage_kind(), StageKind::Hero);

    plan_trip(&mut session, "Lisbon").await;
    let catalog = session.catalog().expect("Catalog loaded from file");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.places[0].duration_hours, 1.5);

    // Select two items, then change our mind about one
    session.toggle_item(&toggle("lx1")).expect("Failed to toggle");
    session.toggle_item(&toggle("lx3")).expect("Failed to toggle");
    session.toggle_item(&toggle("lx1")).expect("Failed to toggle");
    session.toggle_item(&toggle("lx2")).expect("Failed to toggle");

    let summary = session.summary().expect("Summary while discovering");
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_cost, 65.0);
    assert_eq!(summary.total_hours, 3.5);
    assert_eq!(summary.group_budget, 2000.0);

    assert_eq!(
        session.complete_discovery().await.expect("Failed to complete"),
        Transition::Stage(StageKind::Results)
    );
    let results = session.results().expect("Results stage");
    assert_eq!(results.source(), PlanSource::Manual);
    assert_eq!(results.itinerary().days[0].date, jiff::civil::date(2030, 9, 10));

    session.select_day(&SelectDay { day: 2 }).expect("Failed to select day");
    let output = StageView(&session).to_string();
    assert!(output.contains("# Your Lisbon itinerary"));
    assert!(output.contains("## Day 2 · Wednesday, September 11"));

    // Back to discovery keeps the selection that produced the itinerary
    session.back_to_discovery().expect("Failed to go back");
    let ids: Vec<&str> = session.selection().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["lx3", "lx2"]);

    // Back to planning keeps the trip but drops the selection
    session.back_to_planning().expect("Failed to go back");
    assert_eq!(session.trip().map(|trip| trip.destination.as_str()), Some("Lisbon"));
    assert!(session.selection().is_empty());

    session
        .navigate_back(&NavigateBack {
            to: "hero".to_string(),
        })
        .expect("Failed to go home");
    assert_eq!(session.stage_kind(), StageKind::Hero);
    assert!(session.trip().is_none());
}

#[tokio::test]
async fn test_retrying_generator_recovers() {
    let (_temp_dir, path) = create_catalog_file(SMALL_CATALOG);
    let calls = Arc::new(AtomicU32::new(0));
    let mut session = SessionBuilder::new()
        .with_catalog_file(Some(&path))
        .with_generator(Warmup {
            failures: 2,
            calls: calls.clone(),
        })
        .with_retry_policy(RetryPolicy::new(3, Duration::ZERO))
        .build()
        .expect("Failed to create session");

    plan_trip(&mut session, "Lisbon").await;
    let itinerary = session.autoplan().await.expect("Retries should absorb the failures");
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_exhausted_retries_surface_as_notice() {
    let (_temp_dir, path) = create_catalog_file(SMALL_CATALOG);
    let mut session = SessionBuilder::new()
        .with_catalog_file(Some(&path))
        .with_generator(Warmup {
            failures: 10,
            calls: Arc::new(AtomicU32::new(0)),
        })
        .with_retry_policy(RetryPolicy::new(2, Duration::ZERO))
        .build()
        .expect("Failed to create session");

    plan_trip(&mut session, "Lisbon").await;
    session.toggle_item(&toggle("lx3")).expect("Failed to toggle");

    let err = session.complete_discovery().await.unwrap_err();
    let notice = Notice::from_error(&err);
    assert!(notice.is_error());
    assert!(notice.hint.is_some());

    assert_eq!(session.stage_kind(), StageKind::Discovery);
    assert!(session.selection().contains("lx3"));
}

#[tokio::test]
async fn test_invalid_catalog_file_keeps_planning() {
    let (_temp_dir, path) = create_catalog_file("{ not json");
    let mut session = SessionBuilder::new()
        .with_catalog_file(Some(&path))
        .build()
        .expect("Failed to create session");

    session
        .start_planning(&StartPlanning {
            destination: "Lisbon".to_string(),
            ..Default::default()
        })
        .expect("Failed to start planning");
    session
        .update_planning(&voyage_core::params::UpdatePlanning {
            check_in: Some("2030-09-10".to_string()),
            check_out: Some("2030-09-10".to_string()),
            toggle_interests: vec!["nature".to_string()],
            ..Default::default()
        })
        .expect("Same-day check-out is allowed");
    session.advance_planning().await.expect("Dates step");
    session.advance_planning().await.expect("Interests step");

    let err = session.advance_planning().await.unwrap_err();
    assert!(matches!(err, TripError::Serialization { .. }));
    assert_eq!(session.stage_kind(), StageKind::Planning);
}

#[tokio::test]
async fn test_shared_session_serializes_transitions() {
    let (_temp_dir, mut session) = create_test_session();
    plan_trip(&mut session, "Lisbon").await;
    let shared = Arc::new(Mutex::new(session));

    let mut handles = Vec::new();
    for id in ["lx1", "lx2", "lx3", "lx1"] {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            let mut session = shared.lock().await;
            session.toggle_item(&toggle(id)).expect("Failed to toggle");
        }));
    }
    for handle in handles {
        handle.await.expect("Task panicked");
    }

    let mut session = shared.lock().await;
    let selection = session.selection().clone();
    assert_eq!(selection.len(), 2);
    assert!(selection.contains("lx2"));
    assert!(selection.contains("lx3"));

    session.complete_discovery().await.expect("Failed to complete");
    assert_eq!(session.stage_kind(), StageKind::Results);
}
