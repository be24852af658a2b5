//! Tests for the session module.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;

use super::*;
use crate::{
    models::{BudgetTier, Category, Interest, Toggle},
    params::{Browse, ExportItinerary, NavigateBack, SelectDay, StartPlanning, ToggleItem, UpdatePlanning},
    providers::{RetryPolicy, StaticCatalog, StaticItinerary},
};

/// Catalog provider that fails while `down` is set.
#[derive(Clone, Default)]
struct SwitchableCatalog {
    down: Arc<AtomicBool>,
}

#[async_trait]
impl CatalogProvider for SwitchableCatalog {
    async fn fetch_catalog(&self, destination: &str) -> Result<Catalog> {
        if self.down.load(Ordering::SeqCst) {
            return Err(TripError::unavailable("catalog service offline"));
        }
        StaticCatalog.fetch_catalog(destination).await
    }
}

/// Itinerary generator that fails while `down` is set and records whether
/// it was handed a selection.
#[derive(Clone, Default)]
struct SwitchableGenerator {
    down: Arc<AtomicBool>,
    saw_selection: Arc<AtomicBool>,
}

#[async_trait]
impl ItineraryGenerator for SwitchableGenerator {
    async fn generate(&self, trip: &TripParameters, selection: Option<&Selection>) -> Result<Itinerary> {
        if self.down.load(Ordering::SeqCst) {
            return Err(TripError::unavailable("generator offline"));
        }
        self.saw_selection.store(selection.is_some(), Ordering::SeqCst);
        StaticItinerary.generate(trip, selection).await
    }
}

/// Helper function to create a test session with the built-in collaborators
fn create_test_session() -> Session {
    SessionBuilder::new()
        .with_catalog_provider(StaticCatalog)
        .with_retry_policy(RetryPolicy::none())
        .build()
        .expect("Failed to build session")
}

fn paris() -> StartPlanning {
    StartPlanning {
        destination: "Paris".to_string(),
        travelers: 2,
        budget: Some("moderate".to_string()),
    }
}

fn filled_form() -> UpdatePlanning {
    UpdatePlanning {
        check_in: Some("2030-06-01".to_string()),
        check_out: Some("2030-06-04".to_string()),
        toggle_interests: vec!["food".to_string(), "culture".to_string()],
        ..Default::default()
    }
}

/// Drives a session from the landing screen into discovery.
async fn session_in_discovery(session: &mut Session) {
    session.start_planning(&paris()).expect("Failed to start planning");
    session.update_planning(&filled_form()).expect("Failed to fill form");
    for _ in 0..2 {
        session.advance_planning().await.expect("Failed to advance");
    }
    assert_eq!(
        session.advance_planning().await.expect("Failed to complete planning"),
        Transition::Stage(StageKind::Discovery)
    );
}

fn toggle(session: &mut Session, id: &str) -> Toggle {
    session
        .toggle_item(&ToggleItem { id: id.to_string() })
        .expect("Failed to toggle item")
}

fn trip_present_unless_hero(session: &Session) -> bool {
    (session.stage_kind() == StageKind::Hero) == session.trip().is_none()
}

#[test]
fn test_new_session_starts_on_landing_screen() {
    let session = create_test_session();
    assert_eq!(session.stage_kind(), StageKind::Hero);
    assert!(session.trip().is_none());
    assert!(session.selection().is_empty());
    assert!(session.summary().is_none());
}

#[test]
fn test_start_planning_prefills_form() {
    let mut session = create_test_session();
    let flow = session.start_planning(&paris()).expect("Failed to start planning");

    assert_eq!(flow.step(), PlanningStep::Dates);
    let form = flow.form();
    assert_eq!(form.destination, "Paris");
    assert_eq!(form.travelers, 2);
    assert_eq!(form.budget, BudgetTier::Moderate);
    assert_eq!(form.budget.amount(), 1000);
    assert!(form.interests.is_empty());
    assert_eq!(session.stage_kind(), StageKind::Planning);
}

#[test]
fn test_start_planning_rejects_blank_destination() {
    let mut session = create_test_session();
    let err = session
        .start_planning(&StartPlanning {
            destination: "   ".to_string(),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "destination"));
    assert_eq!(session.stage_kind(), StageKind::Hero);
}

#[test]
fn test_start_planning_ignores_landing_budget() {
    let mut session = create_test_session();
    let flow = session
        .start_planning(&StartPlanning {
            destination: "Paris".to_string(),
            travelers: 2,
            budget: Some("luxury".to_string()),
        })
        .expect("Failed to start planning");
    assert_eq!(flow.form().budget, BudgetTier::Moderate);
    assert_eq!(session.trip().unwrap().budget.amount(), 1000);
}

#[test]
fn test_start_planning_accepts_unknown_landing_budget() {
    let mut session = create_test_session();
    let flow = session
        .start_planning(&StartPlanning {
            destination: "Rome".to_string(),
            travelers: 2,
            budget: Some("cheap".to_string()),
        })
        .expect("Failed to start planning");

    assert_eq!(flow.form().budget, BudgetTier::default());
    assert_eq!(session.stage_kind(), StageKind::Planning);
}

#[test]
fn test_start_planning_only_from_landing_screen() {
    let mut session = create_test_session();
    session.start_planning(&paris()).expect("Failed to start planning");

    let err = session.start_planning(&paris()).unwrap_err();
    assert!(matches!(err, TripError::WrongStage { stage: StageKind::Planning, .. }));
}

#[test]
fn test_update_planning_is_all_or_nothing() {
    let mut session = create_test_session();
    session.start_planning(&paris()).expect("Failed to start planning");

    let err = session
        .update_planning(&UpdatePlanning {
            check_in: Some("2030-06-01".to_string()),
            toggle_interests: vec!["food".to_string(), "karaoke".to_string()],
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "interests"));

    let form = session.planning().expect("Still planning").form();
    assert_eq!(form.check_in, None);
    assert!(form.interests.is_empty());
}

#[test]
fn test_update_planning_clamps_travelers_and_sets_budget() {
    let mut session = create_test_session();
    session.start_planning(&paris()).expect("Failed to start planning");

    let flow = session
        .update_planning(&UpdatePlanning {
            budget: Some(3000),
            travelers: Some(25),
            ..Default::default()
        })
        .expect("Failed to update form");
    assert_eq!(flow.form().budget, BudgetTier::UltraLuxury);
    assert_eq!(flow.form().travelers, 10);

    assert!(session
        .update_planning(&UpdatePlanning {
            budget: Some(750),
            ..Default::default()
        })
        .is_err());
}

#[tokio::test]
async fn test_advance_is_blocked_until_step_is_valid() {
    let mut session = create_test_session();
    session.start_planning(&paris()).expect("Failed to start planning");

    assert_eq!(session.advance_planning().await.unwrap(), Transition::Blocked);

    session
        .update_planning(&UpdatePlanning {
            check_in: Some("2030-06-01".to_string()),
            check_out: Some("2030-06-04".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(
        session.advance_planning().await.unwrap(),
        Transition::Step(PlanningStep::Interests)
    );
    assert_eq!(session.advance_planning().await.unwrap(), Transition::Blocked);
    assert_eq!(session.planning().unwrap().step(), PlanningStep::Interests);
}

#[tokio::test]
async fn test_completing_planning_enters_discovery() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;

    let trip = session.trip().expect("Trip is retained");
    assert_eq!(trip.destination, "Paris");
    assert_eq!(trip.interests, vec![Interest::Food, Interest::Culture]);
    assert_eq!(trip.nights(), Some(3));
    assert!(session.selection().is_empty());
    assert_eq!(session.catalog().map(Catalog::len), Some(12));
    assert_eq!(session.discovery().unwrap().active_category(), Category::Place);
}

#[tokio::test]
async fn test_catalog_failure_stays_at_last_step() {
    let catalogs = SwitchableCatalog::default();
    catalogs.down.store(true, Ordering::SeqCst);
    let mut session = SessionBuilder::new()
        .with_catalog_provider(catalogs.clone())
        .build()
        .unwrap();

    session.start_planning(&paris()).unwrap();
    session.update_planning(&filled_form()).unwrap();
    session.advance_planning().await.unwrap();
    session.advance_planning().await.unwrap();

    let err = session.advance_planning().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(session.stage_kind(), StageKind::Planning);
    assert_eq!(session.planning().unwrap().step(), PlanningStep::BudgetAndTravelers);

    catalogs.down.store(false, Ordering::SeqCst);
    assert_eq!(
        session.advance_planning().await.unwrap(),
        Transition::Stage(StageKind::Discovery)
    );
}

#[tokio::test]
async fn test_retreat_from_first_step_returns_home() {
    let mut session = create_test_session();
    session.start_planning(&paris()).unwrap();
    session.update_planning(&filled_form()).unwrap();
    session.advance_planning().await.unwrap();

    assert_eq!(session.retreat_planning().unwrap(), Transition::Step(PlanningStep::Dates));
    assert_eq!(session.retreat_planning().unwrap(), Transition::Stage(StageKind::Hero));
    assert!(session.trip().is_none());
}

#[tokio::test]
async fn test_toggle_scenario_updates_summary() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;

    assert_eq!(toggle(&mut session, "p1"), Toggle::Added);
    assert_eq!(toggle(&mut session, "r1"), Toggle::Added);
    let summary = session.summary().expect("Summary while discovering");
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_cost, 835.0);
    assert_eq!(summary.total_hours, 3.5);

    assert_eq!(toggle(&mut session, "p1"), Toggle::Removed);
    let ids: Vec<&str> = session.selection().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["r1"]);
    assert_eq!(session.summary().unwrap().total_cost, 800.0);
}

#[tokio::test]
async fn test_toggle_outside_discovery_is_wrong_stage() {
    let mut session = create_test_session();
    session.start_planning(&paris()).unwrap();

    let err = session
        .toggle_item(&ToggleItem { id: "p1".to_string() })
        .unwrap_err();
    assert!(matches!(err, TripError::WrongStage { stage: StageKind::Planning, .. }));
}

#[tokio::test]
async fn test_browse_switches_tabs() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;

    let discovery = session
        .browse(&Browse {
            category: Some("dining".to_string()),
        })
        .unwrap();
    assert_eq!(discovery.active_category(), Category::Restaurant);

    let discovery = session.browse(&Browse::default()).unwrap();
    assert_eq!(discovery.active_category(), Category::Restaurant);

    assert!(session
        .browse(&Browse {
            category: Some("museums".to_string()),
        })
        .is_err());
}

#[tokio::test]
async fn test_complete_with_empty_selection_is_blocked() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;

    assert_eq!(session.complete_discovery().await.unwrap(), Transition::Blocked);
    assert_eq!(session.stage_kind(), StageKind::Discovery);
}

#[tokio::test]
async fn test_complete_discovery_generates_itinerary() {
    let generator = SwitchableGenerator::default();
    let mut session = SessionBuilder::new()
        .with_catalog_provider(StaticCatalog)
        .with_generator(generator.clone())
        .build()
        .unwrap();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "e3");

    assert_eq!(
        session.complete_discovery().await.unwrap(),
        Transition::Stage(StageKind::Results)
    );
    assert!(generator.saw_selection.load(Ordering::SeqCst));

    let results = session.results().unwrap();
    assert_eq!(results.source(), PlanSource::Manual);
    assert_eq!(results.selected_day(), 1);
    assert_eq!(results.itinerary().days[0].date, jiff::civil::date(2030, 6, 1));
    assert!(session.selection().contains("e3"));
    assert!(trip_present_unless_hero(&session));
}

#[tokio::test]
async fn test_generator_failure_keeps_discovery_selection() {
    let generator = SwitchableGenerator::default();
    generator.down.store(true, Ordering::SeqCst);
    let mut session = SessionBuilder::new()
        .with_catalog_provider(StaticCatalog)
        .with_generator(generator.clone())
        .with_retry_policy(RetryPolicy::none())
        .build()
        .unwrap();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p2");

    assert!(session.complete_discovery().await.is_err());
    assert_eq!(session.stage_kind(), StageKind::Discovery);
    assert!(session.selection().contains("p2"));
}

#[tokio::test]
async fn test_autoplan_clears_selection() {
    let generator = SwitchableGenerator::default();
    let mut session = SessionBuilder::new()
        .with_catalog_provider(StaticCatalog)
        .with_generator(generator.clone())
        .build()
        .unwrap();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "r2");

    let itinerary = session.autoplan().await.expect("Failed to autoplan");
    assert_eq!(itinerary.days.len(), 2);
    assert!(!generator.saw_selection.load(Ordering::SeqCst));
    assert!(session.selection().is_empty());
    assert!(session.results().unwrap().is_autoplanned());
}

#[tokio::test]
async fn test_regenerate_failure_keeps_previous_itinerary() {
    let generator = SwitchableGenerator::default();
    let mut session = SessionBuilder::new()
        .with_catalog_provider(StaticCatalog)
        .with_generator(generator.clone())
        .with_retry_policy(RetryPolicy::none())
        .build()
        .unwrap();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p1");
    session.complete_discovery().await.unwrap();
    session.select_day(&SelectDay { day: 2 }).unwrap();
    let before = session.results().unwrap().itinerary().clone();

    generator.down.store(true, Ordering::SeqCst);
    let err = session.regenerate_plan().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(session.results().unwrap().itinerary(), &before);
    assert_eq!(session.results().unwrap().selected_day(), 2);

    generator.down.store(false, Ordering::SeqCst);
    let itinerary = session.regenerate_plan().await.expect("Failed to regenerate");
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(session.results().unwrap().selected_day(), 2);
}

#[tokio::test]
async fn test_select_day_rejects_missing_day() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p1");
    session.complete_discovery().await.unwrap();

    let day = session.select_day(&SelectDay { day: 2 }).unwrap();
    assert_eq!(day.day, 2);
    assert!(session.select_day(&SelectDay { day: 7 }).is_err());
    assert_eq!(session.results().unwrap().selected_day(), 2);
}

#[tokio::test]
async fn test_back_to_discovery_restores_selection() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p1");
    toggle(&mut session, "e1");
    session.complete_discovery().await.unwrap();

    assert_eq!(
        session.back_to_discovery().unwrap(),
        Transition::Stage(StageKind::Discovery)
    );
    let ids: Vec<&str> = session.selection().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "e1"]);
}

#[tokio::test]
async fn test_back_to_planning_reopens_prefilled_form() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "r3");

    assert_eq!(
        session.back_to_planning().unwrap(),
        Transition::Stage(StageKind::Planning)
    );
    let flow = session.planning().unwrap();
    assert_eq!(flow.step(), PlanningStep::Dates);
    assert_eq!(flow.form().interests, vec![Interest::Food, Interest::Culture]);
    assert!(flow.form().has_dates());
    assert!(session.selection().is_empty());
    assert!(session.catalog().is_none());
    assert!(trip_present_unless_hero(&session));
}

#[tokio::test]
async fn test_navigate_back_by_name() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p4");
    session.complete_discovery().await.unwrap();

    let back = |to: &str| NavigateBack { to: to.to_string() };
    assert!(session.navigate_back(&back("results")).is_err());
    assert!(session.navigate_back(&back("lobby")).is_err());
    assert_eq!(
        session.navigate_back(&back("discovery")).unwrap(),
        Transition::Stage(StageKind::Discovery)
    );
    assert!(session.navigate_back(&back("discovery")).is_err());
    assert_eq!(
        session.navigate_back(&back("home")).unwrap(),
        Transition::Stage(StageKind::Hero)
    );
    assert!(session.trip().is_none());
    assert!(session.selection().is_empty());
}

#[tokio::test]
async fn test_wrong_stage_operations_change_nothing() {
    let mut session = create_test_session();

    assert!(session.back_to_planning().is_err());
    assert!(session.back_to_discovery().is_err());
    assert!(session.regenerate_plan().await.is_err());
    assert!(session.complete_discovery().await.is_err());
    assert!(session.update_planning(&filled_form()).is_err());
    assert_eq!(session.stage_kind(), StageKind::Hero);
    assert!(trip_present_unless_hero(&session));
}

#[tokio::test]
async fn test_build_rejects_missing_catalog_file() {
    let result = SessionBuilder::new()
        .with_catalog_file(Some("/nonexistent/voyage/catalog.json"))
        .build();
    assert!(matches!(result, Err(TripError::Configuration { .. })));
}

#[tokio::test]
async fn test_preview_catalog_leaves_session_untouched() {
    let session = create_test_session();

    let catalog = session.preview_catalog(" Delhi ").await.unwrap();
    assert_eq!(catalog.len(), 12);
    assert!(session.catalog().is_none());
    assert_eq!(session.stage_kind(), StageKind::Hero);

    assert!(session.preview_catalog("  ").await.is_err());
}

#[tokio::test]
async fn test_export_markdown_lists_every_day() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "p1");
    session.complete_discovery().await.unwrap();
    session.select_day(&SelectDay { day: 2 }).unwrap();

    let document = session.export_itinerary(&ExportItinerary::default()).unwrap();
    assert!(document.starts_with("# Your Paris itinerary"));
    assert!(document.contains("## Day 1 ·"));
    assert!(document.contains("## Day 2 ·"));
    assert!(document.contains("Interests: Local Cuisine, Culture & History"));
    assert_eq!(session.results().unwrap().selected_day(), 2);
}

#[tokio::test]
async fn test_export_json_carries_trip_and_selection() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    toggle(&mut session, "r2");
    session.complete_discovery().await.unwrap();

    let json = session
        .export_itinerary(&ExportItinerary {
            format: Some("JSON".to_string()),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["trip"]["destination"], "Paris");
    assert_eq!(value["trip"]["budget"], 1000);
    assert_eq!(value["source"], "manual");
    assert_eq!(value["itinerary"]["days"].as_array().unwrap().len(), 2);
    assert!(!value["selection"].is_null());
}

#[tokio::test]
async fn test_export_autoplanned_trip_has_no_selection() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    session.autoplan().await.unwrap();

    let json = session
        .export_itinerary(&ExportItinerary {
            format: Some("json".to_string()),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["source"], "autoplan");
    assert!(value["selection"].is_null());

    let document = session.export_itinerary(&ExportItinerary::default()).unwrap();
    assert!(document.contains("_Planned automatically from your interests._"));
}

#[tokio::test]
async fn test_export_outside_results_is_wrong_stage() {
    let mut session = create_test_session();
    let err = session.export_itinerary(&ExportItinerary::default()).unwrap_err();
    assert!(matches!(err, TripError::WrongStage { stage: StageKind::Hero, .. }));

    session_in_discovery(&mut session).await;
    let err = session.export_itinerary(&ExportItinerary::default()).unwrap_err();
    assert!(matches!(err, TripError::WrongStage { stage: StageKind::Discovery, .. }));
}

#[tokio::test]
async fn test_export_rejects_unknown_format() {
    let mut session = create_test_session();
    session_in_discovery(&mut session).await;
    session.autoplan().await.unwrap();

    let err = session
        .export_itinerary(&ExportItinerary {
            format: Some("pdf".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "format"));
}
