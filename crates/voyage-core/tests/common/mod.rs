use std::{fs, path::PathBuf};

use tempfile::TempDir;
use voyage_core::{
    params::{StartPlanning, UpdatePlanning},
    RetryPolicy, Session, SessionBuilder, StageKind, Transition,
};

/// Catalog with one item per category, in the on-disk JSON format
pub const SMALL_CATALOG: &str = r#"{
    "places": [
        {"id": "lx1", "title": "Belém Tower", "description": "Riverside fortress", "rating": 4.6,
         "price": 10, "duration": 1.5, "tags": ["Culture"]}
    ],
    "restaurants": [
        {"id": "lx2", "title": "Time Out Market", "description": "Food hall", "rating": 4.4,
         "price": 25, "duration_hours": 1}
    ],
    "events": [
        {"id": "lx3", "title": "Fado Night", "description": "Live fado in Alfama", "rating": 4.8,
         "price": 40, "duration": 2.5, "tags": ["Nightlife", "Music"]}
    ]
}"#;

/// Helper function to write a catalog file into a temporary directory
pub fn create_catalog_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, contents).expect("Failed to write catalog file");
    (temp_dir, path)
}

/// Helper function to create a test session reading `SMALL_CATALOG`
pub fn create_test_session() -> (TempDir, Session) {
    let (temp_dir, path) = create_catalog_file(SMALL_CATALOG);
    let session = SessionBuilder::new()
        .with_catalog_file(Some(&path))
        .with_retry_policy(RetryPolicy::none())
        .build()
        .expect("Failed to create session");
    (temp_dir, session)
}

/// Drives a session from the landing screen into discovery.
pub async fn plan_trip(session: &mut Session, destination: &str) {
    session
        .start_planning(&StartPlanning {
            destination: destination.to_string(),
            travelers: 2,
            budget: Some("moderate".to_string()),
        })
        .expect("Failed to start planning");
    session
        .update_planning(&UpdatePlanning {
            check_in: Some("2030-09-10".to_string()),
            check_out: Some("2030-09-12".to_string()),
            toggle_interests: vec!["nightlife".to_string()],
            ..Default::default()
        })
        .expect("Failed to fill the planning form");

    let mut transition = Transition::Blocked;
    for _ in 0..3 {
        transition = session.advance_planning().await.expect("Failed to advance");
    }
    assert_eq!(transition, Transition::Stage(StageKind::Discovery));
}
