//! Core library for the Voyage trip planning wizard.
//!
//! This crate holds the state of a trip-planning session as it moves from the
//! landing screen through a three-step planning form, catalog discovery and
//! the generated itinerary. Catalog lookup and itinerary generation are
//! pluggable collaborators.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Catalog listings, notices and one
//!   view per session stage
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use voyage_core::{
//!     display::StageView,
//!     params::{StartPlanning, ToggleItem, UpdatePlanning},
//!     SessionBuilder, StageKind, Transition,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new().build()?;
//!
//! session.start_planning(&StartPlanning {
//!     destination: "Delhi".to_string(),
//!     travelers: 2,
//!     budget: None,
//! })?;
//! session.update_planning(&UpdatePlanning {
//!     check_in: Some("2030-03-15".to_string()),
//!     check_out: Some("2030-03-17".to_string()),
//!     toggle_interests: vec!["culture".to_string()],
//!     budget: Some(2000),
//!     ..Default::default()
//! })?;
//!
//! // Dates, interests, then budget and travelers
//! while session.stage_kind() == StageKind::Planning {
//!     if session.advance_planning().await? == Transition::Blocked {
//!         break;
//!     }
//! }
//!
//! session.toggle_item(&ToggleItem { id: "p1".to_string() })?;
//! session.complete_discovery().await?;
//! println!("{}", StageView(&session));
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod discovery;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planning;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use aggregate::SelectionSummary;
pub use discovery::{DiscoveryOutcome, DiscoverySelection};
pub use display::{Notice, StageView};
pub use error::{Result, TripError};
pub use models::{
    BudgetTier, Catalog, CatalogItem, Category, ExportFormat, Interest, Itinerary, ItineraryDay, PlanSource, PlanningStep,
    SelectedItem, Selection, StageKind, Toggle, TripParameters,
};
pub use params::{Browse, ExportItinerary, NavigateBack, SelectDay, StartPlanning, ToggleItem, UpdatePlanning};
pub use planning::{Advance, PlanningFlow, Progress, Retreat};
pub use providers::{
    CatalogProvider, ItineraryGenerator, JsonCatalog, RetryPolicy, RetryingGenerator, StaticCatalog,
    StaticItinerary,
};
pub use session::{ResultsView, Session, SessionBuilder, Stage, Transition};
