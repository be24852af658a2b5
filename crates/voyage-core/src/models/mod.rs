//! Data models for trips, catalogs, selections and itineraries.
//!
//! This module contains the domain models that flow through a planning
//! session. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! ## Model Overview
//!
//! - [`TripParameters`]: destination, dates, party size, budget tier and
//!   interests collected by the planning form
//! - [`Catalog`] / [`CatalogItem`]: places, restaurants and events offered for
//!   a destination
//! - [`Selection`] / [`SelectedItem`]: the items a traveler picked, keyed by id
//! - [`Itinerary`]: the day-by-day plan returned by an itinerary generator
//! - [`StageKind`] / [`PlanningStep`]: where the session currently is
//!
//! # Examples
//!
//! ```rust
//! use voyage_core::models::{CatalogItem, Category, SelectedItem, Selection, Toggle};
//!
//! let item = CatalogItem {
//!     id: "p1".to_string(),
//!     title: "Red Fort".to_string(),
//!     description: "Historic Mughal fortress".to_string(),
//!     rating: 4.5,
//!     price: 35.0,
//!     duration_hours: 2.0,
//!     tags: vec!["Culture".to_string()],
//! };
//!
//! let mut selection = Selection::new();
//! let toggled = selection.toggle(SelectedItem::from_catalog(&item, Category::Place));
//! assert_eq!(toggled, Toggle::Added);
//! assert!(selection.contains("p1"));
//! ```

pub mod catalog;
pub mod itinerary;
pub mod selection;
pub mod stage;
pub mod trip;


// Re-export all public types at the models level
pub use catalog::{Catalog, CatalogItem, Category};
pub use itinerary::{Activity, ActivityKind, ExportFormat, Itinerary, ItineraryDay, Period, PriceLevel};
pub use selection::{SelectedItem, Selection, Toggle};
pub use stage::{PlanSource, PlanningStep, StageKind};
pub use trip::{clamp_travelers, BudgetTier, Interest, TripParameters, MAX_TRAVELERS, MIN_TRAVELERS};
