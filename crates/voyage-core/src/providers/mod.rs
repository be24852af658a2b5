//! Collaborators the session relies on: catalog lookup and itinerary
//! generation.
//!
//! Both are async traits so a network-backed implementation can replace the
//! built-in ones without changing how the session calls them.
//!
//! ```text
//! ┌─────────────────┐   fetch_catalog    ┌──────────────────────┐
//! │                 │───────────────────▶│   CatalogProvider    │
//! │     Session     │                    │ (StaticCatalog,      │
//! │                 │                    │  JsonCatalog)        │
//! │                 │   generate         ├──────────────────────┤
//! │                 │───────────────────▶│ ItineraryGenerator   │
//! └─────────────────┘                    │ (StaticItinerary,    │
//!                                        │  RetryingGenerator)  │
//!                                        └──────────────────────┘
//! ```

pub mod catalog;
pub mod itinerary;
pub mod retry;

pub use catalog::{builtin_catalog, CatalogProvider, JsonCatalog, StaticCatalog};
pub use itinerary::{ItineraryGenerator, StaticItinerary};
pub use retry::{RetryPolicy, RetryingGenerator};
