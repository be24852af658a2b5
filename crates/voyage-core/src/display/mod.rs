//! Display formatting functions and view types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrapper types for the contexts the models are shown in:
//! catalog tabs, selection lists, notices and whole stage screens.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Trip, Catalog) │───▶│ Stage Views     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, so the CLI can render it with a terminal skin and
//! the MCP server can return it as text content unchanged.
//!
//! ## Module Organization
//!
//! - [`collections`]: Catalog listings and the selection list
//! - [`views`]: One view per session stage, plus [`StageView`] which picks the
//!   right one
//! - [`status`]: Dismissible notices ([`Notice`])
//! - [`datetime`]: Date formatting utilities
//! - [`units`]: Money and duration formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use voyage_core::{display::Notice, TripError};
//!
//! let error = TripError::unavailable("generator offline");
//! let notice = Notice::from_error(&error);
//! assert!(format!("{notice}").starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod units;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::{CatalogListing, CatalogTabs, SelectionList};
pub use datetime::{LongDate, StayDates};
pub use status::{Notice, NoticeKind};
pub use units::{Amount, Hours, Price};
pub use views::{DiscoveryView, HeroView, ItineraryDocument, PlanningView, ResultsPage, StageView};
