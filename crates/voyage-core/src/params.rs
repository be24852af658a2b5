//! Parameter structures for session operations
//!
//! These structures are shared by every interface that drives a session (the
//! interactive wizard, the one-shot `plan` command, the MCP server) and are
//! kept free of framework-specific derives. Text fields carry the raw user
//! input; the session parses and validates them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types to add their own derives, converting
//! with `From`/`into()`:
//!
//! ```ignore
//! // In the CLI
//! impl From<PlanArgs> for StartPlanning { ... }
//!
//! // In the MCP server
//! #[derive(Deserialize)]
//! #[serde(transparent)]
//! struct McpParams<T>(T);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_travelers() -> u32 {
    2
}

/// Parameters for leaving the landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartPlanning {
    /// Where the trip goes (required, must not be blank)
    pub destination: String,
    /// Number of travelers, clamped to 1-10 (defaults to 2)
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// Budget tier shown on the landing screen. It is not carried into the
    /// form, which always starts at the default of 1000 per day; set the
    /// budget with `UpdatePlanning::budget`
    #[serde(default)]
    pub budget: Option<String>,
}

impl Default for StartPlanning {
    fn default() -> Self {
        Self {
            destination: String::new(),
            travelers: default_travelers(),
            budget: None,
        }
    }
}

/// Field edits applied to the planning form.
///
/// Every field is optional; absent fields are left unchanged. Edits are
/// applied in declaration order, so a new check-in is set before a new
/// check-out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePlanning {
    /// Check-in date as YYYY-MM-DD
    pub check_in: Option<String>,
    /// Check-out date as YYYY-MM-DD, not before check-in
    pub check_out: Option<String>,
    /// Interest ids to toggle (food, culture, nightlife, adventure,
    /// shopping, nature)
    #[serde(default)]
    pub toggle_interests: Vec<String>,
    /// Daily per-person budget: 500, 1000, 2000 or 3000
    pub budget: Option<u32>,
    /// Number of travelers, clamped to 1-10
    pub travelers: Option<u32>,
}

impl UpdatePlanning {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none()
            && self.check_out.is_none()
            && self.toggle_interests.is_empty()
            && self.budget.is_none()
            && self.travelers.is_none()
    }
}

/// Parameters for toggling a catalog item in or out of the selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleItem {
    /// Catalog item id, e.g. "p1"
    pub id: String,
}

/// Parameters for browsing one catalog tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Browse {
    /// Category to switch to (places, dining, events); keeps the current
    /// tab when absent
    pub category: Option<String>,
}

/// Parameters for choosing which itinerary day to show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectDay {
    /// 1-based day number
    pub day: u32,
}

/// Parameters for navigating backwards between stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NavigateBack {
    /// Stage to return to: hero, planning or discovery
    pub to: String,
}

/// Parameters for exporting the itinerary on the results screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportItinerary {
    /// Output format: markdown (default) or json
    pub format: Option<String>,
}
