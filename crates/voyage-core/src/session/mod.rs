//! The planning session: Hero → Planning → Discovery → Results.
//!
//! [`Session`] owns the whole state of one trip-planning session. Exactly one
//! stage is active at a time, and every stage is mutated only through the
//! session's operations, which also enforce which operations each stage
//! accepts.
//!
//! ```text
//!            start_planning            advance (step 3)
//!  ┌──────┐ ───────────────▶ ┌──────────┐ ───────────────▶ ┌───────────┐
//!  │ Hero │                  │ Planning │                  │ Discovery │
//!  └──────┘ ◀─────────────── └──────────┘ ◀─────────────── └───────────┘
//!      ▲      retreat (step 1)      ▲      back_to_planning    │    ▲
//!      │                            │                complete/ │    │ back_to_
//!      │ reset (any stage)          │ back_to_planning autoplan│    │ discovery
//!      │                            │                          ▼    │
//!      │                            │                        ┌─────────┐
//!      └────────────────────────────┴────────────────────────│ Results │⟲ regenerate
//!                                                            └─────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Session`] instances with configured
//!   collaborators
//! - `planning_ops`: Landing and planning-form operations
//! - `discovery_ops`: Catalog browsing, selection and itinerary requests
//! - `results_ops`: Itinerary regeneration, day selection and backwards
//!   navigation
//!
//! Operations that call a collaborator are `async` and change the session
//! only after the collaborator has answered, so a failed or cancelled call
//! leaves the session as it was. They take `&mut self`, so no other
//! transition can run while a request is outstanding.
//!
//! # Examples
//!
//! ```rust
//! use voyage_core::{params::StartPlanning, SessionBuilder, StageKind};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new().build()?;
//!
//! session.start_planning(&StartPlanning {
//!     destination: "Paris".to_string(),
//!     travelers: 2,
//!     budget: None,
//! })?;
//! assert_eq!(session.stage_kind(), StageKind::Planning);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::debug;

use crate::{
    aggregate::SelectionSummary,
    discovery::DiscoverySelection,
    error::{Result, TripError},
    models::{Catalog, Itinerary, ItineraryDay, PlanSource, PlanningStep, Selection, StageKind, TripParameters},
    planning::PlanningFlow,
    providers::{CatalogProvider, ItineraryGenerator},
};

pub mod builder;
mod discovery_ops;
mod planning_ops;
mod results_ops;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;

/// Outcome of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to another step of the planning form
    Step(PlanningStep),
    /// Entered another stage
    Stage(StageKind),
    /// The operation's precondition does not hold yet; nothing changed
    Blocked,
}

/// The itinerary being shown on the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    itinerary: Itinerary,
    selected_day: u32,
    source: PlanSource,
}

impl ResultsView {
    /// Shows `itinerary`, starting at its first day.
    pub fn new(itinerary: Itinerary, source: PlanSource) -> Self {
        let selected_day = itinerary.first_day().unwrap_or(1);
        Self {
            itinerary,
            selected_day,
            source,
        }
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Number of the day currently shown.
    pub fn selected_day(&self) -> u32 {
        self.selected_day
    }

    pub fn current_day(&self) -> Option<&ItineraryDay> {
        self.itinerary.day(self.selected_day)
    }

    pub fn source(&self) -> PlanSource {
        self.source
    }

    /// Shows another day.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if the itinerary has no such day.
    pub fn select_day(&mut self, day: u32) -> Result<&ItineraryDay> {
        let days = self.itinerary.days.len();
        let index = self
            .itinerary
            .days
            .iter()
            .position(|d| d.day == day)
            .ok_or_else(|| {
                TripError::invalid_input("day")
                    .with_reason(format!("Day {day} is not part of this {days}-day itinerary"))
            })?;
        self.selected_day = day;
        Ok(&self.itinerary.days[index])
    }

    /// Swaps in a regenerated itinerary, staying on the same day if it still
    /// exists.
    pub fn replace_itinerary(&mut self, itinerary: Itinerary) {
        if itinerary.day(self.selected_day).is_none() {
            self.selected_day = itinerary.first_day().unwrap_or(1);
        }
        self.itinerary = itinerary;
    }
}

/// The stage currently shown, with its stage-local state.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Hero,
    Planning(PlanningFlow),
    Discovery(DiscoverySelection),
    Results(ResultsView),
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Hero => StageKind::Hero,
            Stage::Planning(_) => StageKind::Planning,
            Stage::Discovery(_) => StageKind::Discovery,
            Stage::Results(_) => StageKind::Results,
        }
    }
}

/// State of one trip-planning session and the collaborators it calls.
pub struct Session {
    catalogs: Arc<dyn CatalogProvider>,
    generator: Arc<dyn ItineraryGenerator>,
    stage: Stage,
    /// Trip parameters retained across stages; absent only on the landing
    /// screen
    trip: Option<TripParameters>,
    /// Catalog fetched when planning completed
    catalog: Option<Catalog>,
    /// Selection handed over when discovery completed
    selection: Selection,
}

impl Session {
    /// Creates a session on the landing screen.
    pub(crate) fn new(catalogs: Arc<dyn CatalogProvider>, generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self {
            catalogs,
            generator,
            stage: Stage::Hero,
            trip: None,
            catalog: None,
            selection: Selection::new(),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_kind(&self) -> StageKind {
        self.stage.kind()
    }

    /// Trip parameters retained by the session.
    ///
    /// While planning this is the record the form was opened with; edits
    /// made in the form are visible through [`planning`](Self::planning)
    /// until the form is completed.
    pub fn trip(&self) -> Option<&TripParameters> {
        self.trip.as_ref()
    }

    /// Catalog fetched for the trip, once planning has completed.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The live selection while discovering, otherwise the selection handed
    /// over to the itinerary generator.
    pub fn selection(&self) -> &Selection {
        match &self.stage {
            Stage::Discovery(discovery) => discovery.selection(),
            _ => &self.selection,
        }
    }

    /// Totals for the current selection against the trip's budget.
    pub fn summary(&self) -> Option<SelectionSummary> {
        let trip = self.trip.as_ref()?;
        Some(SelectionSummary::compute(
            self.selection().items(),
            trip.budget,
            trip.travelers,
        ))
    }

    pub fn planning(&self) -> Result<&PlanningFlow> {
        match &self.stage {
            Stage::Planning(flow) => Ok(flow),
            other => Err(TripError::wrong_stage("edit the planning form", other.kind())),
        }
    }

    pub fn planning_mut(&mut self) -> Result<&mut PlanningFlow> {
        match &mut self.stage {
            Stage::Planning(flow) => Ok(flow),
            other => Err(TripError::wrong_stage("edit the planning form", other.kind())),
        }
    }

    pub fn discovery(&self) -> Result<&DiscoverySelection> {
        match &self.stage {
            Stage::Discovery(discovery) => Ok(discovery),
            other => Err(TripError::wrong_stage("change the selection", other.kind())),
        }
    }

    pub fn discovery_mut(&mut self) -> Result<&mut DiscoverySelection> {
        match &mut self.stage {
            Stage::Discovery(discovery) => Ok(discovery),
            other => Err(TripError::wrong_stage("change the selection", other.kind())),
        }
    }

    pub fn results(&self) -> Result<&ResultsView> {
        match &self.stage {
            Stage::Results(view) => Ok(view),
            other => Err(TripError::wrong_stage("view the itinerary", other.kind())),
        }
    }

    fn results_mut(&mut self) -> Result<&mut ResultsView> {
        match &mut self.stage {
            Stage::Results(view) => Ok(view),
            other => Err(TripError::wrong_stage("view the itinerary", other.kind())),
        }
    }

    /// Trip parameters, which every stage after the landing screen has.
    fn retained_trip(&self, operation: &str) -> Result<&TripParameters> {
        self.trip
            .as_ref()
            .ok_or_else(|| TripError::wrong_stage(operation, self.stage.kind()))
    }

    /// Returns to the landing screen, discarding everything.
    pub fn reset(&mut self) {
        debug!("Session: {} -> hero (reset)", self.stage.kind());
        self.stage = Stage::Hero;
        self.trip = None;
        self.catalog = None;
        self.selection.clear();
    }

    fn enter(&mut self, stage: Stage) -> Transition {
        let kind = stage.kind();
        debug!("Session: {} -> {}", self.stage.kind(), kind);
        self.stage = stage;
        Transition::Stage(kind)
    }
}
