//! Landing and planning-form operations.

use log::{debug, warn};

use super::{Session, Stage, Transition};
use crate::{
    discovery::DiscoverySelection,
    error::{Result, TripError},
    models::{Interest, StageKind, TripParameters},
    params::{StartPlanning, UpdatePlanning},
    planning::{parse_date, Advance, PlanningFlow, Retreat},
};

impl Session {
    /// Leaves the landing screen and opens the planning form at step 1.
    ///
    /// The form always opens with the default budget. A tier chosen on the
    /// landing screen is only logged; the budget is set in step 3.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` for a blank destination, and
    /// `TripError::WrongStage` outside the landing screen.
    pub fn start_planning(&mut self, params: &StartPlanning) -> Result<&PlanningFlow> {
        if self.stage.kind() != StageKind::Hero {
            return Err(TripError::wrong_stage("start planning", self.stage.kind()));
        }

        let trip = TripParameters::new(&params.destination, params.travelers)?;
        if let Some(budget) = &params.budget {
            debug!("Landing budget '{budget}' noted; the form starts at {}", trip.budget.amount());
        }

        self.trip = Some(trip.clone());
        self.selection.clear();
        self.catalog = None;
        self.enter(Stage::Planning(PlanningFlow::new(trip)));
        self.planning()
    }

    /// Applies field edits to the planning form.
    ///
    /// All edits are validated before any is applied; on error the form is
    /// unchanged.
    pub fn update_planning(&mut self, update: &UpdatePlanning) -> Result<&PlanningFlow> {
        let mut flow = self.planning()?.clone();

        if let Some(check_in) = &update.check_in {
            flow.set_check_in(parse_date("check_in", check_in)?);
        }
        if let Some(check_out) = &update.check_out {
            flow.set_check_out(parse_date("check_out", check_out)?)?;
        }
        for name in &update.toggle_interests {
            let interest = name
                .parse::<Interest>()
                .map_err(|e| TripError::invalid_input("interests").with_reason(e))?;
            flow.toggle_interest(interest);
        }
        if let Some(amount) = update.budget {
            flow.set_budget(amount)?;
        }
        if let Some(travelers) = update.travelers {
            flow.set_travelers(travelers);
        }

        let current = self.planning_mut()?;
        *current = flow;
        Ok(&*current)
    }

    /// Moves the form forward a step.
    ///
    /// From the last step this completes the form: the catalog for the
    /// destination is fetched and the session enters discovery with an empty
    /// selection. If the fetch fails the form stays at the last step and the
    /// error is returned.
    pub async fn advance_planning(&mut self) -> Result<Transition> {
        let mut flow = self.planning()?.clone();

        let trip = match flow.advance() {
            Advance::Moved(step) => {
                debug!("Planning: moved to step {}", step.number());
                *self.planning_mut()? = flow;
                return Ok(Transition::Step(step));
            }
            Advance::Blocked => {
                debug!("Planning: step {} is incomplete", flow.step().number());
                return Ok(Transition::Blocked);
            }
            Advance::Completed(trip) => trip,
        };

        let catalog = self
            .catalogs
            .fetch_catalog(&trip.destination)
            .await
            .inspect_err(|e| warn!("Catalog lookup for {} failed: {e}", trip.destination))?;
        debug!("Fetched {} catalog items for {}", catalog.len(), trip.destination);

        self.trip = Some(trip);
        self.catalog = Some(catalog.clone());
        self.selection.clear();
        Ok(self.enter(Stage::Discovery(DiscoverySelection::new(catalog))))
    }

    /// Moves the form back a step, or returns to the landing screen from
    /// step 1.
    pub fn retreat_planning(&mut self) -> Result<Transition> {
        match self.planning_mut()?.retreat() {
            Retreat::Moved(step) => {
                debug!("Planning: moved back to step {}", step.number());
                Ok(Transition::Step(step))
            }
            Retreat::Exit => {
                self.reset();
                Ok(Transition::Stage(StageKind::Hero))
            }
        }
    }
}
