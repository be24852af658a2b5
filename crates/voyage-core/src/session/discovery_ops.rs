//! Catalog browsing, selection and itinerary requests.

use log::{debug, warn};

use super::{ResultsView, Session, Stage, Transition};
use crate::{
    discovery::{DiscoveryOutcome, DiscoverySelection},
    error::{Result, TripError},
    models::{Catalog, Category, Itinerary, PlanSource, Selection, Toggle},
    params::{Browse, ToggleItem},
};

impl Session {
    /// Looks up the catalog for a destination without touching the session
    /// state.
    pub async fn preview_catalog(&self, destination: &str) -> Result<Catalog> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TripError::invalid_input("destination").with_reason("must not be blank"));
        }
        self.catalogs
            .fetch_catalog(destination)
            .await
            .inspect_err(|e| warn!("Catalog preview for {destination} failed: {e}"))
    }

    /// Switches the catalog tab being browsed.
    ///
    /// Without a category the current tab is kept, which makes this a way to
    /// look at the discovery state.
    pub fn browse(&mut self, params: &Browse) -> Result<&DiscoverySelection> {
        let category = params
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(|e| TripError::invalid_input("category").with_reason(e))?;

        let discovery = self.discovery_mut()?;
        if let Some(category) = category {
            discovery.set_active_category(category);
        }
        Ok(&*discovery)
    }

    /// Selects or deselects a catalog item by id.
    pub fn toggle_item(&mut self, params: &ToggleItem) -> Result<Toggle> {
        let toggle = self.discovery_mut()?.toggle_by_id(params.id.trim())?;
        debug!("Discovery: {} {toggle:?}", params.id.trim());
        Ok(toggle)
    }

    /// Requests an itinerary built from the selected items.
    ///
    /// Blocked while nothing is selected. On generator failure the session
    /// stays in discovery with the selection intact.
    pub async fn complete_discovery(&mut self) -> Result<Transition> {
        let outcome = self.discovery()?.complete();
        self.finish_discovery(outcome).await
    }

    /// Requests an itinerary chosen entirely by the generator, regardless of
    /// what is selected. The selection is cleared once the itinerary arrives.
    pub async fn autoplan(&mut self) -> Result<&Itinerary> {
        let outcome = self.discovery()?.autoplan();
        self.finish_discovery(outcome).await?;
        self.results().map(ResultsView::itinerary)
    }

    async fn finish_discovery(&mut self, outcome: DiscoveryOutcome) -> Result<Transition> {
        let (selection, source) = match outcome {
            DiscoveryOutcome::Selected(selection) => (selection, PlanSource::Manual),
            DiscoveryOutcome::Autoplan => (Selection::new(), PlanSource::Autoplan),
            DiscoveryOutcome::Blocked => {
                debug!("Discovery: nothing selected");
                return Ok(Transition::Blocked);
            }
        };

        let trip = self.retained_trip("generate an itinerary")?;
        let requested = match source {
            PlanSource::Manual => Some(&selection),
            PlanSource::Autoplan => None,
        };
        let itinerary = self
            .generator
            .generate(trip, requested)
            .await
            .inspect_err(|e| warn!("Itinerary generation for {} failed: {e}", trip.destination))?;
        debug!(
            "Generated {}-day {} itinerary with {} activities",
            itinerary.days.len(),
            source.as_str(),
            itinerary.total_activities()
        );

        self.selection = selection;
        Ok(self.enter(Stage::Results(ResultsView::new(itinerary, source))))
    }
}
