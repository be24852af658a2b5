//! Itinerary regeneration, day selection, export and backwards navigation.

use log::{debug, warn};
use serde::Serialize;

use super::{ResultsView, Session, Stage, Transition};
use crate::{
    discovery::DiscoverySelection,
    display::ItineraryDocument,
    error::{Result, TripError},
    models::{ExportFormat, Itinerary, ItineraryDay, PlanSource, Selection, StageKind, TripParameters},
    params::{ExportItinerary, NavigateBack, SelectDay},
    planning::PlanningFlow,
};

/// JSON shape of an exported trip.
#[derive(Serialize)]
struct TripExport<'a> {
    trip: &'a TripParameters,
    source: PlanSource,
    selection: Option<&'a Selection>,
    itinerary: &'a Itinerary,
}

impl Session {
    /// Asks the generator again with the same trip and selection.
    ///
    /// The new itinerary replaces the shown one only on success; on failure
    /// the previous itinerary stays and the error is returned.
    pub async fn regenerate_plan(&mut self) -> Result<&Itinerary> {
        let source = self.results()?.source();
        let trip = self.retained_trip("regenerate the itinerary")?;
        let selection = match source {
            PlanSource::Manual => Some(&self.selection),
            PlanSource::Autoplan => None,
        };

        let itinerary = self
            .generator
            .generate(trip, selection)
            .await
            .inspect_err(|e| warn!("Regenerating the itinerary for {} failed: {e}", trip.destination))?;
        debug!("Regenerated {}-day itinerary", itinerary.days.len());

        let view = self.results_mut()?;
        view.replace_itinerary(itinerary);
        Ok(view.itinerary())
    }

    /// Shows another day of the itinerary.
    pub fn select_day(&mut self, params: &SelectDay) -> Result<&ItineraryDay> {
        self.results_mut()?.select_day(params.day)
    }

    /// Renders the shown itinerary as a document to save or share.
    ///
    /// Markdown lists every day in order; JSON carries the trip parameters,
    /// the selection the plan was built from, and the itinerary. The session
    /// is not changed.
    ///
    /// # Errors
    ///
    /// Returns `TripError::WrongStage` outside the results screen and
    /// `TripError::InvalidInput` for an unknown format.
    pub fn export_itinerary(&self, params: &ExportItinerary) -> Result<String> {
        let view = self.results()?;
        let format = params
            .format
            .as_deref()
            .map(str::parse::<ExportFormat>)
            .transpose()
            .map_err(|e| TripError::invalid_input("format").with_reason(e))?
            .unwrap_or_default();
        debug!("Exporting {}-day itinerary as {}", view.itinerary().days.len(), format.as_str());

        match format {
            ExportFormat::Markdown => Ok(ItineraryDocument {
                view,
                trip: self.trip(),
            }
            .to_string()),
            ExportFormat::Json => {
                let trip = self.retained_trip("export the itinerary")?;
                let export = TripExport {
                    trip,
                    source: view.source(),
                    selection: (view.source() == PlanSource::Manual).then_some(&self.selection),
                    itinerary: view.itinerary(),
                };
                Ok(serde_json::to_string_pretty(&export)?)
            }
        }
    }

    /// Reopens the planning form at step 1, pre-filled with the retained
    /// trip. The selection and catalog are discarded.
    pub fn back_to_planning(&mut self) -> Result<Transition> {
        match self.stage.kind() {
            StageKind::Discovery | StageKind::Results => {}
            other => return Err(TripError::wrong_stage("go back to planning", other)),
        }

        let trip = self.retained_trip("go back to planning")?.clone();
        self.selection.clear();
        self.catalog = None;
        Ok(self.enter(Stage::Planning(PlanningFlow::new(trip))))
    }

    /// Leaves the itinerary and returns to the catalog with the selection
    /// that produced it.
    pub fn back_to_discovery(&mut self) -> Result<Transition> {
        if self.stage.kind() != StageKind::Results {
            return Err(TripError::wrong_stage("go back to discovery", self.stage.kind()));
        }

        let catalog = self
            .catalog
            .clone()
            .ok_or_else(|| TripError::wrong_stage("go back to discovery", self.stage.kind()))?;
        let selection = self.selection.clone();
        Ok(self.enter(Stage::Discovery(DiscoverySelection::with_selection(catalog, selection))))
    }

    /// Returns to the landing screen from any stage.
    pub fn back_to_hero(&mut self) -> Transition {
        self.reset();
        Transition::Stage(StageKind::Hero)
    }

    /// Navigates back to a named earlier stage.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` for an unknown stage name or for
    /// `results`, which is only reachable forwards.
    pub fn navigate_back(&mut self, params: &NavigateBack) -> Result<Transition> {
        let target = params
            .to
            .parse::<StageKind>()
            .map_err(|e| TripError::invalid_input("to").with_reason(e))?;

        match target {
            StageKind::Hero => Ok(self.back_to_hero()),
            StageKind::Planning => self.back_to_planning(),
            StageKind::Discovery => self.back_to_discovery(),
            StageKind::Results => Err(TripError::invalid_input("to")
                .with_reason("The results stage is reached by completing discovery")),
        }
    }
}

impl ResultsView {
    /// Whether the shown itinerary was planned without a manual selection.
    pub fn is_autoplanned(&self) -> bool {
        self.source == PlanSource::Autoplan
    }
}
