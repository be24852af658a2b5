//! Catalog browsing and item selection.

use crate::{
    aggregate::SelectionSummary,
    error::{Result, TripError},
    models::{Catalog, CatalogItem, Category, SelectedItem, Selection, Toggle, TripParameters},
};

/// Outcome of finishing the discovery stage.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryOutcome {
    /// Build the itinerary from these items
    Selected(Selection),
    /// Let the itinerary generator choose everything
    Autoplan,
    /// Nothing is selected; the stage cannot be completed yet
    Blocked,
}

/// One selection shared across the place, restaurant and event catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverySelection {
    catalog: Catalog,
    selection: Selection,
    active: Category,
}

impl DiscoverySelection {
    /// Starts browsing `catalog` with nothing selected.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selection(catalog, Selection::new())
    }

    /// Starts browsing `catalog` with a previously made selection restored.
    pub fn with_selection(catalog: Catalog, selection: Selection) -> Self {
        Self {
            catalog,
            selection,
            active: Category::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Catalog tab currently being browsed.
    pub fn active_category(&self) -> Category {
        self.active
    }

    pub fn set_active_category(&mut self, category: Category) {
        self.active = category;
    }

    /// Selects the item if it is not selected, deselects it otherwise.
    ///
    /// The selected copy records `category` as the catalog it came from.
    pub fn toggle(&mut self, item: &CatalogItem, category: Category) -> Toggle {
        self.selection.toggle(SelectedItem::from_catalog(item, category))
    }

    /// Toggles a catalog item by id.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if no catalog item has this id.
    pub fn toggle_by_id(&mut self, id: &str) -> Result<Toggle> {
        let (item, category) = self.catalog.find(id).ok_or_else(|| {
            TripError::invalid_input("id").with_reason(format!("No catalog item with id '{id}'"))
        })?;
        let item = item.clone();
        Ok(self.toggle(&item, category))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Whether [`complete`](Self::complete) would hand over a selection.
    pub fn can_complete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Hands over the selection, or reports that nothing is selected.
    pub fn complete(&self) -> DiscoveryOutcome {
        if self.can_complete() {
            DiscoveryOutcome::Selected(self.selection.clone())
        } else {
            DiscoveryOutcome::Blocked
        }
    }

    /// Skips manual selection in favour of a generated plan.
    pub fn autoplan(&self) -> DiscoveryOutcome {
        DiscoveryOutcome::Autoplan
    }

    /// Cost, time and budget totals for the current selection.
    pub fn summary(&self, trip: &TripParameters) -> SelectionSummary {
        SelectionSummary::compute(self.selection.items(), trip.budget, trip.travelers)
    }
}
