//! The traveler's selection of catalog items.

use serde::{Deserialize, Serialize};

use super::{CatalogItem, Category};

/// A catalog item copied into the selection at the moment it was picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedItem {
    /// Id of the catalog item this was copied from
    pub id: String,

    /// Catalog the item was toggled from
    pub category: Category,

    pub title: String,

    /// Price of the catalog item at selection time
    pub cost: f64,

    /// Duration of the catalog item, in hours
    pub duration_hours: f64,
}

impl SelectedItem {
    /// Copies the selection-relevant fields out of a catalog item.
    pub fn from_catalog(item: &CatalogItem, category: Category) -> Self {
        Self {
            id: item.id.clone(),
            category,
            title: item.title.clone(),
            cost: item.price,
            duration_hours: item.duration_hours,
        }
    }
}

/// Result of toggling an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The item was not selected and has been appended
    Added,

    /// The item was selected and has been removed
    Removed,
}

/// Ordered set of selected items keyed by id.
///
/// Items keep their insertion order; no two items share an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<SelectedItem>", into = "Vec<SelectedItem>")]
pub struct Selection(Vec<SelectedItem>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the item with the same id if present, otherwise appends it.
    pub fn toggle(&mut self, item: SelectedItem) -> Toggle {
        if let Some(index) = self.position(&item.id) {
            self.0.remove(index);
            Toggle::Removed
        } else {
            self.0.push(item);
            Toggle::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&SelectedItem> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|item| item.id == id)
    }
}

impl From<Vec<SelectedItem>> for Selection {
    /// Builds a selection, keeping only the first item for each id.
    fn from(items: Vec<SelectedItem>) -> Self {
        let mut selection = Selection::new();
        for item in items {
            if !selection.contains(&item.id) {
                selection.0.push(item);
            }
        }
        selection
    }
}

impl From<Selection> for Vec<SelectedItem> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectedItem;
    type IntoIter = std::slice::Iter<'a, SelectedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
