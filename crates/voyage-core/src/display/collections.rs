//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use crate::models::{Catalog, CatalogItem, Category, Selection};

/// One catalog tab, with each item marked `[x]` when selected.
///
/// # Examples
///
/// ```rust
/// use voyage_core::{
///     display::CatalogListing,
///     models::Category,
///     providers::builtin_catalog,
/// };
///
/// let catalog = builtin_catalog();
/// let listing = CatalogListing::new(catalog.items(Category::Event), Category::Event);
/// let output = format!("{}", listing);
/// assert!(output.contains("## Events"));
/// assert!(output.contains("[ ] **Heritage Walk**"));
/// ```
pub struct CatalogListing<'a> {
    items: &'a [CatalogItem],
    category: Category,
    selection: Option<&'a Selection>,
}

impl<'a> CatalogListing<'a> {
    pub fn new(items: &'a [CatalogItem], category: Category) -> Self {
        Self {
            items,
            category,
            selection: None,
        }
    }

    /// Marks the items that are in `selection`.
    pub fn with_selection(mut self, selection: &'a Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a> fmt::Display for CatalogListing<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.category)?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No {} found.", self.category.label().to_lowercase());
        }

        for item in self.items {
            let marker = match self.selection {
                Some(selection) if selection.contains(&item.id) => "[x] ",
                _ => "[ ] ",
            };
            write!(f, "{marker}{item}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every tab of a catalog, one after another.
pub struct CatalogTabs<'a> {
    pub catalog: &'a Catalog,
    pub selection: Option<&'a Selection>,
}

impl<'a> fmt::Display for CatalogTabs<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let listing = CatalogListing::new(self.catalog.items(category), category);
            match self.selection {
                Some(selection) => write!(f, "{}", listing.with_selection(selection))?,
                None => write!(f, "{listing}")?,
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the selected items.
pub struct SelectionList<'a>(pub &'a Selection);

impl<'a> fmt::Display for SelectionList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "Nothing selected yet.")
        } else {
            for item in self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::SelectedItem, providers::builtin_catalog};

    #[test]
    fn test_listing_marks_selected_items() {
        let catalog = builtin_catalog();
        let mut selection = Selection::new();
        selection.toggle(SelectedItem::from_catalog(&catalog.restaurants[2], Category::Restaurant));

        let output = CatalogListing::new(catalog.items(Category::Restaurant), Category::Restaurant)
            .with_selection(&selection)
            .to_string();
        assert!(output.starts_with("## Dining"));
        assert!(output.contains("[x] **Paranthe Wali Gali**"));
        assert!(output.contains("[ ] **Bukhara**"));
    }

    #[test]
    fn test_empty_listing() {
        let listing = CatalogListing::new(&[], Category::Event);
        assert!(listing.is_empty());
        assert!(listing.to_string().contains("No events found."));
    }

    #[test]
    fn test_catalog_tabs_lists_every_category() {
        let catalog = builtin_catalog();
        let output = CatalogTabs {
            catalog: &catalog,
            selection: None,
        }
        .to_string();
        assert!(output.contains("## Places"));
        assert!(output.contains("## Dining"));
        assert!(output.contains("## Events"));
    }

    #[test]
    fn test_selection_list() {
        let catalog = builtin_catalog();
        let mut selection = Selection::new();
        assert!(SelectionList(&selection).to_string().contains("Nothing selected yet."));

        selection.toggle(SelectedItem::from_catalog(&catalog.places[0], Category::Place));
        let output = SelectionList(&selection).to_string();
        assert!(output.contains("- Red Fort `p1` (place) · ₹35 · 2h"));
    }
}
