//! Catalog items grouped by category.

use std::{collections::HashSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// The three independently browsable catalogs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Place,
    Restaurant,
    Event,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Place, Category::Restaurant, Category::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Place => "place",
            Category::Restaurant => "restaurant",
            Category::Event => "event",
        }
    }

    /// Tab label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Place => "Places",
            Category::Restaurant => "Dining",
            Category::Event => "Events",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "place" | "places" => Ok(Category::Place),
            "restaurant" | "restaurants" | "dining" => Ok(Category::Restaurant),
            "event" | "events" => Ok(Category::Event),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// A place, restaurant or event a traveler can add to their selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Identifier, unique across all three catalogs
    pub id: String,

    pub title: String,

    pub description: String,

    /// Average rating out of 5
    pub rating: f32,

    /// Cost of the item; zero means free
    pub price: f64,

    /// Time the item takes, in hours
    #[serde(alias = "duration")]
    pub duration_hours: f64,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

/// Places, restaurants and events available for a destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub places: Vec<CatalogItem>,

    #[serde(default)]
    pub restaurants: Vec<CatalogItem>,

    #[serde(default)]
    pub events: Vec<CatalogItem>,
}

impl Catalog {
    /// Items of a single category.
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Place => &self.places,
            Category::Restaurant => &self.restaurants,
            Category::Event => &self.events,
        }
    }

    /// Every item paired with the category it belongs to, in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CatalogItem)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.items(category).iter().map(move |item| (category, item)))
    }

    /// Finds an item by id along with its category.
    pub fn find(&self, id: &str) -> Option<(&CatalogItem, Category)> {
        self.iter()
            .find(|(_, item)| item.id == id)
            .map(|(category, item)| (item, category))
    }

    pub fn len(&self) -> usize {
        self.places.len() + self.restaurants.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that ids are unique across categories and that prices and
    /// durations are non-negative.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` naming the first offending item.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (_, item) in self.iter() {
            if item.id.trim().is_empty() {
                return Err(TripError::invalid_input("id").with_reason(format!(
                    "Catalog item '{}' has an empty id",
                    item.title
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(TripError::invalid_input("id")
                    .with_reason(format!("Duplicate catalog id '{}'", item.id)));
            }
            if item.price.is_nan() || item.price < 0.0 {
                return Err(TripError::invalid_input("price")
                    .with_reason(format!("Item '{}' has a negative price", item.id)));
            }
            if item.duration_hours.is_nan() || item.duration_hours < 0.0 {
                return Err(TripError::invalid_input("duration_hours")
                    .with_reason(format!("Item '{}' has a negative duration", item.id)));
            }
        }
        Ok(())
    }
}
