//! Catalog providers.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use crate::{
    error::{Result, TripError},
    models::{Catalog, CatalogItem},
};

/// Source of places, restaurants and events for a destination.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the catalog for a destination
    ///
    /// # Errors
    /// `TripError::Unavailable` for transient failures,
    /// `TripError::InvalidInput` when the destination cannot be served.
    async fn fetch_catalog(&self, destination: &str) -> Result<Catalog>;
}

/// Serves the built-in catalog for every destination.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_catalog(&self, destination: &str) -> Result<Catalog> {
        debug!("Serving built-in catalog for {destination}");
        Ok(builtin_catalog())
    }
}

/// Reads the catalog from a JSON file on every fetch.
///
/// The file holds an object with `places`, `restaurants` and `events` arrays
/// of catalog items. The same catalog is served for every destination.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalog {
    async fn fetch_catalog(&self, destination: &str) -> Result<Catalog> {
        debug!("Loading catalog for {destination} from {}", self.path.display());

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TripError::CatalogFile {
                path: self.path.clone(),
                source: e,
            })?;
        let catalog: Catalog = serde_json::from_str(&contents)?;
        catalog.validate()?;
        Ok(catalog)
    }
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    rating: f32,
    price: f64,
    duration_hours: f64,
    tags: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        rating,
        price,
        duration_hours,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}

/// The built-in sample catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog {
        places: vec![
            item("p1", "Red Fort", "Historic Mughal fortress", 4.5, 35.0, 2.0, &["Culture", "History"]),
            item("p2", "India Gate", "War memorial and landmark", 4.3, 0.0, 1.0, &["Culture", "Photography"]),
            item("p3", "Lotus Temple", "Architectural marvel", 4.6, 0.0, 1.5, &["Culture", "Architecture"]),
            item("p4", "Qutub Minar", "Ancient minaret complex", 4.4, 30.0, 2.0, &["Culture", "History"]),
        ],
        restaurants: vec![
            item("r1", "Karim's", "Legendary Mughlai cuisine", 4.2, 800.0, 1.5, &["Mughlai", "Traditional"]),
            item("r2", "Indian Accent", "Modern Indian fine dining", 4.7, 3500.0, 2.0, &["Fine Dining", "Modern"]),
            item("r3", "Paranthe Wali Gali", "Street food paradise", 4.0, 200.0, 1.0, &["Street Food", "Local"]),
            item("r4", "Bukhara", "Award-winning restaurant", 4.8, 4000.0, 2.0, &["Fine Dining", "North Indian"]),
        ],
        events: vec![
            item("e1", "Sound & Light Show", "Red Fort evening show", 4.3, 80.0, 1.0, &["Entertainment", "Evening"]),
            item("e2", "Cooking Class", "Learn authentic Indian cooking", 4.6, 2500.0, 3.0, &["Culture", "Food"]),
            item("e3", "Heritage Walk", "Old Delhi guided tour", 4.4, 500.0, 4.0, &["Culture", "Walking"]),
            item("e4", "Rickshaw Tour", "Chandni Chowk exploration", 4.1, 300.0, 2.0, &["Adventure", "Local"]),
        ],
    }
}
