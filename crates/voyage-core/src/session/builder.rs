//! Builder for creating and configuring Session instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Session;
use crate::{
    error::{Result, TripError},
    providers::{
        CatalogProvider, ItineraryGenerator, JsonCatalog, RetryPolicy, RetryingGenerator, StaticCatalog,
        StaticItinerary,
    },
};

/// Builder for creating and configuring Session instances.
#[derive(Clone)]
pub struct SessionBuilder {
    catalog_file: Option<PathBuf>,
    catalogs: Option<Arc<dyn CatalogProvider>>,
    generator: Option<Arc<dyn ItineraryGenerator>>,
    retry_policy: RetryPolicy,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            catalog_file: None,
            catalogs: None,
            generator: None,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Sets a JSON catalog file to serve catalogs from.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/voyage/catalog.json` or
    /// `~/.local/share/voyage/catalog.json` when that file exists, and the
    /// built-in catalog otherwise.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a custom catalog provider. Takes precedence over any catalog
    /// file.
    pub fn with_catalog_provider<C>(mut self, provider: C) -> Self
    where
        C: CatalogProvider + 'static,
    {
        self.catalogs = Some(Arc::new(provider));
        self
    }

    /// Uses a custom itinerary generator instead of the built-in sample.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: ItineraryGenerator + 'static,
    {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Sets how often a failing generator is retried.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Builds the configured session, starting on the landing screen.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Configuration` if an explicitly configured catalog
    /// file does not exist
    pub fn build(self) -> Result<Session> {
        let catalogs: Arc<dyn CatalogProvider> = match (self.catalogs, self.catalog_file) {
            (Some(provider), _) => provider,
            (None, Some(path)) => {
                if !path.is_file() {
                    return Err(TripError::Configuration {
                        message: format!("Catalog file '{}' does not exist", path.display()),
                    });
                }
                debug!("Using catalog file {}", path.display());
                Arc::new(JsonCatalog::new(path))
            }
            (None, None) => match Self::default_catalog_path() {
                Some(path) => {
                    debug!("Using catalog file {}", path.display());
                    Arc::new(JsonCatalog::new(path))
                }
                None => Arc::new(StaticCatalog),
            },
        };

        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(StaticItinerary) as Arc<dyn ItineraryGenerator>);
        let generator: Arc<dyn ItineraryGenerator> = if self.retry_policy.max_attempts > 1 {
            Arc::new(RetryingGenerator::new(generator, self.retry_policy))
        } else {
            generator
        };

        Ok(Session::new(catalogs, generator))
    }

    /// Returns the catalog file found under the XDG data directories, if
    /// any.
    pub fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("voyage").find_data_file("catalog.json")
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
