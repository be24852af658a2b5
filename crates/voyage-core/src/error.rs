//! Error types for the trip planning library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::StageKind;

/// Comprehensive error type for all session and collaborator operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Operation invoked while the session is in a stage that does not
    /// accept it
    #[error("Cannot {operation} while in the {stage} stage")]
    WrongStage { operation: String, stage: StageKind },
    /// Transient collaborator failure (catalog lookup, itinerary generation)
    #[error("Service unavailable: {message}")]
    Unavailable { message: String },
    /// Catalog file could not be read
    #[error("Catalog file error at path '{path}': {source}")]
    CatalogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a stage mismatch error for the named operation.
    pub fn wrong_stage(operation: impl Into<String>, stage: StageKind) -> Self {
        Self::WrongStage {
            operation: operation.into(),
            stage,
        }
    }

    /// Creates a transient collaborator failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Whether retrying the same request may succeed.
    ///
    /// Only transient collaborator failures are retryable; input and stage
    /// errors will fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Result type alias for trip planning operations
pub type Result<T> = std::result::Result<T, TripError>;
