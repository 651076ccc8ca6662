//! Custom error types for the parking tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for parking operations
#[derive(Error, Debug)]
pub enum ParkingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl ParkingError {
    /// Create a "not found" error for tickets
    pub fn ticket_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Ticket",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for ParkingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ParkingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for parking operations
pub type ParkingResult<T> = Result<T, ParkingError>;
