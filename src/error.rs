//! Custom error types for cabinet-stats
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cabinet-stats operations
#[derive(Error, Debug)]
pub enum CabinetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input at the entry boundary, naming the offending field
    #[error("Validation error: {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Batch import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CabinetError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The offending field of a validation error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CabinetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CabinetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CabinetError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for cabinet-stats operations
pub type CabinetResult<T> = Result<T, CabinetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CabinetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_names_field() {
        let err = CabinetError::validation("totalRevenue", "not a number: abc");
        assert_eq!(
            err.to_string(),
            "Validation error: totalRevenue: not a number: abc"
        );
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("totalRevenue"));
    }

    #[test]
    fn test_non_validation_has_no_field() {
        let err = CabinetError::Export("disk full".into());
        assert!(!err.is_validation());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CabinetError = io_err.into();
        assert!(matches!(err, CabinetError::Io(_)));
    }
}
