//! Error types for arcade-contacts.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the backing contact collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the collection file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection file could not be parsed or written as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No record exists for the given identifier
    #[error("No contact with id {0}")]
    UnknownId(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UnknownId("abc123".to_string());
        assert_eq!(err.to_string(), "No contact with id abc123");

        let err = ConfigError::InvalidValue {
            var: "ARCADE_CONTACTS_DB".to_string(),
            reason: "path is empty".to_string(),
        };
        assert!(err.to_string().contains("ARCADE_CONTACTS_DB"));
        assert!(err.to_string().contains("path is empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
