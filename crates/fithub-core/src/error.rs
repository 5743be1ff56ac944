//! Error types for the FitHub subscription wizard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire FitHub workspace.
///
/// The selection mutations themselves never fail; these variants cover the
/// edges around them (storage, configuration, registration and checkout).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FithubError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Input rejected by a wizard step (registration, checkout)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FithubError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true when persisted content exists but cannot be turned back
    /// into a selection (bad JSON, unknown schema version, failed migration).
    pub fn is_unparseable_state(&self) -> bool {
        matches!(self, Self::Serialization { .. } | Self::Migration(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FithubError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FithubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for FithubError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::EntityNotFound(id) => Self::not_found("entity", id),
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::IoError { .. } => Self::Io {
                message: err.to_string(),
            },
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, FithubError>`.
pub type Result<T> = std::result::Result<T, FithubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_unparseable_state() {
        let err: FithubError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(err.is_unparseable_state());
    }

    #[test]
    fn test_io_error_is_not_unparseable_state() {
        let err: FithubError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, FithubError::Io { .. }));
        assert!(!err.is_unparseable_state());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FithubError::not_found("goal", "yoga-master").to_string(),
            "Entity not found: goal 'yoga-master'"
        );
        assert_eq!(
            FithubError::validation("No plan selected").to_string(),
            "Validation error: No plan selected"
        );
    }
}
