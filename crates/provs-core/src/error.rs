//! Error types for Provs core operations.
//!
//! Errors carry the resource type and identifier they concern so callers can
//! report them without extra bookkeeping. The CLI layer maps these to exit
//! codes and user-facing messages.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Core error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested record does not exist
    #[error("Not found: {resource_type}/{id}")]
    NotFound { resource_type: String, id: String },

    /// Listing a resource type that has never been written
    #[error("Resource type not found: {resource_type}")]
    NamespaceNotFound { resource_type: String },

    /// Backend constructed with an unusable configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Caller supplied an unusable identifier or resource type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error other than a missing record
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encode or decode failure
    #[error("Serialization error ({context}): {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend failure without an underlying I/O error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Whether this error means the addressed record does not exist.
    ///
    /// Used by "create if missing" provisioning logic.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_record() {
        let err = StoreError::not_found("coffees", "1");
        assert_eq!(err.to_string(), "Not found: coffees/1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_namespace_not_found_is_distinct() {
        let err = StoreError::NamespaceNotFound {
            resource_type: "order".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StoreError::io(
            "write order/abc",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("order/abc"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
