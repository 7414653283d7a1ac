//! Error types for the Fitlog application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Fitlog application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
///
/// The variants mirror how errors are handled at runtime:
/// - [`FitlogError::Validation`] and [`FitlogError::UnknownSelection`] are
///   always recoverable; the dialogue re-prompts in the same state.
/// - [`FitlogError::CatalogConflict`] is reported to the user but the flow
///   still completes.
/// - [`FitlogError::Storage`] aborts the current flow back to the idle
///   state without a partial commit. It is never retried silently.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FitlogError {
    /// Malformed or out-of-range user input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Duplicate exercise or template name within a category
    #[error("Catalog conflict: '{name}' already exists in {category}")]
    CatalogConflict { category: String, name: String },

    /// Durable read/write failure (file system operations)
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Menu text that matches no active transition
    #[error("Unknown selection: {0}")]
    UnknownSelection(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FitlogError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a CatalogConflict error
    pub fn catalog_conflict(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::CatalogConflict {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates an UnknownSelection error
    pub fn unknown_selection(text: impl Into<String>) -> Self {
        Self::UnknownSelection(text.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a CatalogConflict error
    pub fn is_catalog_conflict(&self) -> bool {
        matches!(self, Self::CatalogConflict { .. })
    }

    /// Check if this is a Storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if this is an UnknownSelection error
    pub fn is_unknown_selection(&self) -> bool {
        matches!(self, Self::UnknownSelection(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FitlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FitlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for FitlogError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, FitlogError>`.
pub type Result<T> = std::result::Result<T, FitlogError>;
