//! Error types for Formsmith
//!
//! This module provides unified error handling across the builder core,
//! including field validation errors, store errors, serialization errors,
//! and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Formsmith
#[derive(Debug, Error)]
pub enum BuilderError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field validation failed
    #[error("Field validation failed for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    /// Unknown field-type tag
    #[error("Unknown field type: '{0}'")]
    UnknownFieldType(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Field not found by name
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Index outside the current field list
    #[error("Index {index} is out of bounds for a field list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    // ========================================================================
    // Interaction Errors
    // ========================================================================
    /// Attempt to write to a disabled field in the preview
    #[error("Field '{0}' is disabled")]
    FieldDisabled(String),

    /// Attempt to edit through a dialog that is not open
    #[error("Edit dialog is closed")]
    DialogClosed,

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl BuilderError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BuilderError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        BuilderError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        BuilderError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BuilderError::Validation(_)
                | BuilderError::FieldValidation { .. }
                | BuilderError::UnknownFieldType(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BuilderError::FieldNotFound(_) | BuilderError::IndexOutOfBounds { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            BuilderError::FileRead { .. }
                | BuilderError::FileWrite { .. }
                | BuilderError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using BuilderError
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T>;
}

impl<T, E: Into<BuilderError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T> {
        self.map_err(|e| {
            let err: BuilderError = e.into();
            BuilderError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = BuilderError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = BuilderError::field_validation("email", "Invalid identifier");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'email': Invalid identifier"
        );
    }

    #[test]
    fn test_out_of_bounds_is_not_found() {
        let err = BuilderError::IndexOutOfBounds { index: 4, len: 2 };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Index 4 is out of bounds for a field list of length 2"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = BuilderError::with_context("Loading fields", "Permission denied");
        assert_eq!(err.to_string(), "Loading fields: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_json_error() {
        let parsed: Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err = parsed.with_context("Parsing values").unwrap_err();
        assert!(err.to_string().starts_with("Parsing values: JSON serialization error"));
    }

    #[test]
    fn test_io_error_classification() {
        let err = BuilderError::FileWrite {
            path: PathBuf::from("out/form.tsx"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_io());
        assert!(!err.is_validation());
    }
}
