//! JSON projection of a field list
//!
//! The document is a bare JSON array of field objects with camelCase keys in
//! declaration order. Loading is lenient about missing members (they take
//! their defaults) but strict about unknown type tags.

use formsmith_core::{BuilderError, BuilderResult, ResultExt};
use std::path::Path;

use crate::field::Field;
use crate::store::FieldList;

/// Conventional extension for field-list documents
pub const FIELDS_EXTENSION: &str = "json";

// ============================================================================
// Export
// ============================================================================

/// Serialize fields as a pretty-printed JSON array
pub fn to_json(fields: &[Field]) -> BuilderResult<String> {
    serde_json::to_string_pretty(fields).with_context("Serializing field list")
}

/// Serialize fields as a JSON value
pub fn to_json_value(fields: &[Field]) -> BuilderResult<serde_json::Value> {
    serde_json::to_value(fields).with_context("Serializing field list")
}

// ============================================================================
// Import
// ============================================================================

/// Parse a JSON array of fields
pub fn from_json(json: &str) -> BuilderResult<Vec<Field>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of fields from raw bytes
pub fn from_bytes(bytes: &[u8]) -> BuilderResult<Vec<Field>> {
    let json = std::str::from_utf8(bytes)
        .map_err(|e| BuilderError::validation(format!("Invalid UTF-8: {}", e)))?;
    from_json(json)
}

/// Load a field-list document from disk
pub fn load_fields(path: impl AsRef<Path>) -> BuilderResult<FieldList> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|e| BuilderError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let fields = from_json(&json).map_err(|e| match e {
        BuilderError::JsonSerialization(je) => BuilderError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid field list: {}", je),
        },
        other => other,
    })?;

    tracing::debug!(path = %path.display(), count = fields.len(), "loaded fields");
    Ok(FieldList::from_fields(fields))
}

// ============================================================================
// Tests
// ============================================================================
