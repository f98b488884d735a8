//! Field list store
//!
//! An ordered sequence of fields, exclusively owned by its caller. Order is
//! significant: it is the render order of every projection.

use formsmith_core::{BuilderError, BuilderResult, FieldId, FieldType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::Field;
use crate::registry::FieldFactory;

// ============================================================================
// FieldList
// ============================================================================

/// The builder's working document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing sequence
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a field at the end
    pub fn append(&mut self, field: Field) {
        tracing::debug!(id = %field.id, name = %field.name, "append field");
        self.fields.push(field);
    }

    /// Create a field of the given type and append it; returns its id
    pub fn add(&mut self, field_type: FieldType) -> FieldId {
        let field = FieldFactory::create(field_type);
        let id = field.id;
        self.append(field);
        id
    }

    /// Remove a field by ID. Unknown ids are a no-op.
    pub fn remove_by_id(&mut self, id: FieldId) -> Option<Field> {
        let pos = self.position(id)?;
        tracing::debug!(%id, index = pos, "remove field");
        Some(self.fields.remove(pos))
    }

    /// Replace the field with the given ID wholesale. Unknown ids are a no-op.
    pub fn update_by_id(&mut self, id: FieldId, field: Field) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                tracing::debug!(%id, name = %field.name, "update field");
                *slot = field;
                true
            }
            None => false,
        }
    }

    /// Move the element at `from` to `to`, shifting the ones in between.
    ///
    /// Both indices must address current elements; otherwise the list is left
    /// untouched and `IndexOutOfBounds` is returned.
    pub fn reorder(&mut self, from: usize, to: usize) -> BuilderResult<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(BuilderError::IndexOutOfBounds { index, len });
            }
        }

        if from != to {
            let field = self.fields.remove(from);
            self.fields.insert(to, field);
            tracing::debug!(from, to, "reorder fields");
        }
        Ok(())
    }

    /// Move `source` into the current position of `target`.
    ///
    /// Positions are resolved now, not when a drag started. Returns `false`
    /// (and does nothing) when the ids are equal or either is absent.
    pub fn move_onto(&mut self, source: FieldId, target: FieldId) -> bool {
        if source == target {
            return false;
        }
        match (self.position(source), self.position(target)) {
            (Some(from), Some(to)) => self.reorder(from, to).is_ok(),
            _ => false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All fields in order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Get a field by ID
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Current index of a field
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names used by more than one field, in first-seen order
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for field in &self.fields {
            *counts.entry(field.name.as_str()).or_default() += 1;
        }

        let mut duplicates: Vec<String> = Vec::new();
        for field in &self.fields {
            if counts[field.name.as_str()] > 1 && !duplicates.contains(&field.name) {
                duplicates.push(field.name.clone());
            }
        }
        duplicates
    }

    /// Consume the list
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self::from_fields(fields)
    }
}

// ============================================================================
// Tests
// ============================================================================
