//! Drag-reorder protocol
//!
//! A drag sensor reports a source field when a drag starts and a target field
//! when it ends. Indices are looked up at drop time, so a list mutated
//! mid-drag reorders against its current layout.

use formsmith_core::FieldId;

use crate::store::FieldList;

/// Tracks the field currently being dragged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    active: Option<FieldId>,
}

impl DragState {
    /// Create an idle drag state
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `source`
    pub fn start(&mut self, source: FieldId) {
        self.active = Some(source);
    }

    /// The field being dragged, if any
    pub fn active(&self) -> Option<FieldId> {
        self.active
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Abandon the drag without touching the list
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Finish the drag over `target`.
    ///
    /// Returns `true` if the list was reordered. The drag ends either way.
    pub fn drop_on(&mut self, target: FieldId, list: &mut FieldList) -> bool {
        match self.active.take() {
            Some(source) => list.move_onto(source, target),
            None => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
