//! # Edit Dialog Controller
//!
//! Draft-and-commit workflow for editing one field.
//!
//! ```text
//! Closed ──open(Some(field))──► Open(draft)
//!   ▲                              │
//!   ├──────── cancel() ────────────┤  draft discarded
//!   └──────── save(list) ──────────┘  list.update_by_id(draft.id, draft)
//! ```
//!
//! While open, every setter mutates only the draft; the stored field is
//! untouched until `save`.

use formsmith_core::{BuilderError, BuilderResult, FieldId, FieldType};

use crate::field::Field;
use crate::store::FieldList;

// ============================================================================
// Types
// ============================================================================

/// The type-specific editor shown below the common inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubForm {
    /// No extra inputs
    None,
    /// Newline-delimited options editor (choice types)
    Options,
    /// Min / max numeric inputs (number)
    NumericRange,
}

impl SubForm {
    /// Pick the sub-form for a field type
    pub fn for_type(field_type: FieldType) -> Self {
        if field_type.is_choice() {
            SubForm::Options
        } else if field_type == FieldType::Number {
            SubForm::NumericRange
        } else {
            SubForm::None
        }
    }
}

/// Dialog state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditDialog {
    /// Nothing is being edited
    #[default]
    Closed,
    /// Editing a working copy
    Open {
        /// The working copy
        draft: Field,
    },
}

// ============================================================================
// EditDialog
// ============================================================================

impl EditDialog {
    /// Create a closed dialog
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open on a copy of `field`. `None` leaves the dialog closed.
    pub fn open(&mut self, field: Option<&Field>) {
        if let Some(field) = field {
            tracing::debug!(id = %field.id, "open edit dialog");
            *self = EditDialog::Open {
                draft: field.clone(),
            };
        }
    }

    /// Open on the stored field with `id`, if it exists
    pub fn open_by_id(&mut self, list: &FieldList, id: FieldId) {
        self.open(list.get(id));
    }

    /// Check if the dialog is open
    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open { .. })
    }

    /// The current draft
    pub fn draft(&self) -> Option<&Field> {
        match self {
            EditDialog::Open { draft } => Some(draft),
            EditDialog::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> BuilderResult<&mut Field> {
        match self {
            EditDialog::Open { draft } => Ok(draft),
            EditDialog::Closed => Err(BuilderError::DialogClosed),
        }
    }

    /// Which conditional editor applies to the draft
    pub fn sub_form(&self) -> SubForm {
        self.draft()
            .map(|d| SubForm::for_type(d.field_type))
            .unwrap_or(SubForm::None)
    }

    // ========================================================================
    // Common inputs
    // ========================================================================

    /// Set the draft's label
    pub fn set_label(&mut self, label: impl Into<String>) -> BuilderResult<()> {
        self.draft_mut()?.label = label.into();
        Ok(())
    }

    /// Set the draft's name (no uniqueness check)
    pub fn set_name(&mut self, name: impl Into<String>) -> BuilderResult<()> {
        self.draft_mut()?.name = name.into();
        Ok(())
    }

    /// Set the draft's description; empty text clears it
    pub fn set_description(&mut self, text: impl Into<String>) -> BuilderResult<()> {
        self.draft_mut()?.description = non_empty(text.into());
        Ok(())
    }

    /// Set the draft's placeholder; empty text clears it
    pub fn set_placeholder(&mut self, text: impl Into<String>) -> BuilderResult<()> {
        self.draft_mut()?.placeholder = non_empty(text.into());
        Ok(())
    }

    /// Set the draft's class names; empty text clears them
    pub fn set_class_name(&mut self, text: impl Into<String>) -> BuilderResult<()> {
        self.draft_mut()?.class_name = non_empty(text.into());
        Ok(())
    }

    /// Toggle required
    pub fn set_required(&mut self, required: bool) -> BuilderResult<()> {
        self.draft_mut()?.required = required;
        Ok(())
    }

    /// Toggle disabled
    pub fn set_disabled(&mut self, disabled: bool) -> BuilderResult<()> {
        self.draft_mut()?.disabled = disabled;
        Ok(())
    }

    // ========================================================================
    // Conditional inputs
    // ========================================================================

    /// The options editor text: one option per line
    pub fn options_text(&self) -> String {
        self.draft()
            .map(|d| d.options.join("\n"))
            .unwrap_or_default()
    }

    /// Replace the draft's options from newline-delimited text.
    ///
    /// Lines are trimmed and blank lines dropped.
    pub fn set_options_text(&mut self, text: &str) -> BuilderResult<()> {
        self.require_sub_form(SubForm::Options)?;
        self.draft_mut()?.options = parse_options(text);
        Ok(())
    }

    /// Set or clear `validation.min`
    pub fn set_min(&mut self, min: Option<f64>) -> BuilderResult<()> {
        self.require_sub_form(SubForm::NumericRange)?;
        let draft = self.draft_mut()?;
        draft.validation_mut().min = min;
        draft.prune_validation();
        Ok(())
    }

    /// Set or clear `validation.max`
    pub fn set_max(&mut self, max: Option<f64>) -> BuilderResult<()> {
        self.require_sub_form(SubForm::NumericRange)?;
        let draft = self.draft_mut()?;
        draft.validation_mut().max = max;
        draft.prune_validation();
        Ok(())
    }

    fn require_sub_form(&self, wanted: SubForm) -> BuilderResult<()> {
        let draft = self.draft().ok_or(BuilderError::DialogClosed)?;
        if SubForm::for_type(draft.field_type) == wanted {
            Ok(())
        } else {
            Err(BuilderError::field_validation(
                &draft.name,
                format!(
                    "{} fields have no {:?} editor",
                    draft.field_type.display_name(),
                    wanted
                ),
            ))
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Commit the draft into `list` and close.
    ///
    /// Returns whether the list held a field with the draft's id. A closed
    /// dialog does nothing.
    pub fn save(&mut self, list: &mut FieldList) -> bool {
        match std::mem::take(self) {
            EditDialog::Open { draft } => {
                tracing::debug!(id = %draft.id, "save edit dialog");
                list.update_by_id(draft.id, draft)
            }
            EditDialog::Closed => false,
        }
    }

    /// Close and discard the draft
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("cancel edit dialog");
        }
        *self = EditDialog::Closed;
    }
}

/// Split editor text into options, dropping blank lines
pub fn parse_options(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(field_type: FieldType) -> (FieldList, FieldId) {
        let mut list = FieldList::new();
        let id = list.add(field_type);
        (list, id)
    }

    #[test]
    fn test_open_without_field_stays_closed() {
        let mut dialog = EditDialog::new();
        dialog.open(None);
        assert!(!dialog.is_open());
        assert!(dialog.set_label("x").is_err());
    }

    #[test]
    fn test_open_unknown_id_stays_closed() {
        let (list, _) = list_with(FieldType::Text);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, uuid::Uuid::new_v4());
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_edits_touch_only_the_draft_until_save() {
        let (mut list, id) = list_with(FieldType::Text);
        let original = list.get(id).unwrap().clone();

        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);
        dialog.set_label("Full name").unwrap();
        dialog.set_name("full_name").unwrap();
        dialog.set_required(true).unwrap();
        dialog.set_placeholder("Jane Doe").unwrap();

        assert_eq!(list.get(id), Some(&original));

        assert!(dialog.save(&mut list));
        assert!(!dialog.is_open());

        let saved = list.get(id).unwrap();
        assert_eq!(saved.label, "Full name");
        assert_eq!(saved.name, "full_name");
        assert!(saved.required);
        assert_eq!(saved.placeholder.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let (mut list, id) = list_with(FieldType::Email);
        let before = list.clone();

        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);
        dialog.set_label("changed").unwrap();
        dialog.cancel();

        assert!(!dialog.is_open());
        assert!(!dialog.save(&mut list));
        assert_eq!(list, before);
    }

    #[test]
    fn test_options_editor_parses_lines() {
        let (mut list, id) = list_with(FieldType::Select);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);

        assert_eq!(dialog.sub_form(), SubForm::Options);
        assert_eq!(dialog.options_text(), "Option 1\nOption 2\nOption 3");

        dialog.set_options_text("Red\n\n  Green \n\nBlue\n").unwrap();
        dialog.save(&mut list);
        assert_eq!(list.get(id).unwrap().options, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_numeric_range_editor() {
        let (mut list, id) = list_with(FieldType::Number);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);

        assert_eq!(dialog.sub_form(), SubForm::NumericRange);
        dialog.set_min(Some(5.0)).unwrap();
        dialog.set_max(Some(10.0)).unwrap();
        dialog.save(&mut list);

        let v = list.get(id).unwrap().validation.clone().unwrap();
        assert_eq!(v.min, Some(5.0));
        assert_eq!(v.max, Some(10.0));
    }

    #[test]
    fn test_clearing_range_drops_validation() {
        let (mut list, id) = list_with(FieldType::Number);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);
        dialog.set_min(Some(1.0)).unwrap();
        dialog.set_min(None).unwrap();
        dialog.save(&mut list);
        assert!(list.get(id).unwrap().validation.is_none());
    }

    #[test]
    fn test_sub_forms_are_type_specific() {
        let (list, id) = list_with(FieldType::Text);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);

        assert_eq!(dialog.sub_form(), SubForm::None);
        assert!(dialog.set_options_text("a\nb").is_err());
        assert!(dialog.set_min(Some(1.0)).is_err());
    }

    #[test]
    fn test_save_after_field_removed() {
        let (mut list, id) = list_with(FieldType::Text);
        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, id);
        list.remove_by_id(id);

        assert!(!dialog.save(&mut list));
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options("a\r\nb\n \nc"), vec!["a", "b", "c"]);
        assert!(parse_options("\n\n").is_empty());
    }
}
