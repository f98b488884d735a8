//! # Formsmith IR
//!
//! The builder's data model and the state machines that edit it.
//!
//! ## Core Concepts
//!
//! - **Field**: one form-field descriptor (type, label, name, validation...)
//! - **FieldList**: the ordered working document; order is render order
//! - **Registry**: `create_field` stamps out fields with type defaults
//! - **DragState**: source/target drag protocol over a `FieldList`
//! - **EditDialog**: draft-and-commit editing of a single field
//! - **FormSchema**: the validation derived from a field list, shared by the
//!   preview and the code generator
//!

// Module declarations
pub mod dialog;
pub mod drag;
pub mod field;
pub mod registry;
pub mod serialization;
pub mod store;
pub mod validation;

// Re-export commonly used types at crate root
pub use dialog::{EditDialog, SubForm, parse_options};
pub use drag::DragState;
pub use field::{DEFAULT_OTP_LENGTH, Field, FieldValidation, MAX_OTP_LENGTH, is_valid_identifier};
pub use registry::{FieldFactory, PLACEHOLDER_OPTIONS, create_field};
pub use serialization::{from_bytes, from_json, load_fields, to_json, to_json_value};
pub use store::FieldList;
pub use validation::{FieldError, FieldSchema, FormSchema, ValidationResult, is_valid_date};

// Re-export core types that are commonly used with IR
pub use formsmith_core::{
    BuilderError, BuilderResult, Constraint, DefaultValue, FieldId, FieldType, ValueKind,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        BuilderError,
        BuilderResult,
        DragState,
        EditDialog,
        // Core types
        Field,
        FieldId,
        FieldList,
        FieldType,
        FieldValidation,
        FormSchema,
        // Operations
        create_field,
        from_json,
        to_json,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_builder_session() {
        let mut list = FieldList::new();
        let name_id = list.add(FieldType::Text);
        let agree_id = list.add(FieldType::Checkbox);

        let mut dialog = EditDialog::new();
        dialog.open_by_id(&list, agree_id);
        dialog.set_name("agree").unwrap();
        dialog.set_required(true).unwrap();
        assert!(dialog.save(&mut list));

        let mut drag = DragState::new();
        drag.start(agree_id);
        assert!(drag.drop_on(name_id, &mut list));
        assert_eq!(list.fields()[0].name, "agree");

        let json = to_json(list.fields()).unwrap();
        assert_eq!(from_json(&json).unwrap(), list.fields());

        let schema = FormSchema::from_fields(&list);
        assert_eq!(schema.entries().len(), 2);
        assert!(schema.get("agree").unwrap().required);
    }
}
