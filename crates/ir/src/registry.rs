//! Field registry / factory
//!
//! Produces new fields with type-appropriate defaults. Ids are random UUIDs;
//! names come from a process-wide counter so two fields created in quick
//! succession never share a name. Names are only unique at creation time:
//! the edit dialog lets the user rename a field without any re-check.

use std::sync::atomic::{AtomicU64, Ordering};

use formsmith_core::FieldType;

use crate::field::{DEFAULT_OTP_LENGTH, Field, FieldValidation};

/// Options seeded into every new choice field
pub const PLACEHOLDER_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

static NAME_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Create a new field of the given type with its defaults applied.
pub fn create_field(field_type: FieldType) -> Field {
    let mut field = Field::new(
        field_type,
        next_name(),
        format!("New {} field", field_type.as_str()),
    );

    match field_type {
        FieldType::Select | FieldType::Radio | FieldType::Combobox => {
            field.options = PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect();
        }
        FieldType::Otp => {
            field.validation = Some(
                FieldValidation::new()
                    .with_min_length(DEFAULT_OTP_LENGTH)
                    .with_max_length(DEFAULT_OTP_LENGTH),
            );
        }
        _ => {}
    }

    tracing::debug!(id = %field.id, name = %field.name, field_type = %field_type, "created field");
    field
}

/// The palette's factory handle
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFactory;

impl FieldFactory {
    /// Create a new field of the given type; see [`create_field`]
    pub fn create(field_type: FieldType) -> Field {
        create_field(field_type)
    }
}

fn next_name() -> String {
    let n = NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("name_{}", n)
}

// ============================================================================
// Tests
// ============================================================================
