//! Field definitions for form fields
//!
//! This module contains the `Field` struct and its validation metadata. A
//! `Field` is the sole entity of a form: every projection (JSON, preview,
//! generated code) is derived from a list of them.

use formsmith_core::{
    BuilderError, BuilderResult, FieldId, FieldType, TypeBehavior, Validatable,
};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Exact length of a one-time-code field when none is configured
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Longest one-time code a field may ask for
pub const MAX_OTP_LENGTH: usize = 12;

// ============================================================================
// Field
// ============================================================================

/// One form-field descriptor.
///
/// Serialized with camelCase keys in declaration order; optional members are
/// omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Unique identifier (nil when absent or not a UUID)
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: FieldId,

    /// Field type tag
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display label
    #[serde(default)]
    pub label: String,

    /// Form-submission key (identifier-like, unique within a list)
    #[serde(default)]
    pub name: String,

    /// Help text shown below the control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Placeholder text for the control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// CSS class names for styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Whether a value must be supplied
    #[serde(default)]
    pub required: bool,

    /// Whether the control is non-interactive
    #[serde(default)]
    pub disabled: bool,

    /// Choices for select, radio and combobox fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Validation metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl Field {
    /// Create a new field with a fresh id
    pub fn new(field_type: FieldType, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            field_type,
            label: label.into(),
            name: name.into(),
            description: None,
            placeholder: None,
            class_name: None,
            required: false,
            disabled: false,
            options: Vec::new(),
            validation: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the CSS class names
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Replace the options list
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the validation record
    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Edit the validation record, creating it if needed
    pub fn validation_mut(&mut self) -> &mut FieldValidation {
        self.validation.get_or_insert_with(FieldValidation::default)
    }

    /// Drop the validation record if every member is empty
    pub fn prune_validation(&mut self) {
        if self.validation.as_ref().is_some_and(FieldValidation::is_empty) {
            self.validation = None;
        }
    }

    // ========================================================================
    // Utility methods
    // ========================================================================

    /// Behaviour record for this field's type
    pub fn behavior(&self) -> TypeBehavior {
        self.field_type.behavior()
    }

    /// Check if this field takes an options list
    pub fn is_choice(&self) -> bool {
        self.field_type.is_choice()
    }

    /// Check if the field has a usable id and name.
    ///
    /// Partially edited fields can transiently lack either; projections skip
    /// them instead of failing.
    pub fn is_renderable(&self) -> bool {
        !self.id.is_nil() && is_valid_identifier(&self.name)
    }

    /// Number of characters an OTP field expects, capped at [`MAX_OTP_LENGTH`]
    pub fn otp_length(&self) -> usize {
        self.validation
            .as_ref()
            .and_then(|v| v.max_length)
            .filter(|n| *n > 0)
            .map_or(DEFAULT_OTP_LENGTH, |n| n.min(MAX_OTP_LENGTH))
    }

    /// Placeholder text, or an empty string
    pub fn placeholder_or_empty(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    /// Class names, or an empty string
    pub fn class_name_or_empty(&self) -> &str {
        self.class_name.as_deref().unwrap_or("")
    }
}

impl Validatable for Field {
    fn validate(&self) -> BuilderResult<()> {
        if self.id.is_nil() {
            return Err(BuilderError::field_validation(&self.name, "Field id is missing"));
        }

        if self.name.is_empty() {
            return Err(BuilderError::validation("Field name cannot be empty"));
        }

        if !is_valid_identifier(&self.name) {
            return Err(BuilderError::field_validation(
                &self.name,
                format!("'{}' is not a valid identifier", self.name),
            ));
        }

        if self.is_choice() && self.options.is_empty() {
            return Err(BuilderError::field_validation(
                &self.name,
                format!("{} field needs at least one option", self.field_type.display_name()),
            ));
        }

        if self.field_type == FieldType::Otp {
            if let Some(n) = self.validation.as_ref().and_then(|v| v.max_length) {
                if n > MAX_OTP_LENGTH {
                    return Err(BuilderError::field_validation(
                        &self.name,
                        format!("OTP length {} exceeds the maximum of {}", n, MAX_OTP_LENGTH),
                    ));
                }
            }
        }

        if let Some(validation) = &self.validation {
            validation.validate().map_err(|e| {
                BuilderError::field_validation(&self.name, e.to_string())
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// FieldValidation
// ============================================================================

/// Validation metadata attached to a field.
///
/// Meaning depends on the field type: lengths and pattern apply to text-like
/// fields, `min`/`max` to numbers, and `maxLength` sets an OTP's length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// Regex the value must match (unanchored)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Minimum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Minimum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldValidation {
    /// Create an empty validation record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the minimum length
    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Set the numeric minimum
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the numeric maximum
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Check if no member is set
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
    }
}

impl Validatable for FieldValidation {
    fn validate(&self) -> BuilderResult<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(BuilderError::validation(format!(
                    "minLength {} exceeds maxLength {}",
                    min, max
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(BuilderError::validation(format!(
                    "min {} exceeds max {}",
                    min, max
                )));
            }
        }

        if let Some(pattern) = &self.pattern {
            regex::Regex::new(pattern).map_err(|e| {
                BuilderError::validation(format!("Invalid pattern '{}': {}", pattern, e))
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Read an id, mapping anything that is not a UUID string to nil
fn lenient_id<'de, D>(deserializer: D) -> Result<FieldId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let id = raw
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::nil);
    if id.is_nil() && !raw.is_null() {
        tracing::debug!(id = %raw, "unusable field id");
    }
    Ok(id)
}

/// Check if a string is usable as a form key and a JavaScript identifier
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    // First character must be letter or underscore
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }

    // Rest must be alphanumeric or underscore
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

// ============================================================================
// Tests
// ============================================================================
