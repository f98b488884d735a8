//! Core types used throughout Formsmith
//!
//! This module contains the closed set of field types, the per-type behaviour
//! table every projection dispatches through, and the validation constraints
//! shared by the preview validator and the generated zod schema.

use crate::error::BuilderError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for field unique identifiers
pub type FieldId = uuid::Uuid;

// ============================================================================
// Field Types
// ============================================================================

/// The closed set of form field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Password,
    Combobox,
    Date,
    Otp,
    File,
    Switch,
}

impl FieldType {
    /// Get the wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Password => "password",
            FieldType::Combobox => "combobox",
            FieldType::Date => "date",
            FieldType::Otp => "otp",
            FieldType::File => "file",
            FieldType::Switch => "switch",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Email => "Email",
            FieldType::Textarea => "Textarea",
            FieldType::Select => "Select",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio",
            FieldType::Password => "Password",
            FieldType::Combobox => "Combobox",
            FieldType::Date => "Date",
            FieldType::Otp => "OTP",
            FieldType::File => "File",
            FieldType::Switch => "Switch",
        }
    }

    /// Get all field types in palette order
    pub fn palette() -> &'static [FieldType] {
        &[
            FieldType::Text,
            FieldType::Number,
            FieldType::Email,
            FieldType::Textarea,
            FieldType::Select,
            FieldType::Checkbox,
            FieldType::Radio,
            FieldType::Password,
            FieldType::Combobox,
            FieldType::Date,
            FieldType::Otp,
            FieldType::File,
            FieldType::Switch,
        ]
    }

    /// Whether this type carries an `options` list
    pub fn is_choice(&self) -> bool {
        self.behavior().choice
    }

    /// Look up the behaviour record for this type.
    ///
    /// This is the single dispatch table consulted by the preview and code
    /// projections, so both agree on value kind and default value.
    pub const fn behavior(self) -> TypeBehavior {
        match self {
            FieldType::Text
            | FieldType::Email
            | FieldType::Password
            | FieldType::Textarea => TypeBehavior::new(ValueKind::Text, DefaultValue::EmptyString),
            FieldType::Select | FieldType::Radio | FieldType::Combobox => {
                TypeBehavior::choice(ValueKind::Text, DefaultValue::EmptyString)
            }
            FieldType::Number => TypeBehavior::new(ValueKind::Number, DefaultValue::EmptyString),
            FieldType::Checkbox | FieldType::Switch => {
                TypeBehavior::new(ValueKind::Boolean, DefaultValue::False)
            }
            FieldType::Date => TypeBehavior::new(ValueKind::Date, DefaultValue::Null),
            FieldType::File => TypeBehavior::new(ValueKind::File, DefaultValue::Null),
            FieldType::Otp => TypeBehavior::new(ValueKind::Otp, DefaultValue::EmptyString),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        FieldType::palette()
            .iter()
            .copied()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| BuilderError::UnknownFieldType(s.to_string()))
    }
}

// ============================================================================
// Type Behaviour Table
// ============================================================================

/// Per-type behaviour shared by all projections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBehavior {
    /// The kind of value a field of this type captures
    pub value_kind: ValueKind,
    /// Initial form-state value
    pub default_value: DefaultValue,
    /// Whether the type takes an options list
    pub choice: bool,
}

impl TypeBehavior {
    const fn new(value_kind: ValueKind, default_value: DefaultValue) -> Self {
        Self {
            value_kind,
            default_value,
            choice: false,
        }
    }

    const fn choice(value_kind: ValueKind, default_value: DefaultValue) -> Self {
        Self {
            value_kind,
            default_value,
            choice: true,
        }
    }
}

/// The base check applied to a captured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free or chosen text
    Text,
    /// Numeric input
    Number,
    /// Checkbox / switch state
    Boolean,
    /// Date string (nullable)
    Date,
    /// File handle (nullable)
    File,
    /// Fixed-length one-time code
    Otp,
}

impl ValueKind {
    /// Message reported when the value has the wrong shape
    pub fn type_error(&self) -> &'static str {
        match self {
            ValueKind::Text | ValueKind::Otp => "Expected a string",
            ValueKind::Number => "Expected a number",
            ValueKind::Boolean => "Expected a boolean",
            ValueKind::Date => "Invalid date",
            ValueKind::File => "Expected a file",
        }
    }

    /// The zod expression that opens a schema entry of this kind
    pub fn zod_base(&self) -> String {
        match self {
            ValueKind::Text | ValueKind::Otp => {
                format!("z.string({{ invalid_type_error: \"{}\" }})", self.type_error())
            }
            ValueKind::Number => {
                format!("z.number({{ invalid_type_error: \"{}\" }})", self.type_error())
            }
            ValueKind::Boolean => {
                format!("z.boolean({{ invalid_type_error: \"{}\" }})", self.type_error())
            }
            ValueKind::Date => format!(
                "z.string({{ invalid_type_error: \"{}\" }}).nullable()",
                self.type_error()
            ),
            ValueKind::File => format!(
                "z.instanceof(File, {{ message: \"{}\" }}).nullable()",
                self.type_error()
            ),
        }
    }

    /// Suffix appended to optional entries so an empty value passes
    pub fn zod_optional_suffix(&self) -> Option<&'static str> {
        match self {
            ValueKind::Text | ValueKind::Number => Some(".optional().or(z.literal(\"\"))"),
            _ => None,
        }
    }
}

// ============================================================================
// Default Values
// ============================================================================

/// Initial form-state value of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultValue {
    /// `""`
    EmptyString,
    /// `false`
    False,
    /// `null`
    Null,
}

impl DefaultValue {
    /// Convert to a JSON value for the preview form state
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            DefaultValue::EmptyString => serde_json::Value::String(String::new()),
            DefaultValue::False => serde_json::Value::Bool(false),
            DefaultValue::Null => serde_json::Value::Null,
        }
    }

    /// Convert to a JavaScript literal for generated code
    pub fn to_js(&self) -> &'static str {
        match self {
            DefaultValue::EmptyString => "\"\"",
            DefaultValue::False => "false",
            DefaultValue::Null => "null",
        }
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_js())
    }
}

// ============================================================================
// Validation Constraints
// ============================================================================

/// Lowest integer JavaScript represents exactly (`Number.MIN_SAFE_INTEGER`)
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Message used for every presence-style failure
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A single validation constraint applied after the base check
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Text must be non-empty
    Required,
    /// Value must not be null
    NotNull,
    /// Boolean must be `true`
    MustBeTrue,
    /// Minimum string length
    MinLength(usize),
    /// Maximum string length
    MaxLength(usize),
    /// Exact string length
    ExactLength(usize),
    /// Only ASCII digits
    Digits,
    /// Minimum numeric value
    Min(f64),
    /// Maximum numeric value
    Max(f64),
    /// Lower bound at `MIN_SAFE_INTEGER`, standing in for "required" on numbers
    PermissiveMin,
    /// Regex pattern (unanchored search)
    Pattern(String),
    /// Non-empty value must parse as a date
    ValidDate,
}

impl Constraint {
    /// Get a user-friendly error message
    pub fn error_message(&self) -> String {
        match self {
            Constraint::Required
            | Constraint::NotNull
            | Constraint::MustBeTrue
            | Constraint::PermissiveMin => REQUIRED_MESSAGE.to_string(),
            Constraint::MinLength(n) => format!("Minimum length is {} characters", n),
            Constraint::MaxLength(n) => format!("Maximum length is {} characters", n),
            Constraint::ExactLength(n) => format!("Must be exactly {} characters", n),
            Constraint::Digits => "Only digits are allowed".to_string(),
            Constraint::Min(n) => format!("Minimum value is {}", n),
            Constraint::Max(n) => format!("Maximum value is {}", n),
            Constraint::Pattern(_) => "Invalid format".to_string(),
            Constraint::ValidDate => "Invalid date".to_string(),
        }
    }

    /// Convert to a chained zod method call
    pub fn to_zod(&self) -> String {
        let message = js_string(&self.error_message());
        match self {
            Constraint::Required => format!(".min(1, {{ message: {} }})", message),
            Constraint::NotNull => format!(
                ".refine((value) => value !== null, {{ message: {} }})",
                message
            ),
            Constraint::MustBeTrue => format!(
                ".refine((value) => value === true, {{ message: {} }})",
                message
            ),
            Constraint::MinLength(n) => format!(".min({}, {{ message: {} }})", n, message),
            Constraint::MaxLength(n) => format!(".max({}, {{ message: {} }})", n, message),
            Constraint::ExactLength(n) => format!(".length({}, {{ message: {} }})", n, message),
            Constraint::Digits => format!(".regex(/^\\d*$/, {{ message: {} }})", message),
            Constraint::Min(n) => format!(".min({}, {{ message: {} }})", n, message),
            Constraint::Max(n) => format!(".max({}, {{ message: {} }})", n, message),
            Constraint::PermissiveMin => {
                format!(".min(Number.MIN_SAFE_INTEGER, {{ message: {} }})", message)
            }
            Constraint::Pattern(pattern) => format!(
                ".regex(new RegExp({}), {{ message: {} }})",
                js_string(pattern),
                message
            ),
            Constraint::ValidDate => format!(
                ".refine((value) => !value || !Number.isNaN(Date.parse(value)), {{ message: {} }})",
                message
            ),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Required => write!(f, "required"),
            Constraint::NotNull => write!(f, "not_null"),
            Constraint::MustBeTrue => write!(f, "must_be_true"),
            Constraint::MinLength(n) => write!(f, "min_length({})", n),
            Constraint::MaxLength(n) => write!(f, "max_length({})", n),
            Constraint::ExactLength(n) => write!(f, "length({})", n),
            Constraint::Digits => write!(f, "digits"),
            Constraint::Min(n) => write!(f, "min({})", n),
            Constraint::Max(n) => write!(f, "max({})", n),
            Constraint::PermissiveMin => write!(f, "min(MIN_SAFE_INTEGER)"),
            Constraint::Pattern(p) => write!(f, "pattern({})", p),
            Constraint::ValidDate => write!(f, "date"),
        }
    }
}

/// Quote a string as a JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript string syntax.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

// ============================================================================
// Tests
// ============================================================================
