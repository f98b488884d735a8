//! Validation schema for field lists
//!
//! `FieldSchema::for_field` is the one place where a field's type,
//! `required` flag and validation record turn into checks. The preview
//! validates submitted values with it and the code generator renders the
//! same entries as zod, so the two can never disagree.

use formsmith_core::{
    BuilderError, BuilderResult, Constraint, MIN_SAFE_INTEGER, REQUIRED_MESSAGE, ValueKind,
};
use serde_json::{Map, Value};

use crate::field::Field;

// ============================================================================
// FieldSchema
// ============================================================================

/// Checks derived for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Form key the checks apply to
    pub name: String,

    /// Base check
    pub kind: ValueKind,

    /// Whether the field was marked required
    pub required: bool,

    /// Further checks, applied in order after the base check
    pub constraints: Vec<Constraint>,
}

impl FieldSchema {
    /// Derive the schema entry for a field.
    ///
    /// Returns `None` for fields without a usable id or name.
    pub fn for_field(field: &Field) -> Option<Self> {
        if !field.is_renderable() {
            return None;
        }

        let kind = field.behavior().value_kind;
        let validation = field.validation.as_ref();
        let mut constraints = Vec::new();

        match kind {
            ValueKind::Text => {
                if field.required {
                    constraints.push(Constraint::Required);
                }
                if let Some(v) = validation {
                    if let Some(n) = v.min_length {
                        constraints.push(Constraint::MinLength(n));
                    }
                    if let Some(n) = v.max_length {
                        constraints.push(Constraint::MaxLength(n));
                    }
                    if let Some(pattern) = v.pattern.as_ref().filter(|p| !p.is_empty()) {
                        constraints.push(Constraint::Pattern(pattern.clone()));
                    }
                }
            }
            ValueKind::Number => {
                match validation.and_then(|v| v.min) {
                    Some(min) => constraints.push(Constraint::Min(min)),
                    None if field.required => constraints.push(Constraint::PermissiveMin),
                    None => {}
                }
                if let Some(max) = validation.and_then(|v| v.max) {
                    constraints.push(Constraint::Max(max));
                }
            }
            ValueKind::Boolean => {
                if field.required {
                    constraints.push(Constraint::MustBeTrue);
                }
            }
            ValueKind::Date => constraints.push(Constraint::ValidDate),
            ValueKind::File => {
                if field.required {
                    constraints.push(Constraint::NotNull);
                }
            }
            ValueKind::Otp => {
                constraints.push(Constraint::ExactLength(field.otp_length()));
                constraints.push(Constraint::Digits);
            }
        }

        Some(Self {
            name: field.name.clone(),
            kind,
            required: field.required,
            constraints,
        })
    }

    /// Whether an empty value passes without further checks
    pub fn is_optional(&self) -> bool {
        !self.required && self.kind.zod_optional_suffix().is_some()
    }

    /// Validate one captured value; the error is the first failing message
    pub fn check(&self, value: &Value) -> Result<(), String> {
        let captured = match self.capture(value)? {
            Some(captured) => captured,
            None => return Ok(()),
        };

        match self.constraints.iter().find(|c| !holds(c, &captured)) {
            Some(failed) => Err(failed.error_message()),
            None => Ok(()),
        }
    }

    /// Apply the base check. `Ok(None)` means "empty and allowed".
    fn capture<'a>(&self, value: &'a Value) -> Result<Option<Captured<'a>>, String> {
        let type_error = || self.kind.type_error().to_string();

        match self.kind {
            ValueKind::Text => match value {
                Value::String(s) if s.is_empty() && !self.required => Ok(None),
                Value::String(s) => Ok(Some(Captured::Text(s))),
                _ => Err(type_error()),
            },
            ValueKind::Number => match value {
                Value::Number(n) => n.as_f64().map(|x| Some(Captured::Number(x))).ok_or_else(type_error),
                Value::String(s) if s.is_empty() && !self.required => Ok(None),
                _ => Err(type_error()),
            },
            ValueKind::Boolean => match value {
                Value::Bool(b) => Ok(Some(Captured::Bool(*b))),
                _ => Err(type_error()),
            },
            ValueKind::Date => match value {
                Value::Null => Ok(None),
                Value::String(s) if s.is_empty() => Ok(None),
                Value::String(s) => Ok(Some(Captured::Text(s))),
                _ => Err(type_error()),
            },
            ValueKind::File => match value {
                Value::Null => Ok(Some(Captured::Null)),
                Value::String(_) | Value::Object(_) => Ok(Some(Captured::Present)),
                _ => Err(type_error()),
            },
            ValueKind::Otp => match value {
                Value::String(s) => Ok(Some(Captured::Text(s))),
                _ => Err(type_error()),
            },
        }
    }
}

/// A value that passed its base check
#[derive(Debug)]
enum Captured<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Null,
    Present,
}

fn holds(constraint: &Constraint, captured: &Captured<'_>) -> bool {
    match (constraint, captured) {
        (Constraint::Required, Captured::Text(s)) => !s.is_empty(),
        (Constraint::NotNull, Captured::Null) => false,
        (Constraint::MustBeTrue, Captured::Bool(b)) => *b,
        (Constraint::MinLength(n), Captured::Text(s)) => s.chars().count() >= *n,
        (Constraint::MaxLength(n), Captured::Text(s)) => s.chars().count() <= *n,
        (Constraint::ExactLength(n), Captured::Text(s)) => s.chars().count() == *n,
        (Constraint::Digits, Captured::Text(s)) => s.chars().all(|c| c.is_ascii_digit()),
        (Constraint::Min(min), Captured::Number(x)) => x >= min,
        (Constraint::Max(max), Captured::Number(x)) => x <= max,
        (Constraint::PermissiveMin, Captured::Number(x)) => *x >= MIN_SAFE_INTEGER,
        (Constraint::Pattern(pattern), Captured::Text(s)) => regex::Regex::new(pattern)
            .map(|re| re.is_match(s))
            .unwrap_or(false),
        (Constraint::ValidDate, Captured::Text(s)) => s.is_empty() || is_valid_date(s),
        _ => true,
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, and local `YYYY-MM-DDTHH:MM[:SS]`
pub fn is_valid_date(s: &str) -> bool {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let s = s.trim();
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").is_ok()
}

// ============================================================================
// FormSchema
// ============================================================================

/// Schema entries for a whole field list, in list order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    entries: Vec<FieldSchema>,
}

impl FormSchema {
    /// Derive entries for every renderable field
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        Self {
            entries: fields.into_iter().filter_map(FieldSchema::for_field).collect(),
        }
    }

    /// All entries
    pub fn entries(&self) -> &[FieldSchema] {
        &self.entries
    }

    /// Entry for a form key
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Validate captured values. A missing key passes only for optional
    /// entries.
    pub fn validate(&self, values: &Map<String, Value>) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for entry in &self.entries {
            let outcome = match values.get(&entry.name) {
                Some(value) => entry.check(value),
                None if entry.is_optional() => Ok(()),
                None => Err(REQUIRED_MESSAGE.to_string()),
            };
            if let Err(message) = outcome {
                result.add_error(FieldError::new(&entry.name, message));
            }
        }
        result
    }
}

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of validating a set of captured values
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Per-field errors (empty if valid)
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: FieldError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message for a given field, if it failed
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.message.as_str())
    }

    /// Convert to BuilderResult (fails if any errors)
    pub fn to_result(self) -> BuilderResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            Err(BuilderError::validation(msg))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// A failed check on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form key
    pub name: String,

    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.name, self.message)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValidation;
    use formsmith_core::{FieldType, REQUIRED_MESSAGE};
    use serde_json::json;

    fn schema(field: &Field) -> FieldSchema {
        FieldSchema::for_field(field).expect("renderable field")
    }

    #[test]
    fn test_required_number_with_range() {
        let field = Field::new(FieldType::Number, "age", "Age")
            .required()
            .with_validation(FieldValidation::new().with_min(5.0).with_max(10.0));
        let s = schema(&field);

        assert_eq!(s.constraints, vec![Constraint::Min(5.0), Constraint::Max(10.0)]);
        assert_eq!(s.check(&json!("")), Err("Expected a number".to_string()));
        assert_eq!(s.check(&json!(3)), Err("Minimum value is 5".to_string()));
        assert_eq!(s.check(&json!(11)), Err("Maximum value is 10".to_string()));
        assert!(s.check(&json!(7)).is_ok());
        assert_eq!(s.check(&json!("7")), Err("Expected a number".to_string()));
    }

    #[test]
    fn test_required_number_without_min_uses_permissive_bound() {
        let field = Field::new(FieldType::Number, "qty", "Qty").required();
        let s = schema(&field);
        assert_eq!(s.constraints, vec![Constraint::PermissiveMin]);
        assert!(s.check(&json!(-1_000_000)).is_ok());
        assert!(s.check(&Value::Null).is_err());
    }

    #[test]
    fn test_optional_number_accepts_empty() {
        let field = Field::new(FieldType::Number, "qty", "Qty");
        let s = schema(&field);
        assert!(s.check(&json!("")).is_ok());
        assert_eq!(s.check(&json!("abc")), Err("Expected a number".to_string()));
    }

    #[test]
    fn test_otp_exact_length() {
        let field = Field::new(FieldType::Otp, "code", "Code")
            .with_validation(FieldValidation::new().with_max_length(4));
        let s = schema(&field);

        assert!(s.check(&json!("1234")).is_ok());
        assert_eq!(s.check(&json!("123")), Err("Must be exactly 4 characters".to_string()));
        assert!(s.check(&json!("12345")).is_err());
        assert!(s.check(&json!("")).is_err());
        assert_eq!(s.check(&json!("12a4")), Err("Only digits are allowed".to_string()));
        assert_eq!(s.check(&Value::Null), Err("Expected a string".to_string()));
    }

    #[test]
    fn test_null_text_is_a_type_error() {
        let optional = schema(&Field::new(FieldType::Text, "nick", "Nick"));
        assert_eq!(optional.check(&Value::Null), Err("Expected a string".to_string()));
        assert!(optional.check(&json!("")).is_ok());
    }

    #[test]
    fn test_missing_keys_pass_only_when_optional() {
        let fields = vec![
            Field::new(FieldType::Text, "nick", "Nick"),
            Field::new(FieldType::Number, "qty", "Qty"),
            Field::new(FieldType::Switch, "news", "News"),
        ];
        let result = FormSchema::from_fields(&fields).validate(&Map::new());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error_for("news"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_otp_defaults_to_six() {
        let s = schema(&Field::new(FieldType::Otp, "code", "Code"));
        assert_eq!(
            s.constraints,
            vec![Constraint::ExactLength(6), Constraint::Digits]
        );
    }

    #[test]
    fn test_required_checkbox_rejects_false() {
        let field = Field::new(FieldType::Checkbox, "agree", "Agree").required();
        let s = schema(&field);
        assert_eq!(s.check(&json!(false)), Err(REQUIRED_MESSAGE.to_string()));
        assert!(s.check(&json!(true)).is_ok());
        assert_eq!(s.check(&json!("yes")), Err("Expected a boolean".to_string()));
    }

    #[test]
    fn test_optional_switch_accepts_false() {
        let s = schema(&Field::new(FieldType::Switch, "news", "News"));
        assert!(s.check(&json!(false)).is_ok());
    }

    #[test]
    fn test_text_rules() {
        let field = Field::new(FieldType::Text, "handle", "Handle")
            .required()
            .with_validation(
                FieldValidation::new()
                    .with_min_length(3)
                    .with_max_length(8)
                    .with_pattern("^[a-z_]+$"),
            );
        let s = schema(&field);

        assert_eq!(s.check(&json!("")), Err(REQUIRED_MESSAGE.to_string()));
        assert_eq!(
            s.check(&json!("ab")),
            Err("Minimum length is 3 characters".to_string())
        );
        assert_eq!(
            s.check(&json!("abcdefghij")),
            Err("Maximum length is 8 characters".to_string())
        );
        assert_eq!(s.check(&json!("Abc")), Err("Invalid format".to_string()));
        assert!(s.check(&json!("jane_d")).is_ok());
        assert_eq!(s.check(&json!(42)), Err("Expected a string".to_string()));
    }

    #[test]
    fn test_optional_text_with_rules_accepts_empty() {
        let field = Field::new(FieldType::Email, "email", "Email")
            .with_validation(FieldValidation::new().with_min_length(5));
        let s = schema(&field);
        assert!(s.check(&json!("")).is_ok());
        assert!(s.check(&json!("a@b")).is_err());
    }

    #[test]
    fn test_invalid_pattern_fails_instead_of_panicking() {
        let field = Field::new(FieldType::Text, "x", "X")
            .with_validation(FieldValidation::new().with_pattern("([a-"));
        assert_eq!(schema(&field).check(&json!("abc")), Err("Invalid format".to_string()));
    }

    #[test]
    fn test_choice_types_share_text_rules() {
        let field = Field::new(FieldType::Select, "color", "Color")
            .required()
            .with_options(["Red", "Green"]);
        let s = schema(&field);
        assert_eq!(s.kind, ValueKind::Text);
        assert!(s.check(&json!("")).is_err());
        assert!(s.check(&json!("Red")).is_ok());
    }

    #[test]
    fn test_date_rules() {
        let field = Field::new(FieldType::Date, "dob", "Birthday").required();
        let s = schema(&field);
        assert!(s.check(&Value::Null).is_ok());
        assert!(s.check(&json!("2024-02-29")).is_ok());
        assert!(s.check(&json!("2024-06-01T12:30:00.000Z")).is_ok());
        assert_eq!(s.check(&json!("2023-02-30")), Err("Invalid date".to_string()));
        assert_eq!(s.check(&json!("tomorrow")), Err("Invalid date".to_string()));
    }

    #[test]
    fn test_file_rules() {
        let required = schema(&Field::new(FieldType::File, "cv", "CV").required());
        assert_eq!(required.check(&Value::Null), Err(REQUIRED_MESSAGE.to_string()));
        assert!(required.check(&json!("cv.pdf")).is_ok());
        assert!(required.check(&json!({"name": "cv.pdf", "size": 1024})).is_ok());
        assert_eq!(required.check(&json!(12)), Err("Expected a file".to_string()));

        let optional = schema(&Field::new(FieldType::File, "cv", "CV"));
        assert!(optional.check(&Value::Null).is_ok());
    }

    #[test]
    fn test_unrenderable_fields_are_skipped() {
        let mut nameless = Field::new(FieldType::Text, "", "No name");
        assert!(FieldSchema::for_field(&nameless).is_none());
        nameless.name = "ok".to_string();
        nameless.id = uuid::Uuid::nil();
        assert!(FieldSchema::for_field(&nameless).is_none());

        let fields = vec![nameless, Field::new(FieldType::Text, "kept", "Kept")];
        let form = FormSchema::from_fields(&fields);
        assert_eq!(form.entries().len(), 1);
        assert!(form.get("kept").is_some());
    }

    #[test]
    fn test_form_validate_collects_errors_in_order() {
        let fields = vec![
            Field::new(FieldType::Text, "name", "Name").required(),
            Field::new(FieldType::Checkbox, "agree", "Agree").required(),
            Field::new(FieldType::Email, "email", "Email"),
        ];
        let form = FormSchema::from_fields(&fields);

        let mut values = Map::new();
        values.insert("agree".to_string(), json!(false));
        values.insert("email".to_string(), json!(""));

        let result = form.validate(&values);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].name, "name");
        assert_eq!(result.error_for("agree"), Some(REQUIRED_MESSAGE));
        assert!(result.to_result().is_err());
    }
}
