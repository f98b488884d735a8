//! # Generation Context
//!
//! Built once per `generate` call from a field list and the generator
//! config. It decides which fields are emitted, normalises the identifiers
//! used in the output, and collects warnings for anything left out.

use formsmith_core::{FieldType, Validatable};
use formsmith_ir::{Field, FieldList};
use heck::{ToLowerCamelCase, ToPascalCase};

use crate::GeneratorConfig;

/// Component name used when the configured one normalises to nothing usable
pub const FALLBACK_COMPONENT_NAME: &str = "GeneratedForm";

/// Schema const name used when the configured one normalises to nothing usable
pub const FALLBACK_SCHEMA_NAME: &str = "formSchema";

/// Context carrying everything the templates need
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Generator configuration
    pub config: GeneratorConfig,

    /// Fields that will be emitted, in list order
    fields: Vec<Field>,

    /// Problems found while building the context
    warnings: Vec<String>,
}

impl GenerationContext {
    /// Build a context from a field list
    pub fn from_fields(fields: &[Field], config: GeneratorConfig) -> Self {
        let mut warnings = Vec::new();
        let mut kept = Vec::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            if field.is_renderable() {
                kept.push(field.clone());
                continue;
            }

            let reason = if field.id.is_nil() {
                "it has no id"
            } else {
                "its name is not a valid identifier"
            };
            tracing::warn!(index, name = %field.name, "skipping field: {}", reason);
            warnings.push(format!(
                "Skipped {} field #{} ('{}') because {}.",
                field.field_type,
                index + 1,
                field.name,
                reason
            ));
        }

        for name in FieldList::from_fields(kept.clone()).duplicate_names() {
            warnings.push(format!(
                "Field name '{}' is used more than once; the form will share one value between those fields.",
                name
            ));
        }

        for field in kept.iter().filter(|f| f.is_choice() || f.field_type == FieldType::Otp) {
            if let Err(e) = field.validate() {
                warnings.push(e.to_string());
            }
        }

        Self {
            config,
            fields: kept,
            warnings,
        }
    }

    /// Build with default generator config (convenience for tests)
    pub fn from_fields_default(fields: &[Field]) -> Self {
        Self::from_fields(fields, GeneratorConfig::default())
    }

    /// Fields to emit
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Warnings collected so far
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Take ownership of the warnings
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// The component name in PascalCase
    pub fn component_name(&self) -> String {
        normalize(&self.config.component_name, |s| s.to_pascal_case())
            .unwrap_or_else(|| FALLBACK_COMPONENT_NAME.to_string())
    }

    /// The schema const name in lowerCamelCase
    pub fn schema_name(&self) -> String {
        normalize(&self.config.schema_name, |s| s.to_lower_camel_case())
            .unwrap_or_else(|| FALLBACK_SCHEMA_NAME.to_string())
    }
}

fn normalize(raw: &str, case: impl Fn(&str) -> String) -> Option<String> {
    let converted = case(raw);
    let usable = converted
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    usable.then_some(converted)
}

// ============================================================================
// Tests
// ============================================================================
