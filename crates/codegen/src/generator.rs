//! # Code Generator Orchestrator
//!
//! The `Generator` is the top-level entry point for code generation. It takes
//! a field list and a [`GeneratorConfig`], builds a [`GenerationContext`],
//! assembles a [`CodeDocument`] and renders it into a [`GeneratedForm`].
//!
//! ## Pipeline
//!
//! ```text
//! &[Field] + GeneratorConfig
//!         │
//!         ▼
//!   GenerationContext::from_fields()     skip / warn
//!         │
//!         ├──► react::imports()           → Vec<ImportLine>
//!         ├──► FieldSchema::for_field()   → Vec<SchemaEntry>
//!         ├──► TypeBehavior defaults      → Vec<DefaultEntry>
//!         ├──► react::field_snippet()     → Vec<FieldSnippet>
//!         │
//!         ▼
//!   CodeDocument::render() → GeneratedForm { content, warnings }
//! ```
//!
//! Generation is total: it never fails, it only warns.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formsmith_codegen::{Generator, GeneratorConfig};
//!
//! let form = Generator::new(GeneratorConfig::default()).generate(list.fields());
//! println!("{}", form.content);
//! ```

use formsmith_ir::{Field, FieldSchema};

use crate::context::GenerationContext;
use crate::react;
use crate::snippet::{CodeDocument, DefaultEntry, SchemaEntry};
use crate::{GeneratedForm, GeneratorConfig};

// ============================================================================
// Generator
// ============================================================================

/// Stateless aside from its configuration
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Build the document IR without rendering it
    pub fn document(&self, fields: &[Field]) -> (CodeDocument, Vec<String>) {
        let ctx = GenerationContext::from_fields(fields, self.config.clone());

        let schema_entries = ctx
            .fields()
            .iter()
            .filter_map(FieldSchema::for_field)
            .map(|schema| SchemaEntry {
                expr: react::schema_expression(&schema),
                name: schema.name,
            })
            .collect();

        let defaults = ctx
            .fields()
            .iter()
            .map(|f| DefaultEntry {
                name: f.name.clone(),
                literal: f.behavior().default_value.to_js().to_string(),
            })
            .collect();

        let snippets = ctx.fields().iter().map(react::field_snippet).collect();

        let document = CodeDocument {
            component_name: ctx.component_name(),
            schema_name: ctx.schema_name(),
            form_class: self.config.form_class.clone(),
            submit_label: react::text(&self.config.submit_label),
            default_export: self.config.default_export,
            imports: react::imports(),
            schema_entries,
            defaults,
            snippets,
        };

        (document, ctx.into_warnings())
    }

    /// Generate the TSX component for a field list.
    pub fn generate(&self, fields: &[Field]) -> GeneratedForm {
        let (document, warnings) = self.document(fields);
        let content = document.render(self.config.indent_width);

        tracing::info!(
            component = %document.component_name,
            fields = document.snippets.len(),
            warnings = warnings.len(),
            "generated form component"
        );

        GeneratedForm {
            component_name: document.component_name,
            field_count: document.snippets.len(),
            content,
            warnings,
        }
    }
}

/// Generate with the default configuration
pub fn generate(fields: &[Field]) -> GeneratedForm {
    Generator::with_defaults().generate(fields)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::{FieldType, REQUIRED_MESSAGE};
    use formsmith_ir::{FieldValidation, create_field};

    #[test]
    fn test_select_schema_and_snippet() {
        let fields = vec![Field::new(FieldType::Select, "color", "Color").with_options(["Red", "Green"])];
        let out = generate(&fields).content;

        assert!(out.contains("  color: z.string({ invalid_type_error: \"Expected a string\" })"));
        let red = out.find("<SelectItem value=\"Red\">Red</SelectItem>").unwrap();
        let green = out.find("<SelectItem value=\"Green\">Green</SelectItem>").unwrap();
        assert!(red < green);
    }

    #[test]
    fn test_required_checkbox_matches_preview_message() {
        let fields = vec![Field::new(FieldType::Checkbox, "agree", "I agree").required()];
        let out = generate(&fields).content;

        assert!(out.contains(&format!(
            "agree: z.boolean({{ invalid_type_error: \"Expected a boolean\" }}).refine((value) => value === true, {{ message: \"{}\" }}),",
            REQUIRED_MESSAGE
        )));
        assert!(out.contains("      agree: false,"));
    }

    #[test]
    fn test_number_range_in_schema() {
        let fields = vec![
            Field::new(FieldType::Number, "age", "Age")
                .required()
                .with_validation(FieldValidation::new().with_min(5.0).with_max(10.0)),
        ];
        let out = generate(&fields).content;
        assert!(out.contains(
            "age: z.number({ invalid_type_error: \"Expected a number\" })\
.min(5, { message: \"Minimum value is 5\" })\
.max(10, { message: \"Maximum value is 10\" }),"
        ));
        assert!(out.contains("      age: \"\","));
    }

    #[test]
    fn test_fixed_section_order() {
        let fields = vec![create_field(FieldType::Date), create_field(FieldType::Otp)];
        let out = generate(&fields).content;

        let positions: Vec<usize> = [
            "import React from \"react\"",
            "const formSchema = z.object({",
            "defaultValues: {",
            "<FormField",
            "<Button type=\"submit\">Submit</Button>",
            "export default GeneratedForm",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_every_type_generates() {
        let fields: Vec<Field> = FieldType::palette().iter().map(|t| create_field(*t)).collect();
        let form = generate(&fields);

        assert_eq!(form.field_count, 13);
        assert!(form.warnings.is_empty());
        assert_eq!(form.content.matches("<FormField").count(), 13);
        for field in &fields {
            assert!(form.content.contains(&format!("  {}: ", field.name)));
        }
    }

    #[test]
    fn test_empty_list_still_renders() {
        let form = generate(&[]);
        assert_eq!(form.field_count, 0);
        assert!(form.content.contains("const formSchema = z.object({\n})"));
        assert!(form.content.contains("<Button type=\"submit\">Submit</Button>"));
    }

    #[test]
    fn test_config_is_applied() {
        let config = GeneratorConfig::new()
            .with_component_name("contact-form")
            .with_submit_label("Send")
            .with_indent_width(4)
            .without_default_export();
        let form = Generator::new(config).generate(&[create_field(FieldType::Text)]);

        assert_eq!(form.component_name, "ContactForm");
        assert!(form.content.contains("export function ContactForm() {"));
        assert!(form.content.contains("<Button type=\"submit\">Send</Button>"));
        assert!(form.content.contains("\n    const form = useForm"));
        assert!(!form.content.contains("export default"));
    }

    #[test]
    fn test_skipped_fields_are_reported() {
        let fields = vec![create_field(FieldType::Text), Field::new(FieldType::Email, "", "Email")];
        let form = generate(&fields);
        assert_eq!(form.field_count, 1);
        assert_eq!(form.warnings.len(), 1);
        assert!(form.has_warnings());
    }
}
