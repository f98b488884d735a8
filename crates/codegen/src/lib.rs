//! # Formsmith Codegen
//!
//! Code generation for Formsmith field lists.
//!
//! Turns an ordered list of fields into a single React component built on
//! react-hook-form, zod and shadcn/ui primitives.
//!
//! ## Features
//!
//! - **Schema Generation**: a zod object derived from the same `FieldSchema`
//!   the preview validates with
//! - **Default Values**: from the per-type behaviour table
//! - **Field Markup**: one template per field type
//! - **Configuration**: component/schema names, submit label, form class,
//!   default export and indent width, loadable from TOML
//!

// ============================================================================
// Modules
// ============================================================================

pub mod context;
pub mod generator;
pub mod react;
pub mod snippet;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::GenerationContext;
pub use generator::{Generator, generate};
pub use snippet::{CodeDocument, DefaultEntry, FieldSnippet, ImportLine, Markup, SchemaEntry};

use formsmith_core::{BuilderError, BuilderResult, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the code generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the exported component (normalised to PascalCase)
    pub component_name: String,

    /// Name of the zod schema const (normalised to lowerCamelCase)
    pub schema_name: String,

    /// Text of the submit button
    pub submit_label: String,

    /// `className` of the `<form>` element
    pub form_class: String,

    /// Whether to append `export default <Component>`
    pub default_export: bool,

    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            component_name: "GeneratedForm".to_string(),
            schema_name: "formSchema".to_string(),
            submit_label: "Submit".to_string(),
            form_class: "space-y-8".to_string(),
            default_export: true,
            indent_width: 2,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component name
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Set the schema const name
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }

    /// Set the submit button text
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Set the form class names
    pub fn with_form_class(mut self, class: impl Into<String>) -> Self {
        self.form_class = class.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Skip the `export default` line
    pub fn without_default_export(mut self) -> Self {
        self.default_export = false;
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> BuilderResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| BuilderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> BuilderResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| BuilderError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Self::from_toml_str(&source)
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> BuilderResult<()> {
        if !(1..=8).contains(&self.indent_width) {
            return Err(BuilderError::InvalidConfig(format!(
                "indent_width must be between 1 and 8, got {}",
                self.indent_width
            )));
        }
        if self.form_class.contains('"') {
            return Err(BuilderError::InvalidConfig(
                "form_class cannot contain a double quote".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// GeneratedForm
// ============================================================================

/// Output of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedForm {
    /// Final component name
    pub component_name: String,

    /// Number of fields emitted
    pub field_count: usize,

    /// The TSX source
    pub content: String,

    /// Warnings generated during code generation
    pub warnings: Vec<String>,
}

impl GeneratedForm {
    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write the source to `path`, creating parent directories
    pub fn write_to(&self, path: impl AsRef<Path>) -> BuilderResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BuilderError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(path, &self.content).map_err(|e| BuilderError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "wrote generated component");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
