//! Core traits for Formsmith
//!
//! This module defines the traits that builder components implement to
//! provide consistent behavior for validation and code generation.

use crate::error::BuilderResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use formsmith_core::{Validatable, BuilderResult, BuilderError};
///
/// struct Option {
///     label: String,
/// }
///
/// impl Validatable for Option {
///     fn validate(&self) -> BuilderResult<()> {
///         if self.label.is_empty() {
///             return Err(BuilderError::validation("Label cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `BuilderError` describing the problem.
    fn validate(&self) -> BuilderResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// CodeGenerable Trait
// ============================================================================

/// Context passed to code generation methods
///
/// Carries the indentation state used while stamping out source text.
#[derive(Debug, Clone)]
pub struct CodeGenContext {
    /// Indentation level
    pub indent_level: usize,
    /// Use spaces (true) or tabs (false) for indentation
    pub use_spaces: bool,
    /// Number of spaces per indent level (if use_spaces is true)
    pub spaces_per_indent: usize,
}

impl CodeGenContext {
    /// Create a new context with default settings (two-space indent)
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            use_spaces: true,
            spaces_per_indent: 2,
        }
    }

    /// Create a context with the given indent width
    pub fn with_indent_width(spaces: usize) -> Self {
        Self {
            spaces_per_indent: spaces,
            ..Self::new()
        }
    }

    /// Get the current indentation string
    pub fn indent(&self) -> String {
        if self.use_spaces {
            " ".repeat(self.indent_level * self.spaces_per_indent)
        } else {
            "\t".repeat(self.indent_level)
        }
    }

    /// Create a new context with increased indentation
    pub fn indented(&self) -> Self {
        self.indented_by(1)
    }

    /// Create a new context indented by `levels` more
    pub fn indented_by(&self, levels: usize) -> Self {
        Self {
            indent_level: self.indent_level + levels,
            ..self.clone()
        }
    }
}

impl Default for CodeGenContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for types that can generate code
///
/// Types implementing this trait can produce source text representations
/// of themselves.
pub trait CodeGenerable {
    /// Generate code for this type
    ///
    /// # Arguments
    ///
    /// * `ctx` - The code generation context with indentation state
    fn generate(&self, ctx: &CodeGenContext) -> String;
}

// ============================================================================
// Tests
// ============================================================================
