//! # Formsmith Core
//!
//! Core types, traits, and error handling for Formsmith.
//!
//! This crate provides the foundational building blocks used by every other
//! Formsmith crate, including:
//!
//! - **Types**: the closed `FieldType` set, the per-type behaviour table and
//!   validation `Constraint`s
//! - **Traits**: common behaviors like `Validatable` and `CodeGenerable`
//! - **Errors**: unified error handling with `BuilderError` and `BuilderResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{BuilderError, BuilderResult, ResultExt};
pub use traits::{CodeGenContext, CodeGenerable, Validatable};
pub use types::{
    Constraint, DefaultValue, FieldId, FieldType, MIN_SAFE_INTEGER, REQUIRED_MESSAGE,
    TypeBehavior, ValueKind, js_string,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
