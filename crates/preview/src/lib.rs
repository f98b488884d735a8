//! # Formsmith Preview
//!
//! The interactive projection of a field list: a widget per field, live form
//! state seeded from type defaults, and submit-time validation that shares
//! its rules with the generated code.
//!
//! ```rust,ignore
//! use formsmith_preview::{Notification, PreviewForm};
//!
//! let mut form = PreviewForm::render(list.fields());
//! form.set_value("email", serde_json::json!("ada@example.com"))?;
//! let mut toasts: Vec<Notification> = Vec::new();
//! let outcome = form.submit(&mut toasts);
//! ```

pub mod form;
pub mod state;
pub mod widget;

pub use form::{
    Notification, Notifier, PreviewForm, SUBMIT_LABEL, SUBMITTED_TITLE, SubmitOutcome,
};
pub use state::FormState;
pub use widget::{InputType, PreviewNode, RadioItem, Widget};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
