//! Interactive preview form
//!
//! Renders a field list into preview nodes, captures values, and validates
//! them on submit with the same `FormSchema` the code generator emits.

use std::fmt::Write as _;

use formsmith_core::{BuilderError, BuilderResult};
use formsmith_ir::{Field, FieldError, FormSchema, ValidationResult};
use serde_json::Value;

use crate::state::FormState;
use crate::widget::PreviewNode;

/// Label of the submit control
pub const SUBMIT_LABEL: &str = "Submit";

/// Title of the notification raised on a successful submit
pub const SUBMITTED_TITLE: &str = "You submitted the following values:";

// ============================================================================
// Notifications
// ============================================================================

/// A transient message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Sink for submit notifications (a toast area in a graphical host)
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed
    Accepted {
        /// The captured values
        values: Value,
        /// The same values, pretty-printed
        text: String,
    },
    /// At least one field failed; errors are in field order
    Rejected { errors: Vec<FieldError> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

// ============================================================================
// PreviewForm
// ============================================================================

/// A live preview of a field list
#[derive(Debug, Clone)]
pub struct PreviewForm {
    nodes: Vec<PreviewNode>,
    state: FormState,
    schema: FormSchema,
    errors: ValidationResult,
}

impl PreviewForm {
    /// Render a field list. Fields without a usable id or name are skipped.
    pub fn render(fields: &[Field]) -> Self {
        let nodes: Vec<PreviewNode> = fields.iter().filter_map(PreviewNode::from_field).collect();
        let skipped = fields.len() - nodes.len();
        if skipped > 0 {
            tracing::warn!(skipped, "fields without a usable id or name left out of preview");
        }

        Self {
            nodes,
            state: FormState::from_fields(fields),
            schema: FormSchema::from_fields(fields),
            errors: ValidationResult::ok(),
        }
    }

    /// Rendered nodes in field order
    pub fn nodes(&self) -> &[PreviewNode] {
        &self.nodes
    }

    /// The captured values
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The validation applied on submit
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Whether a submit control is shown
    pub fn has_submit(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Capture a value for the named field.
    ///
    /// Clears any inline error previously shown for that field.
    pub fn set_value(&mut self, name: &str, value: Value) -> BuilderResult<()> {
        let node = self
            .nodes
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| BuilderError::FieldNotFound(name.to_string()))?;

        if node.disabled {
            return Err(BuilderError::FieldDisabled(name.to_string()));
        }

        tracing::debug!(name, %value, "set preview value");
        self.state.set(name, value);
        self.errors.errors.retain(|e| e.name != name);
        self.errors.valid = self.errors.errors.is_empty();
        Ok(())
    }

    /// Current value of the named field
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.state.get(name)
    }

    /// Inline error currently shown for a field
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.errors.error_for(name)
    }

    /// Validate and submit.
    ///
    /// On success the values go to `notifier` as pretty-printed JSON. On
    /// failure the per-field messages are kept for `field_error` and the
    /// notifier is not called.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> SubmitOutcome {
        self.errors = self.schema.validate(self.state.values());

        if self.errors.has_errors() {
            tracing::info!(errors = self.errors.errors.len(), "preview submit rejected");
            return SubmitOutcome::Rejected {
                errors: self.errors.errors.clone(),
            };
        }

        let values = self.state.to_value();
        let text = format!("{:#}", values);
        tracing::info!(fields = self.state.len(), "preview submit accepted");
        notifier.notify(Notification {
            title: SUBMITTED_TITLE.to_string(),
            body: text.clone(),
        });
        SubmitOutcome::Accepted { values, text }
    }

    /// Plain-text outline of the form, one block per node
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for node in &self.nodes {
            let marker = if node.required { " *" } else { "" };
            let _ = write!(out, "{}{} ({})", node.label, marker, node.name);
            if node.disabled {
                out.push_str(" [disabled]");
            }
            out.push('\n');

            let _ = write!(out, "  {}", node.widget);
            if let Some(placeholder) = &node.placeholder {
                let _ = write!(out, " \"{}\"", placeholder);
            }
            if let Some(value) = self.state.get(&node.name) {
                let _ = write!(out, " = {}", value);
            }
            out.push('\n');

            if let Some(description) = &node.description {
                let _ = writeln!(out, "  {}", description);
            }
            if let Some(error) = self.field_error(&node.name) {
                let _ = writeln!(out, "  ! {}", error);
            }
        }

        if self.has_submit() {
            let _ = writeln!(out, "[ {} ]", SUBMIT_LABEL);
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
