//! Preview widgets
//!
//! A `PreviewNode` is the renderable form of one field: the presentational
//! members copied from the field plus a `Widget` chosen by its type.

use formsmith_core::{FieldId, FieldType};
use formsmith_ir::Field;
use serde::Serialize;

/// HTML `type` of a plain input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// One radio button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioItem {
    /// Element id, `<field id>-<index>`
    pub id: String,
    pub value: String,
}

/// The control rendered for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Input { input_type: InputType },
    Textarea,
    Select { options: Vec<String> },
    Checkbox,
    Radio { items: Vec<RadioItem> },
    Combobox { options: Vec<String> },
    DatePicker,
    Otp { length: usize },
    FileInput,
    Switch,
}

impl Widget {
    /// Choose the widget for a field
    pub fn for_field(field: &Field) -> Self {
        match field.field_type {
            FieldType::Text => Widget::Input { input_type: InputType::Text },
            FieldType::Number => Widget::Input { input_type: InputType::Number },
            FieldType::Email => Widget::Input { input_type: InputType::Email },
            FieldType::Password => Widget::Input { input_type: InputType::Password },
            FieldType::Textarea => Widget::Textarea,
            FieldType::Select => Widget::Select {
                options: field.options.clone(),
            },
            FieldType::Checkbox => Widget::Checkbox,
            FieldType::Radio => Widget::Radio {
                items: field
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, value)| RadioItem {
                        id: format!("{}-{}", field.id, index),
                        value: value.clone(),
                    })
                    .collect(),
            },
            FieldType::Combobox => Widget::Combobox {
                options: field.options.clone(),
            },
            FieldType::Date => Widget::DatePicker,
            FieldType::Otp => Widget::Otp {
                length: field.otp_length(),
            },
            FieldType::File => Widget::FileInput,
            FieldType::Switch => Widget::Switch,
        }
    }

    /// Whether the label sits beside the control rather than above it
    pub fn inline_label(&self) -> bool {
        matches!(self, Widget::Checkbox | Widget::Switch)
    }
}

impl std::fmt::Display for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Widget::Input { input_type } => write!(f, "<input type=\"{}\">", input_type.as_str()),
            Widget::Textarea => write!(f, "<textarea>"),
            Widget::Select { options } => write!(f, "<select> {}", options.join(" | ")),
            Widget::Checkbox => write!(f, "[ ] checkbox"),
            Widget::Radio { items } => {
                let values: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
                write!(f, "( ) {}", values.join(" ( ) "))
            }
            Widget::Combobox { options } => write!(f, "<combobox> {}", options.join(" | ")),
            Widget::DatePicker => write!(f, "<date picker>"),
            Widget::Otp { length } => write!(f, "<otp> {}", "_ ".repeat(*length).trim_end()),
            Widget::FileInput => write!(f, "<input type=\"file\">"),
            Widget::Switch => write!(f, "[o-] switch"),
        }
    }
}

/// The preview of a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewNode {
    pub field_id: FieldId,
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub widget: Widget,
}

impl PreviewNode {
    /// Build a node, or `None` if the field cannot be rendered
    pub fn from_field(field: &Field) -> Option<Self> {
        if !field.is_renderable() {
            return None;
        }

        Some(Self {
            field_id: field.id,
            name: field.name.clone(),
            label: field.label.clone(),
            description: field.description.clone(),
            placeholder: field.placeholder.clone(),
            class_name: field.class_name.clone(),
            required: field.required,
            disabled: field.disabled,
            widget: Widget::for_field(field),
        })
    }
}
