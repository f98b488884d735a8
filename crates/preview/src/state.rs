//! Preview form state
//!
//! Captured values keyed by field name, seeded from each type's default.
//! Two fields sharing a name share one slot; the later field's default wins.

use formsmith_ir::Field;
use serde_json::{Map, Value};

/// Current values of a preview form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: Map<String, Value>,
}

impl FormState {
    /// Seed state for the renderable fields of a list
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        let values = fields
            .into_iter()
            .filter(|f| f.is_renderable())
            .map(|f| (f.name.clone(), f.behavior().default_value.to_json()))
            .collect();
        Self { values }
    }

    /// Current value of a slot
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Overwrite an existing slot. Returns `false` for unknown names.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// All values, in field order
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Values as a JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::FieldType;
    use serde_json::json;

    #[test]
    fn test_defaults_follow_type_table() {
        let fields = vec![
            Field::new(FieldType::Text, "name", "Name"),
            Field::new(FieldType::Checkbox, "agree", "Agree"),
            Field::new(FieldType::Date, "dob", "Birthday"),
            Field::new(FieldType::File, "cv", "CV"),
            Field::new(FieldType::Number, "age", "Age"),
        ];
        let state = FormState::from_fields(&fields);

        assert_eq!(
            state.to_value(),
            json!({"name": "", "agree": false, "dob": null, "cv": null, "age": ""})
        );
        let keys: Vec<&String> = state.values().keys().collect();
        assert_eq!(keys, vec!["name", "agree", "dob", "cv", "age"]);
    }

    #[test]
    fn test_set_only_known_slots() {
        let fields = vec![Field::new(FieldType::Text, "name", "Name")];
        let mut state = FormState::from_fields(&fields);

        assert!(state.set("name", json!("Ada")));
        assert!(!state.set("other", json!("x")));
        assert_eq!(state.get("name"), Some(&json!("Ada")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_unrenderable_fields_have_no_slot() {
        let fields = vec![Field::new(FieldType::Text, "", "Nameless")];
        assert!(FormState::from_fields(&fields).is_empty());
    }
}
