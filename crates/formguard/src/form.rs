// File: src/form.rs
// Purpose: Ordered form model and the data map handed to submit handlers

use std::collections::HashMap;

use crate::field::{Field, FieldKind};

/// An ordered collection of form controls, standing in for the form element
/// a guard attaches to. Fields are validated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, keeping document order.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// All fields in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Update the value of the first field with the given name.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.get_mut(name) {
            field.value = value.into();
        }
    }

    /// Update the checked state of the checkbox or radio carrying both the
    /// given name and value. For radios, checking one clears the rest of
    /// the group.
    pub fn set_checked(&mut self, name: &str, value: &str, checked: bool) {
        let mut is_radio = false;
        if let Some(field) = self
            .fields
            .iter_mut()
            .find(|f| f.kind.is_checkable() && f.name == name && f.value == value)
        {
            field.checked = checked;
            is_radio = field.kind == FieldKind::Radio;
        }
        if is_radio && checked {
            for field in self
                .fields
                .iter_mut()
                .filter(|f| f.kind == FieldKind::Radio && f.name == name && f.value != value)
            {
                field.checked = false;
            }
        }
    }

    /// True when any control of the given kind sharing `name` is checked.
    pub fn group_has_checked(&self, name: &str, kind: FieldKind) -> bool {
        self.fields
            .iter()
            .any(|f| f.kind == kind && f.name == name && f.checked)
    }

    /// Snapshot of the form's current data with submission semantics:
    /// unnamed controls and unchecked checkboxes or radios are omitted, and
    /// a checked checkbox without a value contributes "on".
    pub fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        for field in &self.fields {
            if field.name.is_empty() {
                continue;
            }
            if field.kind.is_checkable() {
                if !field.checked {
                    continue;
                }
                if field.value.is_empty() {
                    data.insert(&field.name, "on");
                } else {
                    data.insert(&field.name, &field.value);
                }
            } else {
                data.insert(&field.name, &field.value);
            }
        }
        data
    }
}

/// Form data handed to the submit handler, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }

    /// Get a field value parsed as a specific type.
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.fields.get(key)?.parse().ok()
    }

    /// Check if a field exists.
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get all field names.
    pub fn keys(&self) -> Vec<&String> {
        self.fields.keys().collect()
    }

    /// Get all fields as a map.
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
