// File: src/validation/mod.rs
// Purpose: Validation pass - runs the check catalog over a form and collects
// the per-field error map

use std::collections::HashMap;

use crate::form::Form;
use crate::rules::FieldRules;

pub mod checks;

/// Field name to current error message. Rebuilt on every pass and holding
/// at most one message per field, the most recent write winning.
pub type ErrorMap = HashMap<String, String>;

/// Result of one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: ErrorMap,
}

impl ValidationOutcome {
    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the current message for a field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Runs the check catalog over a form, one rule category at a time per
/// field, each hit writing that field's slot in the shared error map.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    errors: ErrorMap,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            errors: ErrorMap::new(),
        }
    }

    /// The error map left behind by the last pass.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Validate every field of the form in document order.
    ///
    /// Unnamed fields are skipped after a diagnostic and make the outcome
    /// invalid without contributing an error entry. For named fields, a
    /// later category hit overwrites an earlier one under the same name.
    pub fn validate(&mut self, form: &Form) -> ValidationOutcome {
        self.errors.clear();
        let mut all_named = true;

        for field in form.fields() {
            if field.name.is_empty() {
                tracing::error!("Validation error: a {} field is missing a name", field.kind);
                all_named = false;
                continue;
            }

            let rules = FieldRules::parse(field.rules.as_deref(), &field.name);

            if let Some(message) = checks::check_required(field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_number_bounds(field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_email(field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_url(field, &rules) {
                self.add_error(&field.name, message);
            }
            for message in checks::password_failures(field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_text_length(field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_checkbox_group(form, field, &rules) {
                self.add_error(&field.name, message);
            }
            if let Some(message) = checks::check_radio_group(form, field, &rules) {
                self.add_error(&field.name, message);
            }
        }

        tracing::debug!("Validation pass finished with {} error(s)", self.errors.len());
        ValidationOutcome {
            is_valid: self.errors.is_empty() && all_named,
            errors: self.errors.clone(),
        }
    }

    /// Record a message for a field. A later write under the same name
    /// replaces the earlier message.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}
