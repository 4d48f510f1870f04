// File: src/rules.rs
// Purpose: Typed rule sets parsed from the per-field JSON rule text

use serde::Deserialize;

/// Validation rules for a single field, deserialized from the camelCase
/// JSON object carried by the field's `data-rules` attribute.
///
/// Every key is optional and a missing key leaves its check disabled.
/// Unknown keys are ignored so markup can carry extra annotations.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    // Presence
    #[serde(default)]
    pub required: bool,

    // Numeric bounds for number fields
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,

    // Length bounds for text fields, in characters
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,

    // Composition policy for password fields
    #[serde(default)]
    pub password: Option<PasswordRules>,

    // Custom message texts
    #[serde(default)]
    pub messages: RuleMessages,
}

impl FieldRules {
    /// Parse the serialized rule text attached to a field.
    ///
    /// Absent or malformed text yields the empty rule set, so the field
    /// passes unconstrained. Both cases are reported as diagnostics rather
    /// than validation errors.
    pub fn parse(raw: Option<&str>, field_name: &str) -> Self {
        let Some(text) = raw else {
            tracing::error!("No rules found for '{}': data-rules attribute is missing", field_name);
            return Self::default();
        };
        match serde_json::from_str::<FieldRules>(text) {
            Ok(rules) => rules.normalized(),
            Err(e) => {
                tracing::error!("Failed to parse rules for '{}': {}", field_name, e);
                Self::default()
            }
        }
    }

    /// A well-formed rule object always carries a password policy, so
    /// password fields are composition-checked with the default minimums
    /// even when the `password` key is omitted. The empty rule set produced
    /// for absent or malformed text stays policy-free.
    fn normalized(mut self) -> Self {
        self.password = Some(self.password.take().unwrap_or_default());
        self
    }
}

/// Composition policy for password fields: a minimum length plus a minimum
/// count per character class.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRules {
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,

    #[serde(default = "default_class_count")]
    pub capital_letters: usize,

    #[serde(default = "default_class_count")]
    pub small_letters: usize,

    #[serde(default = "default_class_count")]
    pub numbers: usize,

    #[serde(default = "default_class_count")]
    pub symbols: usize,

    #[serde(default)]
    pub messages: PasswordMessages,
}

/// Override texts for the standard rule messages. `invalid` replaces the
/// pattern-mismatch message of email and URL fields.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleMessages {
    #[serde(default)]
    pub required: Option<String>,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub min_length: Option<String>,
    #[serde(default)]
    pub max_length: Option<String>,
    #[serde(default)]
    pub invalid: Option<String>,
}

/// Override texts for the password composition messages.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordMessages {
    #[serde(default)]
    pub min_length: Option<String>,
    #[serde(default)]
    pub capital_letters: Option<String>,
    #[serde(default)]
    pub small_letters: Option<String>,
    #[serde(default)]
    pub numbers: Option<String>,
    #[serde(default)]
    pub symbols: Option<String>,
}

// Default values
fn default_password_min_length() -> usize {
    8
}

fn default_class_count() -> usize {
    1
}

// Default implementations
impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            capital_letters: default_class_count(),
            small_letters: default_class_count(),
            numbers: default_class_count(),
            symbols: default_class_count(),
            messages: PasswordMessages::default(),
        }
    }
}
