// File: src/field.rs
// Purpose: Field model for the form controls a validation pass walks over

use std::fmt;

/// The kind of form control, mirroring the HTML input types the check
/// catalog distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Password,
    Url,
    Checkbox,
    Radio,
    Textarea,
}

impl FieldKind {
    /// The HTML type string for this kind. `Textarea` reports its tag name
    /// since the element carries no `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Url => "url",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Parse a kind from its HTML type string.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "text" => Some(FieldKind::Text),
            "number" => Some(FieldKind::Number),
            "email" => Some(FieldKind::Email),
            "password" => Some(FieldKind::Password),
            "url" => Some(FieldKind::Url),
            "checkbox" => Some(FieldKind::Checkbox),
            "radio" => Some(FieldKind::Radio),
            "textarea" => Some(FieldKind::Textarea),
            _ => None,
        }
    }

    /// True for kinds where checked state is meaningful.
    pub fn is_checkable(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form control: a name, a kind, its current value, and the serialized
/// rule text its markup carries in the `data-rules` attribute.
///
/// Checkboxes and radios sharing a name form a group; `checked` is only
/// meaningful for those kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
    pub rules: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            rules: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    pub fn radio(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Radio)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the checked state for checkbox and radio controls.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Attach serialized rule text, as carried by the `data-rules` attribute.
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }
}
