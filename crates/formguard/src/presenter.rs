// File: src/presenter.rs
// Purpose: Error presentation - renders the error map next to the fields
// that produced it

use std::collections::HashSet;

use maud::{html, Markup};

use crate::field::{Field, FieldKind};
use crate::form::Form;
use crate::style::ErrorStyle;
use crate::validation::ErrorMap;

/// Renders and clears error state for a form.
///
/// The validation pass never touches presentation. The guard drives this
/// interface: `clear` before every pass so stale messages cannot survive,
/// then `present` with the final error map.
pub trait ErrorPresenter {
    /// Drop all previously presented messages and field styles.
    fn clear(&mut self);

    /// Mark a single field (and every control sharing its name) as
    /// carrying an error.
    fn apply_error_style(&mut self, field_name: &str);

    /// Take over the final error map for a pass.
    fn present(&mut self, errors: &ErrorMap);
}

/// Built-in presenter that renders the form as an HTML fragment: controls
/// carrying an error get the configured field class, and a message node is
/// inserted after the first control with the failing name.
///
/// Message nodes are announced assertively to screen readers.
#[derive(Debug, Clone, Default)]
pub struct HtmlPresenter {
    style: ErrorStyle,
    errors: ErrorMap,
    styled: HashSet<String>,
}

impl HtmlPresenter {
    pub fn new(style: ErrorStyle) -> Self {
        Self {
            style,
            errors: ErrorMap::new(),
            styled: HashSet::new(),
        }
    }

    /// The style conventions this presenter renders with.
    pub fn style(&self) -> &ErrorStyle {
        &self.style
    }

    /// CSS block for the configured conventions, for callers that place
    /// the classes in a stylesheet.
    pub fn stylesheet(&self) -> String {
        self.style.stylesheet()
    }

    /// Message currently presented for a field.
    pub fn message(&self, field_name: &str) -> Option<&str> {
        self.errors.get(field_name).map(String::as_str)
    }

    /// True when the field is currently marked as invalid.
    pub fn is_styled(&self, field_name: &str) -> bool {
        self.styled.contains(field_name)
    }

    /// Render the form's controls with the currently presented error state.
    pub fn markup(&self, form: &Form) -> Markup {
        let mut messaged: HashSet<String> = HashSet::new();
        html! {
            @for field in form.fields() {
                (self.field_markup(field, &mut messaged))
            }
        }
    }

    /// Render the form to an HTML string.
    pub fn html(&self, form: &Form) -> String {
        self.markup(form).into_string()
    }

    fn field_markup(&self, field: &Field, messaged: &mut HashSet<String>) -> Markup {
        let class = self
            .styled
            .contains(&field.name)
            .then(|| self.style.field_class.as_str());
        // The message node goes after the first control with the failing
        // name, so grouped checkboxes and radios get a single message.
        let message = match self.errors.get(&field.name) {
            Some(message) if !messaged.contains(&field.name) => {
                messaged.insert(field.name.clone());
                Some(message)
            }
            _ => None,
        };
        html! {
            @if field.kind == FieldKind::Textarea {
                textarea name=(field.name) class=[class] data-rules=[field.rules.as_deref()] {
                    (field.value)
                }
            } @else if field.kind.is_checkable() {
                input type=(field.kind) name=(field.name) value=(field.value)
                    checked[field.checked] class=[class] data-rules=[field.rules.as_deref()];
            } @else {
                input type=(field.kind) name=(field.name) value=(field.value)
                    class=[class] data-rules=[field.rules.as_deref()];
            }
            @if let Some(message) = message {
                div class=(self.style.message_class) style=(self.style.message_css())
                    aria-live="assertive" {
                    (message)
                }
            }
        }
    }
}

impl ErrorPresenter for HtmlPresenter {
    fn clear(&mut self) {
        self.errors.clear();
        self.styled.clear();
    }

    fn apply_error_style(&mut self, field_name: &str) {
        self.styled.insert(field_name.to_string());
    }

    fn present(&mut self, errors: &ErrorMap) {
        for name in errors.keys() {
            self.apply_error_style(name);
        }
        self.errors = errors.clone();
    }
}
