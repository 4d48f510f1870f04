// FormGuard - form validation with per-field JSON rules
// Typed rule parsing, a fixed check catalog, error presentation, and submit gating

pub mod field;
pub mod form;
pub mod rules;
pub mod style;

// Validation and presentation modules
pub mod guard;
pub mod presenter;
pub mod validation;

// Re-export the form model
pub use field::{Field, FieldKind};
pub use form::{Form, FormData};

// Re-export rule types
pub use rules::{FieldRules, PasswordMessages, PasswordRules, RuleMessages};

// Re-export the validation pass
pub use validation::{ErrorMap, FormValidator, ValidationOutcome};

// Re-export presentation and submit wiring
pub use guard::{
    FormGuard, GuardError, GuardOptions, SubmitEvent, SubmitFuture, SubmitHandler, SubmitOutcome,
};
pub use presenter::{ErrorPresenter, HtmlPresenter};
pub use style::ErrorStyle;

// Re-export Maud for custom presenters
pub use maud::{html as maud, Markup, PreEscaped};
