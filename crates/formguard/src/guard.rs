// File: src/guard.rs
// Purpose: Submit gating - wires validation and presentation into a
// submission attempt and hands valid form data to the configured handler

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::form::{Form, FormData};
use crate::presenter::{ErrorPresenter, HtmlPresenter};
use crate::style::ErrorStyle;
use crate::validation::{ErrorMap, FormValidator, ValidationOutcome};

/// Boxed future returned by submit handlers.
pub type SubmitFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// The configured completion callback. It receives the form's data and a
/// copy of the submission event once validation passes.
pub type SubmitHandler = Box<dyn Fn(FormData, SubmitEvent) -> SubmitFuture + Send + Sync>;

/// Errors raised when a guard is constructed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GuardError {
    /// No completion callback was supplied.
    #[error("the `on_submit` callback is required")]
    MissingSubmitHandler,
}

/// One submission attempt. The guard cancels the default action when
/// validation fails; the handler receives a copy alongside the form data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Cancel the default submission action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a submission attempt came to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed: the submission was cancelled and the error map
    /// presented.
    Blocked(ValidationOutcome),
    /// Validation passed and the submit handler ran. A handler failure is
    /// logged, never propagated.
    Completed,
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked(_))
    }
}

/// Options for [`FormGuard`]. The `on_submit` handler is required; the
/// error style falls back to the defaults.
#[derive(Default)]
pub struct GuardOptions {
    on_submit: Option<SubmitHandler>,
    style: ErrorStyle,
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion callback invoked with the form's data when a
    /// submission passes validation.
    pub fn on_submit<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(FormData, SubmitEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.on_submit = Some(Box::new(move |data, event| Box::pin(handler(data, event))));
        self
    }

    /// Override the presentation style conventions.
    pub fn style(mut self, style: ErrorStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Debug for GuardOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardOptions")
            .field("on_submit", &self.on_submit.is_some())
            .field("style", &self.style)
            .finish()
    }
}

/// Gatekeeper for one form. Every submission attempt clears stale
/// presentation, runs a fresh validation pass, presents the resulting
/// error map, and either cancels the submission or hands the form's data
/// to the configured handler.
pub struct FormGuard<P: ErrorPresenter = HtmlPresenter> {
    form: Form,
    on_submit: SubmitHandler,
    presenter: P,
    validator: FormValidator,
}

impl FormGuard<HtmlPresenter> {
    /// Attach a guard to a form, presenting errors as HTML. Fails when the
    /// options carry no `on_submit` callback.
    pub fn new(form: Form, options: GuardOptions) -> Result<Self, GuardError> {
        let GuardOptions { on_submit, style } = options;
        let on_submit = on_submit.ok_or(GuardError::MissingSubmitHandler)?;
        Ok(Self {
            form,
            on_submit,
            presenter: HtmlPresenter::new(style),
            validator: FormValidator::new(),
        })
    }
}

impl<P: ErrorPresenter> FormGuard<P> {
    /// Attach a guard with a custom presenter. The presenter brings its own
    /// styling; the options' style is not consulted.
    pub fn with_presenter(
        form: Form,
        options: GuardOptions,
        presenter: P,
    ) -> Result<Self, GuardError> {
        let on_submit = options.on_submit.ok_or(GuardError::MissingSubmitHandler)?;
        Ok(Self {
            form,
            on_submit,
            presenter,
            validator: FormValidator::new(),
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mutable access to the form, for updating values between attempts.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The error map left behind by the last pass.
    pub fn errors(&self) -> &ErrorMap {
        self.validator.errors()
    }

    /// Run one validation pass outside a submission attempt: stale
    /// presentation is cleared first, then the fresh error map presented.
    pub fn validate(&mut self) -> ValidationOutcome {
        self.presenter.clear();
        let outcome = self.validator.validate(&self.form);
        self.presenter.present(&outcome.errors);
        outcome
    }

    /// Handle one submission attempt.
    ///
    /// An invalid form cancels the event and reports `Blocked` with the
    /// pass's outcome. A valid form snapshots the data, awaits the handler
    /// and reports `Completed`; a handler error is logged and swallowed so
    /// a failed completion never looks like a validation failure.
    pub async fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        let outcome = self.validate();
        if !outcome.is_valid {
            event.prevent_default();
            return SubmitOutcome::Blocked(outcome);
        }

        let data = self.form.form_data();
        if let Err(e) = (self.on_submit)(data, event.clone()).await {
            tracing::error!("Error during form submission: {:#}", e);
        }
        SubmitOutcome::Completed
    }
}

impl<P: ErrorPresenter + fmt::Debug> fmt::Debug for FormGuard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormGuard")
            .field("form", &self.form)
            .field("presenter", &self.presenter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn noop_options() -> GuardOptions {
        GuardOptions::new().on_submit(|_, _| async { anyhow::Ok(()) })
    }

    #[test]
    fn test_missing_handler_fails_construction() {
        let result = FormGuard::new(Form::new(), GuardOptions::new());
        assert!(matches!(result, Err(GuardError::MissingSubmitHandler)));
        assert_eq!(
            GuardError::MissingSubmitHandler.to_string(),
            "the `on_submit` callback is required"
        );
    }

    #[test]
    fn test_submit_event_starts_unprevented() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_guard_options_debug_hides_handler() {
        let options = noop_options();
        let debug = format!("{:?}", options);
        assert!(debug.contains("on_submit: true"));
    }

    #[test]
    fn test_validate_presents_current_errors() {
        let form = Form::new().field(
            Field::text("username").with_rules(r#"{"required": true}"#),
        );
        let mut guard = FormGuard::new(form, noop_options()).unwrap();
        let outcome = guard.validate();
        assert!(!outcome.is_valid);
        assert_eq!(
            guard.presenter().message("username"),
            Some("This field is required")
        );

        guard.form_mut().set_value("username", "ada");
        let outcome = guard.validate();
        assert!(outcome.is_valid);
        assert_eq!(guard.presenter().message("username"), None);
    }
}
