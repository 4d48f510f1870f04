//! Integration tests for formguard
//!
//! End-to-end coverage of the submit flow:
//! - Guard construction and the required onSubmit callback
//! - Blocking invalid submissions and presenting the error map
//! - Handing validated form data to the submit handler
//! - Swallowing handler failures
//! - Re-validation after fixes, with stale messages cleared
//! - Custom presenters and style conventions

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use formguard::{
    ErrorMap, ErrorPresenter, ErrorStyle, Field, Form, FormData, FormGuard, GuardError,
    GuardOptions, SubmitEvent, SubmitOutcome,
};

fn signup_form() -> Form {
    Form::new()
        .field(
            Field::text("username")
                .with_rules(r#"{"required": true, "minLength": 3, "maxLength": 20}"#),
        )
        .field(Field::email("email").with_rules(r#"{"required": true}"#))
        .field(Field::password("password").with_rules(r#"{"required": true}"#))
        .field(Field::checkbox("terms").with_rules(r#"{"required": true}"#))
}

fn fill_valid(form: &mut Form) {
    form.set_value("username", "ada");
    form.set_value("email", "ada@example.com");
    form.set_value("password", "Str0ng!pass");
    form.set_checked("terms", "", true);
}

fn noop_options() -> GuardOptions {
    GuardOptions::new().on_submit(|_, _| async { anyhow::Ok(()) })
}

// ============================================================
// Construction
// ============================================================

#[test]
fn test_guard_requires_submit_handler() {
    let err = FormGuard::new(signup_form(), GuardOptions::new()).unwrap_err();
    assert!(matches!(err, GuardError::MissingSubmitHandler));
}

#[test]
fn test_guard_exposes_form() {
    let guard = FormGuard::new(signup_form(), noop_options()).unwrap();
    assert_eq!(guard.form().fields().len(), 4);
}

// ============================================================
// Blocking invalid submissions
// ============================================================

#[tokio::test]
async fn test_invalid_submission_is_blocked_and_presented() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let options = GuardOptions::new().on_submit(move |_, _| {
        let flag = flag.clone();
        async move {
            flag.store(true, Ordering::SeqCst);
            anyhow::Ok(())
        }
    });

    let mut guard = FormGuard::new(signup_form(), options).unwrap();
    let mut event = SubmitEvent::new();
    let outcome = guard.handle_submit(&mut event).await;

    assert!(outcome.is_blocked());
    assert!(event.default_prevented());
    assert!(!called.load(Ordering::SeqCst));

    let SubmitOutcome::Blocked(outcome) = outcome else {
        panic!("expected a blocked submission");
    };
    assert_eq!(outcome.errors.len(), 4);
    assert_eq!(outcome.error("username"), Some("This field is required"));
    assert_eq!(outcome.error("email"), Some("Email is required"));
    assert_eq!(
        outcome.error("password"),
        Some("Password must contain at least 1 capital letter(s)")
    );
    assert_eq!(
        outcome.error("terms"),
        Some("At least one option must be selected")
    );

    let html = guard.presenter().html(guard.form());
    assert!(html.contains("formguard-error-field"));
    assert!(html.contains("formguard-error-message"));
    assert!(html.contains(r#"aria-live="assertive""#));
    assert!(html.contains("Email is required"));
}

#[tokio::test]
async fn test_unnamed_field_blocks_without_messages() {
    let form = Form::new().field(Field::text("").with_value("stray"));
    let mut guard = FormGuard::new(form, noop_options()).unwrap();
    let mut event = SubmitEvent::new();

    let outcome = guard.handle_submit(&mut event).await;
    let SubmitOutcome::Blocked(outcome) = outcome else {
        panic!("expected a blocked submission");
    };
    assert!(outcome.errors.is_empty());
    assert!(event.default_prevented());
}

// ============================================================
// Valid submissions reach the handler
// ============================================================

#[tokio::test]
async fn test_valid_submission_hands_data_to_handler() {
    let seen: Arc<Mutex<Option<FormData>>> = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let options = GuardOptions::new().on_submit(move |data, event| {
        let sink = sink.clone();
        async move {
            assert!(!event.default_prevented());
            *sink.lock().unwrap() = Some(data);
            anyhow::Ok(())
        }
    });

    let mut form = signup_form();
    fill_valid(&mut form);
    let mut guard = FormGuard::new(form, options).unwrap();

    let mut event = SubmitEvent::new();
    let outcome = guard.handle_submit(&mut event).await;

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert!(!event.default_prevented());

    let data = seen.lock().unwrap().take().expect("handler should run");
    assert_eq!(data.get("username"), Some(&"ada".to_string()));
    assert_eq!(data.get("email"), Some(&"ada@example.com".to_string()));
    assert_eq!(data.get("password"), Some(&"Str0ng!pass".to_string()));
    // A checked, valueless checkbox submits as "on"
    assert_eq!(data.get("terms"), Some(&"on".to_string()));
}

#[tokio::test]
async fn test_unchecked_boxes_are_omitted_from_data() {
    let seen: Arc<Mutex<Option<FormData>>> = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    let options = GuardOptions::new().on_submit(move |data, _| {
        let sink = sink.clone();
        async move {
            *sink.lock().unwrap() = Some(data);
            anyhow::Ok(())
        }
    });

    let form = Form::new()
        .field(Field::text("username").with_value("ada"))
        .field(Field::checkbox("newsletter"));
    let mut guard = FormGuard::new(form, options).unwrap();
    guard.handle_submit(&mut SubmitEvent::new()).await;

    let data = seen.lock().unwrap().take().unwrap();
    assert!(!data.has("newsletter"));
    assert_eq!(data.len(), 1);
}

#[tokio::test]
async fn test_fields_without_rules_pass_unconstrained() {
    let form = Form::new().field(Field::text("nickname"));
    let mut guard = FormGuard::new(form, noop_options()).unwrap();
    let outcome = guard.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(outcome, SubmitOutcome::Completed);
}

// ============================================================
// Handler failures are contained
// ============================================================

#[tokio::test]
async fn test_handler_failure_is_logged_not_propagated() {
    let options =
        GuardOptions::new().on_submit(|_, _| async { Err(anyhow::anyhow!("backend down")) });
    let mut form = signup_form();
    fill_valid(&mut form);
    let mut guard = FormGuard::new(form, options).unwrap();

    let mut event = SubmitEvent::new();
    let outcome = guard.handle_submit(&mut event).await;

    // The submission still completes; the failure belongs to the handler
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert!(!event.default_prevented());
}

// ============================================================
// Re-validation after fixes
// ============================================================

#[tokio::test]
async fn test_fixing_fields_clears_stale_messages() {
    let mut guard = FormGuard::new(signup_form(), noop_options()).unwrap();

    let outcome = guard.handle_submit(&mut SubmitEvent::new()).await;
    assert!(outcome.is_blocked());
    assert!(guard
        .presenter()
        .html(guard.form())
        .contains("This field is required"));

    fill_valid(guard.form_mut());
    let outcome = guard.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(outcome, SubmitOutcome::Completed);

    let html = guard.presenter().html(guard.form());
    assert!(!html.contains("formguard-error-field"));
    assert!(!html.contains("formguard-error-message"));
}

#[tokio::test]
async fn test_partial_fix_narrows_error_map() {
    let mut guard = FormGuard::new(signup_form(), noop_options()).unwrap();
    guard.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(guard.errors().len(), 4);

    guard.form_mut().set_value("username", "ada");
    guard.form_mut().set_value("email", "ada@example.com");
    let outcome = guard.handle_submit(&mut SubmitEvent::new()).await;

    let SubmitOutcome::Blocked(outcome) = outcome else {
        panic!("password and terms are still invalid");
    };
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.error("username"), None);
    assert_eq!(outcome.error("email"), None);
}

// ============================================================
// Presentation conventions
// ============================================================

#[tokio::test]
async fn test_custom_style_flows_through_guard() {
    let style = ErrorStyle {
        field_class: "invalid".to_string(),
        message_class: "invalid-note".to_string(),
        message_color: "#b91c1c".to_string(),
        ..ErrorStyle::default()
    };
    let options = noop_options().style(style);
    let mut guard = FormGuard::new(signup_form(), options).unwrap();
    guard.handle_submit(&mut SubmitEvent::new()).await;

    let html = guard.presenter().html(guard.form());
    assert!(html.contains(r#"class="invalid""#));
    assert!(html.contains(r#"class="invalid-note""#));
    assert!(html.contains("color: #b91c1c;"));
    assert!(!html.contains("formguard-error"));
}

#[derive(Debug, Default)]
struct RecordingPresenter {
    log: Vec<String>,
}

impl ErrorPresenter for RecordingPresenter {
    fn clear(&mut self) {
        self.log.push("clear".to_string());
    }

    fn apply_error_style(&mut self, field_name: &str) {
        self.log.push(format!("style:{}", field_name));
    }

    fn present(&mut self, errors: &ErrorMap) {
        let mut names: Vec<&String> = errors.keys().collect();
        names.sort();
        self.log.push(format!(
            "present:{}",
            names
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(",")
        ));
    }
}

#[tokio::test]
async fn test_custom_presenter_sees_clear_before_present() {
    let form = Form::new().field(
        Field::text("username").with_rules(r#"{"required": true}"#),
    );
    let mut guard =
        FormGuard::with_presenter(form, noop_options(), RecordingPresenter::default()).unwrap();

    guard.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(
        guard.presenter().log,
        vec!["clear".to_string(), "present:username".to_string()]
    );

    guard.form_mut().set_value("username", "ada");
    guard.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(
        guard.presenter().log,
        vec![
            "clear".to_string(),
            "present:username".to_string(),
            "clear".to_string(),
            "present:".to_string(),
        ]
    );
}
