//! End-to-end wizard flows: navigation gates, submission and failure handling.

use futures::FutureExt;
use serde_json::json;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use stepform::builder::{email_field, password_field, FieldBuilder, StepBuilder, WizardBuilder};
use stepform::config::WizardConfig;
use stepform::controller::{
    AdvanceRequest, Navigation, PrimaryAction, SubmitError, SubmitFuture, SubmitHandler,
    WizardController,
};
use stepform::core::{FieldKind, FormData, Trigger};

/// Records every submission and rejects while `reject` is set.
#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<FormData>>>,
    reject: Arc<AtomicBool>,
}

impl Recorder {
    fn calls(&self) -> Vec<FormData> {
        self.calls.lock().unwrap().clone()
    }
}

impl SubmitHandler for Recorder {
    fn submit(&self, data: FormData) -> SubmitFuture {
        self.calls.lock().unwrap().push(data);
        let reject = self.reject.load(Ordering::SeqCst);
        async move {
            if reject {
                Err(SubmitError::rejected("Invalid email or password"))
            } else {
                Ok(())
            }
        }
        .boxed()
    }
}

/// Never completes.
struct Hang;

impl SubmitHandler for Hang {
    fn submit(&self, _data: FormData) -> SubmitFuture {
        futures::future::pending().boxed()
    }
}

/// Panics before returning a future.
struct Explode;

impl SubmitHandler for Explode {
    fn submit(&self, _data: FormData) -> SubmitFuture {
        panic!("submit handler bug")
    }
}

fn login_builder() -> WizardBuilder {
    WizardBuilder::new()
        .step(
            StepBuilder::new("email", "Welcome back")
                .description("Enter your email to continue")
                .field(email_field("email", "Email").placeholder("you@example.com"))
                .unwrap(),
        )
        .step(
            StepBuilder::new("password", "Enter your password")
                .field(password_field("password", "Password", 8))
                .unwrap(),
        )
        .submit_label("Sign in")
}

fn login(handler: impl SubmitHandler + 'static) -> WizardController {
    login_builder().on_submit(handler).build().unwrap()
}

async fn on_last_step(wizard: &mut WizardController) {
    wizard.set_field("email", "a@b.com");
    assert!(wizard.advance().await.unwrap().moved());
    wizard.set_field("password", "correct horse");
}

#[tokio::test]
async fn required_field_blocks_and_valid_field_advances() {
    let mut wizard = login(Recorder::default());

    wizard.set_field("email", "");
    let result = wizard.advance().await.unwrap();

    let Navigation::Blocked(errors) = result else {
        panic!("Expected Blocked result");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "Email is required");
    assert_eq!(wizard.state().field_errors(), &errors);
    assert_eq!(wizard.state().step_index(), 0);

    wizard.set_field("email", "a@b.com");
    assert!(wizard.state().field_errors().is_empty());
    assert_eq!(
        wizard.advance().await.unwrap(),
        Navigation::Moved { from: 0, to: 1 }
    );
    assert_eq!(wizard.state().step_index(), 1);
}

#[tokio::test]
async fn custom_rule_runs_after_required_check() {
    let mut wizard = login(Recorder::default());

    wizard.set_field("email", "not-an-email");
    assert!(matches!(
        wizard.advance().await.unwrap(),
        Navigation::Blocked(_)
    ));
    assert_eq!(wizard.state().error("email"), Some("Invalid email format"));
}

#[tokio::test]
async fn last_step_submits_merged_data_once() {
    let recorder = Recorder::default();
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;

    assert_eq!(
        wizard.primary_action(),
        PrimaryAction::Submit("Sign in".to_string())
    );
    assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["email"], json!("a@b.com"));
    assert_eq!(calls[0]["password"], json!("correct horse"));
    assert_eq!(wizard.state().step_index(), 1);
    assert!(!wizard.state().submitting());
}

#[tokio::test]
async fn short_password_never_reaches_handler() {
    let recorder = Recorder::default();
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;
    wizard.set_field("password", "short");

    assert!(matches!(
        wizard.advance().await.unwrap(),
        Navigation::Blocked(_)
    ));
    assert_eq!(
        wizard.state().error("password"),
        Some("Password must be at least 8 characters")
    );
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn rejected_submission_keeps_position_and_allows_retry() {
    let recorder = Recorder::default();
    recorder.reject.store(true, Ordering::SeqCst);
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;

    let error = wizard.advance().await.unwrap_err();

    assert!(matches!(error, SubmitError::Rejected(ref m) if m == "Invalid email or password"));
    assert_eq!(wizard.state().step_index(), 1);
    assert!(!wizard.state().submitting());
    assert_eq!(wizard.state().value("email"), Some(&json!("a@b.com")));

    recorder.reject.store(false, Ordering::SeqCst);
    assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);
    assert_eq!(recorder.calls().len(), 2);
    assert_eq!(wizard.state().submit_attempts(), 2);
}

#[tokio::test]
async fn advance_while_submitting_is_ignored() {
    let recorder = Recorder::default();
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;

    let AdvanceRequest::Submit(submission) = wizard.request_advance() else {
        panic!("Expected Submit request");
    };
    assert!(wizard.state().submitting());
    assert_eq!(submission.data()["password"], json!("correct horse"));

    assert_eq!(wizard.advance().await.unwrap(), Navigation::Ignored);
    assert_eq!(wizard.click_step(1).await.unwrap(), Navigation::Ignored);
    assert!(recorder.calls().is_empty());
    assert_eq!(wizard.snapshot().primary_action, PrimaryAction::Submitting);

    let outcome = recorder.submit(submission.data().clone()).await;
    assert_eq!(
        wizard.finish_submit(submission, outcome).unwrap(),
        Navigation::Submitted
    );
    assert_eq!(recorder.calls().len(), 1);
    assert!(!wizard.state().submitting());
}

#[tokio::test]
async fn dropped_ticket_lets_the_wizard_submit_again() {
    let recorder = Recorder::default();
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;

    let AdvanceRequest::Submit(submission) = wizard.request_advance() else {
        panic!("Expected Submit request");
    };
    drop(submission);

    assert_eq!(
        wizard.primary_action(),
        PrimaryAction::Submit("Sign in".to_string())
    );
    assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);
    assert_eq!(recorder.calls().len(), 1);
    assert_eq!(wizard.state().submit_attempts(), 2);
    assert!(!wizard.state().submitting());
}

#[tokio::test]
async fn aborted_submission_allows_retry() {
    let recorder = Recorder::default();
    let mut wizard = login(recorder.clone());
    on_last_step(&mut wizard).await;

    let AdvanceRequest::Submit(submission) = wizard.request_advance() else {
        panic!("Expected Submit request");
    };
    assert!(wizard.abort_submit(submission));
    assert!(!wizard.state().submitting());

    assert_eq!(wizard.jump_to(0), Navigation::Moved { from: 1, to: 0 });
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn far_jump_is_ignored_regardless_of_validity() {
    let builder = WizardBuilder::new()
        .step(
            StepBuilder::new("a", "A")
                .field(FieldBuilder::new("a", "A"))
                .unwrap(),
        )
        .step(StepBuilder::new("b", "B"))
        .step(StepBuilder::new("c", "C"));
    let mut wizard = builder.on_submit(Recorder::default()).build().unwrap();

    assert_eq!(wizard.jump_to(2), Navigation::Ignored);
    assert_eq!(wizard.state().step_index(), 0);
    assert!(wizard.history().is_empty());

    assert!(wizard.jump_to(1).moved());
    assert!(wizard.jump_to(2).moved());
}

#[tokio::test]
async fn backward_jump_preserves_data() {
    let mut wizard = login(Recorder::default());
    on_last_step(&mut wizard).await;
    let before = wizard.state().data().clone();

    assert_eq!(wizard.jump_to(0), Navigation::Moved { from: 1, to: 0 });

    assert_eq!(wizard.state().data(), &before);
    assert_eq!(wizard.state().value("email"), Some(&json!("a@b.com")));
    assert_eq!(wizard.history().get_path(), vec![0, 1, 0]);
    assert_eq!(wizard.history().count(Trigger::Jump), 1);
}

#[tokio::test]
async fn dropped_submission_releases_submitting() {
    let mut wizard = login(Hang);
    on_last_step(&mut wizard).await;

    {
        let mut advance = std::pin::pin!(wizard.advance());
        assert!(futures::poll!(advance.as_mut()).is_pending());
    }

    assert!(!wizard.state().submitting());
    assert_eq!(wizard.state().submit_attempts(), 1);
    assert_eq!(wizard.state().step_index(), 1);
}

#[tokio::test]
async fn panicking_handler_releases_submitting() {
    let mut wizard = login(Explode);
    on_last_step(&mut wizard).await;

    let result = AssertUnwindSafe(wizard.advance()).catch_unwind().await;

    assert!(result.is_err());
    assert!(!wizard.state().submitting());
}

#[tokio::test]
async fn checkbox_must_be_ticked_when_required() {
    let mut wizard = WizardBuilder::new()
        .step(
            StepBuilder::new("terms", "Terms")
                .field(
                    FieldBuilder::new("accept", "Terms acceptance")
                        .kind(FieldKind::Checkbox)
                        .required(),
                )
                .unwrap(),
        )
        .on_submit(Recorder::default())
        .build()
        .unwrap();

    wizard.set_field("accept", false);
    assert!(matches!(
        wizard.advance().await.unwrap(),
        Navigation::Blocked(_)
    ));
    assert_eq!(
        wizard.state().error("accept"),
        Some("Terms acceptance is required")
    );

    wizard.set_field("accept", true);
    assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);
}

#[tokio::test]
async fn declarative_wizard_with_custom_check() {
    let config = WizardConfig::from_json(
        r#"{
            "steps": [
                {
                    "id": "info",
                    "title": "Create your account",
                    "fields": [
                        { "name": "email", "label": "Email", "kind": "email",
                          "required": true, "rules": [{ "rule": "email" }] }
                    ]
                },
                {
                    "id": "password",
                    "title": "Choose a password",
                    "fields": [
                        { "name": "password", "label": "Password", "kind": "password",
                          "required": true, "rules": [{ "rule": "min_length", "min": 8 }] },
                        { "name": "confirmPassword", "label": "Confirm Password",
                          "kind": "password", "required": true,
                          "rules": [{ "rule": "matches_field", "field": "password",
                                      "message": "Passwords do not match" }] }
                    ]
                }
            ],
            "initial_data": { "email": "taken@example.com" },
            "options": { "submit_label": "Create account" }
        }"#,
    )
    .unwrap();

    let recorder = Recorder::default();
    let mut wizard = WizardController::from_config(config, recorder.clone()).unwrap();

    assert_eq!(wizard.state().value("email"), Some(&json!("taken@example.com")));
    assert!(wizard.advance().await.unwrap().moved());

    wizard.set_field("password", "correct horse");
    wizard.set_field("confirmPassword", "correct hose");
    let Navigation::Blocked(errors) = wizard.advance().await.unwrap() else {
        panic!("Expected Blocked result");
    };
    assert_eq!(errors["confirmPassword"], "Passwords do not match");

    wizard.set_field("confirmPassword", "correct horse");
    assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);
    assert_eq!(recorder.calls()[0].len(), 3);
}

#[tokio::test]
async fn snapshot_reflects_progress() {
    let mut wizard = login(Recorder::default());

    let first = wizard.snapshot();
    assert_eq!(first.step_id, "email");
    assert!((first.progress - 0.5).abs() < f64::EPSILON);

    on_last_step(&mut wizard).await;
    let last = wizard.snapshot();
    assert_eq!(last.step_id, "password");
    assert!(last.is_last_step);
    assert!((last.progress - 1.0).abs() < f64::EPSILON);
}
