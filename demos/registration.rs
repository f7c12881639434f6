//! Registration Wizard
//!
//! This example walks a sign-up flow through the controller. The account and
//! profile steps come from JSON; `confirm_step()` appends a third step in Rust.
//!
//! Key concepts:
//! - Declaring steps and rules in JSON
//! - Attaching a custom check in Rust
//! - Forward navigation gated by validation, backward always allowed
//! - A submit handler that rejects, then accepts on retry
//!
//! Run with: RUST_LOG=stepform=debug cargo run --example registration

use futures::FutureExt;
use std::sync::atomic::{AtomicBool, Ordering};
use stepform::builder::{FieldBuilder, StepBuilder, WizardBuilder};
use stepform::config::WizardConfig;
use stepform::controller::{Navigation, SubmitError, SubmitFuture, SubmitHandler, WizardController};
use stepform::core::{FieldKind, FormData};
use tracing_subscriber::EnvFilter;

const STEPS: &str = r#"{
    "steps": [
        {
            "id": "account",
            "title": "Create your account",
            "fields": [
                { "name": "email", "label": "Email", "kind": "email", "required": true,
                  "placeholder": "you@example.com", "rules": [{ "rule": "email" }] },
                { "name": "password", "label": "Password", "kind": "password", "required": true,
                  "rules": [{ "rule": "min_length", "min": 8 }] }
            ]
        },
        {
            "id": "profile",
            "title": "Tell us about you",
            "fields": [
                { "name": "name", "label": "Name", "required": true,
                  "rules": [{ "rule": "min_length", "min": 2,
                              "message": "Name must be at least 2 characters" }] },
                { "name": "plan", "label": "Plan", "kind": "select", "required": true,
                  "options": [
                      { "label": "Free", "value": "free" },
                      { "label": "Pro", "value": "pro" }
                  ] }
            ]
        }
    ],
    "options": { "submit_label": "Create account" }
}"#;

/// Rejects the first email it sees as already taken.
#[derive(Default)]
struct SignUp {
    seen: AtomicBool,
}

impl SubmitHandler for SignUp {
    fn submit(&self, data: FormData) -> SubmitFuture {
        let taken = !self.seen.swap(true, Ordering::SeqCst);
        async move {
            if taken {
                return Err(SubmitError::rejected("Email already registered"));
            }
            println!("  Handler received {} fields", data.len());
            Ok(())
        }
        .boxed()
    }
}

fn confirm_step() -> Result<StepBuilder, stepform::BuildError> {
    StepBuilder::new("confirm", "Almost done").field(
        FieldBuilder::new("confirmPassword", "Confirm Password")
            .kind(FieldKind::Password)
            .required()
            .validate(|value, data| {
                (data.get("password") != Some(value)).then(|| "Passwords do not match".to_string())
            }),
    )
}

fn show(wizard: &WizardController, result: &Navigation) {
    let step = wizard.current_step();
    println!(
        "  {:?} -> step {} of {} ({})",
        result,
        wizard.state().step_index() + 1,
        wizard.step_count(),
        step.title
    );
    for (field, message) in wizard.state().field_errors() {
        println!("    {field}: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Registration Wizard Example ===\n");

    let config = WizardConfig::from_json(STEPS)?;
    let mut wizard = WizardBuilder::from_config(config)
        .step(confirm_step()?)
        .on_submit(SignUp::default())
        .build()?;

    println!("Example 1: Empty step is blocked");
    let result = wizard.advance().await?;
    show(&wizard, &result);

    println!("\nExample 2: Fix the fields and move on");
    wizard.set_field("email", "ada@example.com");
    wizard.set_field("password", "analytical");
    let result = wizard.advance().await?;
    show(&wizard, &result);

    println!("\nExample 3: Going back never validates");
    let result = wizard.retreat();
    show(&wizard, &result);
    let result = wizard.jump_to(1);
    show(&wizard, &result);

    println!("\nExample 4: Far jumps are ignored");
    let result = wizard.jump_to(wizard.step_count() + 1);
    show(&wizard, &result);

    wizard.set_field("name", "Ada");
    wizard.set_field("plan", "pro");
    let result = wizard.advance().await?;
    show(&wizard, &result);

    println!("\nExample 5: Custom check on the last step");
    wizard.set_field("confirmPassword", "analytic");
    let result = wizard.advance().await?;
    show(&wizard, &result);

    wizard.set_field("confirmPassword", "analytical");
    println!("  Primary action: {:?}", wizard.primary_action());

    println!("\nExample 6: Rejected submission keeps the data");
    match wizard.advance().await {
        Ok(result) => show(&wizard, &result),
        Err(error) => println!("  Submission failed: {error}"),
    }
    println!("  Still submitting: {}", wizard.state().submitting());

    println!("\nExample 7: Retry succeeds");
    let result = wizard.advance().await?;
    show(&wizard, &result);

    let path = wizard.history().get_path();
    println!("\nVisited steps: {path:?}");
    println!("Submit attempts: {}", wizard.state().submit_attempts());

    Ok(())
}
