//! Stepform: a guarded multi-step form wizard engine
//!
//! Stepform turns a declarative list of steps and fields into a stateful
//! navigation flow. Validation is a pure core; the controller is a thin
//! imperative shell around it that owns the wizard's state and performs the
//! single asynchronous side effect: the terminal submission.
//!
//! # Core Concepts
//!
//! - **Steps and fields**: Declarative descriptors, buildable in Rust or JSON
//! - **Validation**: Required check, built-in rules and custom closures,
//!   accumulated per step
//! - **Gate**: Forward navigation only through a valid step; backward always
//! - **Submission**: One in-flight submit per wizard, released on any outcome
//!
//! # Example
//!
//! ```rust
//! use stepform::builder::{email_field, password_field, StepBuilder, WizardBuilder};
//! use stepform::controller::{Navigation, SubmitError};
//! use stepform::core::FormData;
//!
//! async fn sign_in(_data: FormData) -> Result<(), SubmitError> {
//!     Ok(())
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut wizard = WizardBuilder::new()
//!     .step(StepBuilder::new("email", "Welcome back").field(email_field("email", "Email")).unwrap())
//!     .step(StepBuilder::new("password", "Enter your password")
//!         .field(password_field("password", "Password", 8)).unwrap())
//!     .on_submit(sign_in)
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(wizard.advance().await, Ok(Navigation::Blocked(_))));
//!
//! wizard.set_field("email", "a@b.com");
//! assert_eq!(wizard.advance().await.unwrap(), Navigation::Moved { from: 0, to: 1 });
//!
//! wizard.set_field("password", "correct horse");
//! assert_eq!(wizard.advance().await.unwrap(), Navigation::Submitted);
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, FieldBuilder, StepBuilder, WizardBuilder};
pub use config::{WizardConfig, WizardOptions};
pub use controller::{Navigation, SubmitError, SubmitHandler, WizardController, WizardSnapshot};
pub use crate::core::{FieldDescriptor, FieldKind, FormData, StepDescriptor, WizardState};
pub use validation::{CustomValidator, Rule};
