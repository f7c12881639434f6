//! Field and step validation.
//!
//! Step validation uses Stillwater's `Validation` type to accumulate ALL
//! failing fields of a step instead of stopping at the first one, so a user
//! sees every problem on the page in a single pass.
//!
//! Each field is checked in three stages:
//!
//! 1. The required check, which short-circuits everything else
//! 2. Built-in [`Rule`]s, in declaration order
//! 3. An optional [`CustomValidator`] that can see the whole form
//!
//! # Example
//!
//! ```rust
//! use stepform::core::{FieldDescriptor, FieldKind, FormData, StepDescriptor};
//! use stepform::validation::{validate_step, Rule};
//! use serde_json::json;
//!
//! let mut email = FieldDescriptor::new("email", "Email", FieldKind::Email);
//! email.required = true;
//! email.rules.push(Rule::Email);
//!
//! let mut step = StepDescriptor::new("account", "Account");
//! step.fields.push(email);
//!
//! let mut data = FormData::new();
//! let errors = validate_step(&step, &data);
//! assert_eq!(errors["email"], "Email is required");
//!
//! data.insert("email".to_string(), json!("a@b.com"));
//! assert!(validate_step(&step, &data).is_empty());
//! ```

pub mod custom;
pub mod error;
pub mod field;
pub mod rules;
pub mod step;

pub use custom::CustomValidator;
pub use error::FieldError;
pub use field::validate_field;
pub use rules::{Pattern, Rule};
pub use step::{check_step, validate_step, StepValidation};
