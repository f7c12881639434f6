//! Builder API for ergonomic wizard construction.
//!
//! This module provides fluent builders for fields, steps and whole wizards,
//! plus shortcuts for the fields most sign-up and sign-in forms need.
//! Building fails fast on configuration errors instead of producing a wizard
//! that misbehaves at runtime.

pub mod error;
pub mod field;
pub mod step;
pub mod wizard;

pub use error::BuildError;
pub use field::FieldBuilder;
pub use step::StepBuilder;
pub use wizard::{validate_steps, WizardBuilder};

use crate::core::FieldKind;
use crate::validation::Rule;

/// A required email field with format validation.
///
/// # Example
///
/// ```
/// use stepform::builder::email_field;
///
/// let field = email_field("email", "Email").build().unwrap();
/// assert!(field.required);
/// ```
pub fn email_field(name: impl Into<String>, label: impl Into<String>) -> FieldBuilder {
    FieldBuilder::new(name, label)
        .kind(FieldKind::Email)
        .required()
        .rule(Rule::Email)
}

/// A required password field with a minimum length.
///
/// # Example
///
/// ```
/// use stepform::builder::password_field;
///
/// let field = password_field("password", "Password", 8).build().unwrap();
/// assert_eq!(field.rules.len(), 1);
/// ```
pub fn password_field(
    name: impl Into<String>,
    label: impl Into<String>,
    min_length: usize,
) -> FieldBuilder {
    FieldBuilder::new(name, label)
        .kind(FieldKind::Password)
        .required()
        .rule(Rule::min_length(min_length))
}
