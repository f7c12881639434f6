//! Field descriptors.

use crate::validation::{CustomValidator, Rule};
use serde::{Deserialize, Serialize};

/// Input kind of a field.
///
/// The engine treats every kind the same way; the kind is carried so a
/// renderer can pick the matching widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Date,
    Select,
    Textarea,
    Checkbox,
}

impl FieldKind {
    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
        }
    }
}

/// One choice of a select field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A single named input of a step.
///
/// Descriptors are plain data and deserialize from JSON, except for the
/// custom validator which can only be attached from Rust code.
///
/// # Example
///
/// ```rust
/// use stepform::core::{FieldDescriptor, FieldKind};
/// use stepform::validation::Rule;
///
/// let mut email = FieldDescriptor::new("email", "Email", FieldKind::Email);
/// email.required = true;
/// email.rules.push(Rule::Email);
///
/// assert!(email.has_checks());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key of the field in the accumulated data, unique across the wizard
    pub name: String,
    /// Human label, also used in generated messages
    pub label: String,
    #[serde(default, alias = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Built-in rules, evaluated in order after the required check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    /// Custom check, evaluated after the built-in rules
    #[serde(skip)]
    pub validate: Option<CustomValidator>,
}

impl FieldDescriptor {
    /// Create an optional field with no rules.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            options: Vec::new(),
            rules: Vec::new(),
            validate: None,
        }
    }

    /// Whether validating this field can ever produce an error.
    pub fn has_checks(&self) -> bool {
        self.required || !self.rules.is_empty() || self.validate.is_some()
    }
}
