//! Builder for constructing field descriptors.

use crate::builder::error::BuildError;
use crate::core::{FieldDescriptor, FieldKind, FormData, SelectOption};
use crate::validation::{CustomValidator, Rule};
use serde_json::Value;

/// Builder for constructing fields with a fluent API.
pub struct FieldBuilder {
    field: FieldDescriptor,
    error: Option<BuildError>,
}

impl FieldBuilder {
    /// Create a builder for an optional text field.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: FieldDescriptor::new(name, label, FieldKind::Text),
            error: None,
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.field.kind = kind;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.field.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field.placeholder = Some(placeholder.into());
        self
    }

    /// Append a select option.
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.field.options.push(SelectOption::new(label, value));
        self
    }

    /// Append a built-in rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.field.rules.push(rule);
        self
    }

    /// Append a pattern rule.
    ///
    /// An invalid expression is reported by `build()`.
    pub fn pattern(mut self, source: &str, message: impl Into<String>) -> Self {
        match Rule::pattern(source, message) {
            Ok(rule) => self.field.rules.push(rule),
            Err(source) => {
                if self.error.is_none() {
                    self.error = Some(BuildError::InvalidPattern {
                        field: self.field.name.clone(),
                        source,
                    });
                }
            }
        }
        self
    }

    /// Set the custom check (optional).
    pub fn validate<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value, &FormData) -> Option<String> + Send + Sync + 'static,
    {
        self.field.validate = Some(CustomValidator::new(check));
        self
    }

    /// Build the field.
    pub fn build(self) -> Result<FieldDescriptor, BuildError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.field),
        }
    }
}
