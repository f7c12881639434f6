//! Declarative wizard configuration.
//!
//! A whole wizard (steps, fields, built-in rules, initial data and options)
//! can be described in JSON and loaded here. Custom validator closures and
//! the submit handler cannot be expressed in JSON; they are attached with
//! [`WizardBuilder`](crate::builder::WizardBuilder).
//!
//! # Example
//!
//! ```rust
//! use stepform::config::WizardConfig;
//!
//! let config = WizardConfig::from_json(r#"{
//!     "steps": [
//!         {
//!             "id": "email",
//!             "title": "Welcome back",
//!             "fields": [
//!                 { "name": "email", "label": "Email", "kind": "email",
//!                   "required": true, "rules": [{ "rule": "email" }] }
//!             ]
//!         }
//!     ],
//!     "options": { "submit_label": "Sign in" }
//! }"#).unwrap();
//!
//! assert_eq!(config.steps.len(), 1);
//! assert_eq!(config.options.submit_label, "Sign in");
//! ```

use crate::builder::validate_steps;
use crate::core::{FormData, StepDescriptor};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Label of the primary action on the last step when none is configured.
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

fn default_submit_label() -> String {
    DEFAULT_SUBMIT_LABEL.to_string()
}

/// Presentation-independent knobs of a wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardOptions {
    /// Primary action label shown on the last step
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            submit_label: default_submit_label(),
        }
    }
}

/// Serializable description of a wizard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Steps in navigation order, at least one
    pub steps: Vec<StepDescriptor>,

    /// Answers the wizard starts with
    #[serde(default)]
    pub initial_data: FormData,

    #[serde(default)]
    pub options: WizardOptions,
}

impl WizardConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert and validate an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the structural rules every wizard must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_steps(&self.steps)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;
    use crate::validation::Rule;
    use serde_json::json;

    fn register_json() -> serde_json::Value {
        json!({
            "steps": [
                {
                    "id": "info",
                    "title": "Create your account",
                    "description": "Enter your details to get started",
                    "fields": [
                        { "name": "email", "label": "Email", "type": "email",
                          "required": true, "rules": [{ "rule": "email" }] },
                        { "name": "full_name", "label": "Full Name", "required": true,
                          "rules": [{ "rule": "min_length", "min": 2,
                                      "message": "Name must be at least 2 characters" }] }
                    ]
                },
                {
                    "id": "password",
                    "title": "Choose a password",
                    "fields": [
                        { "name": "password", "label": "Password", "type": "password",
                          "required": true, "rules": [{ "rule": "min_length", "min": 8 }] },
                        { "name": "confirmPassword", "label": "Confirm Password",
                          "type": "password", "required": true,
                          "rules": [{ "rule": "matches_field", "field": "password",
                                      "message": "Passwords do not match" }] }
                    ]
                }
            ],
            "initial_data": { "email": "prefilled@example.com" }
        })
    }

    #[test]
    fn parses_full_document() {
        let config = WizardConfig::from_value(register_json()).unwrap();

        assert_eq!(config.steps.len(), 2);
        assert_eq!(config.steps[1].fields[1].rules[0], Rule::matches_field("password", "Passwords do not match"));
        assert_eq!(config.initial_data["email"], json!("prefilled@example.com"));
        assert_eq!(config.options, WizardOptions::default());
        assert_eq!(config.options.submit_label, "Submit");
    }

    #[test]
    fn rejects_malformed_json() {
        let result = WizardConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_empty_wizard() {
        let result = WizardConfig::from_json(r#"{ "steps": [] }"#);
        assert!(matches!(result, Err(ConfigError::Build(BuildError::NoSteps))));
    }

    #[test]
    fn rejects_duplicate_fields_across_steps() {
        let mut doc = register_json();
        doc["steps"][1]["fields"][0]["name"] = json!("email");

        let result = WizardConfig::from_value(doc);
        assert!(matches!(
            result,
            Err(ConfigError::Build(BuildError::DuplicateFieldName { .. }))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let config = WizardConfig::from_value(register_json()).unwrap();
        let text = config.to_json().unwrap();
        let reparsed = WizardConfig::from_json(&text).unwrap();

        assert_eq!(reparsed.steps.len(), config.steps.len());
        assert_eq!(reparsed.steps[0].fields[1].rules, config.steps[0].fields[1].rules);
        assert_eq!(reparsed.initial_data, config.initial_data);
    }
}
