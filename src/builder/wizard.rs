//! Builder for constructing wizard controllers.

use crate::builder::error::BuildError;
use crate::builder::step::StepBuilder;
use crate::config::{WizardConfig, WizardOptions};
use crate::controller::{SubmitHandler, WizardController};
use crate::core::{FieldKind, FormData, StepDescriptor};
use crate::validation::Rule;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Check the structural rules every wizard must satisfy.
///
/// - at least one step
/// - non-empty step ids, unique within the wizard
/// - non-empty field names, unique across ALL steps (they share one data map)
/// - select fields carry options
/// - `matches_field` rules target a declared field
pub fn validate_steps(steps: &[StepDescriptor]) -> Result<(), BuildError> {
    if steps.is_empty() {
        return Err(BuildError::NoSteps);
    }

    let mut step_ids = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for (index, step) in steps.iter().enumerate() {
        if step.id.is_empty() {
            return Err(BuildError::EmptyStepId { index });
        }
        if !step_ids.insert(step.id.as_str()) {
            return Err(BuildError::DuplicateStepId {
                id: step.id.clone(),
            });
        }

        for field in &step.fields {
            if field.name.is_empty() {
                return Err(BuildError::EmptyFieldName {
                    step: step.id.clone(),
                });
            }
            if let Some(first) = owners.insert(field.name.as_str(), step.id.as_str()) {
                return Err(BuildError::DuplicateFieldName {
                    field: field.name.clone(),
                    first: first.to_string(),
                    second: step.id.clone(),
                });
            }
            if field.kind == FieldKind::Select && field.options.is_empty() {
                return Err(BuildError::SelectWithoutOptions {
                    field: field.name.clone(),
                });
            }
        }
    }

    for field in steps.iter().flat_map(|step| &step.fields) {
        for rule in &field.rules {
            if let Rule::MatchesField { field: target, .. } = rule {
                if !owners.contains_key(target.as_str()) {
                    return Err(BuildError::UnknownMatchTarget {
                        field: field.name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Builder for constructing wizards with a fluent API.
///
/// # Example
///
/// ```rust
/// use stepform::builder::{FieldBuilder, StepBuilder, WizardBuilder};
/// use stepform::controller::SubmitError;
/// use stepform::core::FormData;
///
/// async fn sign_in(_data: FormData) -> Result<(), SubmitError> {
///     Ok(())
/// }
///
/// let wizard = WizardBuilder::new()
///     .step(StepBuilder::new("email", "Welcome back")
///         .field(FieldBuilder::new("email", "Email").required())?)
///     .on_submit(sign_in)
///     .build()?;
///
/// assert_eq!(wizard.step_count(), 1);
/// # Ok::<(), stepform::builder::BuildError>(())
/// ```
pub struct WizardBuilder {
    steps: Vec<StepDescriptor>,
    initial_data: FormData,
    options: WizardOptions,
    handler: Option<Arc<dyn SubmitHandler>>,
}

impl WizardBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            initial_data: FormData::new(),
            options: WizardOptions::default(),
            handler: None,
        }
    }

    /// Start from a declarative configuration.
    pub fn from_config(config: WizardConfig) -> Self {
        Self {
            steps: config.steps,
            initial_data: config.initial_data,
            options: config.options,
            handler: None,
        }
    }

    /// Add a step using a builder.
    pub fn step(mut self, builder: StepBuilder) -> Self {
        self.steps.push(builder.build());
        self
    }

    /// Add a pre-built step.
    pub fn add_step(mut self, step: StepDescriptor) -> Self {
        self.steps.push(step);
        self
    }

    /// Add multiple steps at once.
    pub fn steps(mut self, steps: Vec<StepDescriptor>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Replace the data the wizard starts with.
    pub fn initial_data(mut self, data: FormData) -> Self {
        self.initial_data = data;
        self
    }

    /// Seed a single value.
    pub fn initial_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.initial_data.insert(name.into(), value.into());
        self
    }

    pub fn options(mut self, options: WizardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.options.submit_label = label.into();
        self
    }

    /// Set the submit handler (required).
    pub fn on_submit<H>(mut self, handler: H) -> Self
    where
        H: SubmitHandler + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Build the wizard.
    /// Returns an error if the configuration is invalid or incomplete.
    pub fn build(self) -> Result<WizardController, BuildError> {
        validate_steps(&self.steps)?;
        let handler = self.handler.ok_or(BuildError::MissingSubmitHandler)?;

        let unknown = self
            .initial_data
            .keys()
            .filter(|name| !self.steps.iter().any(|s| s.field(name).is_some()))
            .count();
        if unknown > 0 {
            debug!(unknown, "Initial data contains undeclared fields");
        }

        Ok(WizardController::new(
            self.steps,
            self.initial_data,
            self.options,
            handler,
        ))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
