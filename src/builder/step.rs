//! Builder for constructing steps.

use crate::builder::error::BuildError;
use crate::builder::field::FieldBuilder;
use crate::core::{FieldDescriptor, StepDescriptor};

/// Builder for constructing steps with a fluent API.
pub struct StepBuilder {
    step: StepDescriptor,
}

impl StepBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            step: StepDescriptor::new(id, title),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.step.description = Some(description.into());
        self
    }

    /// Add a field using a builder.
    /// Returns an error if the builder fails validation.
    pub fn field(mut self, builder: FieldBuilder) -> Result<Self, BuildError> {
        let field = builder.build()?;
        self.step.fields.push(field);
        Ok(self)
    }

    /// Add a pre-built field.
    pub fn add_field(mut self, field: FieldDescriptor) -> Self {
        self.step.fields.push(field);
        self
    }

    pub fn build(self) -> StepDescriptor {
        self.step
    }
}
