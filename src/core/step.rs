//! Step descriptors.

use super::field::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// One page of the wizard.
///
/// The order of steps in a wizard defines both display order and navigation
/// order; the order of `fields` defines display order within the page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Identifier, unique within the wizard
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl StepDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Look up a field of this step by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of this step's fields in display order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
