//! Build errors for wizard, step and field builders.

use thiserror::Error;

/// Configuration errors detected while constructing a wizard.
///
/// These are programmer errors: a wizard that fails to build would otherwise
/// show up as a confusing runtime state.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No steps defined. Add at least one step")]
    NoSteps,

    #[error("Submit handler not specified. Call .on_submit(handler) before .build()")]
    MissingSubmitHandler,

    #[error("Step #{index} has an empty id")]
    EmptyStepId { index: usize },

    #[error("Duplicate step id '{id}'")]
    DuplicateStepId { id: String },

    #[error("Step '{step}' has a field with an empty name")]
    EmptyFieldName { step: String },

    #[error("Field '{field}' is declared in step '{first}' and again in step '{second}'")]
    DuplicateFieldName {
        field: String,
        first: String,
        second: String,
    },

    #[error("Select field '{field}' has no options")]
    SelectWithoutOptions { field: String },

    #[error("Field '{field}' must match '{target}', which is not a field of this wizard")]
    UnknownMatchTarget { field: String, target: String },

    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}
