//! Mutable wizard state.
//!
//! `WizardState` is the plain container behind a controller. It is readable
//! by anyone holding a reference, but its mutators are crate-private so the
//! navigation and validation rules of the controller cannot be bypassed.

use super::value::{FieldErrors, FormData};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State of one wizard instance.
///
/// # Invariants
///
/// - `step_index` is always a valid index into the wizard's steps
/// - `data` only grows or changes through `set_field`; it is never reset
///   when moving between steps
/// - `field_errors` describes the most recently validated step
/// - `submitting` is true only while a submission is in flight
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub(crate) step_index: usize,
    pub(crate) data: FormData,
    pub(crate) field_errors: FieldErrors,
    pub(crate) submitting: bool,
    pub(crate) submit_attempts: usize,
}

impl WizardState {
    /// Fresh state on the first step, seeded with `initial` data.
    pub fn new(initial: FormData) -> Self {
        Self {
            data: initial,
            ..Self::default()
        }
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// All accumulated answers.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Current value of a field, if one was ever set.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Error currently shown for a field.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Number of submissions dispatched so far.
    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts
    }

    /// Store a value and drop the error of that field.
    ///
    /// Returns true when an error was cleared.
    pub(crate) fn set_field(&mut self, name: String, value: Value) -> bool {
        let cleared = self.field_errors.remove(&name).is_some();
        self.data.insert(name, value);
        cleared
    }
}
