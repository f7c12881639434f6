//! Results of navigation operations.

use super::submit::Submission;
use crate::core::FieldErrors;
use serde::{Deserialize, Serialize};

/// Result of a navigation operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Navigation {
    /// The current step changed
    Moved { from: usize, to: usize },

    /// The validation gate refused a forward move
    Blocked(FieldErrors),

    /// The last step validated and the submit handler succeeded
    Submitted,

    /// Nothing happened: disallowed target, already on the first step,
    /// inert click, or a submission already in flight
    Ignored,
}

impl Navigation {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// First half of an advance: either done, or a submission to run.
#[derive(Debug)]
pub enum AdvanceRequest {
    Done(Navigation),
    Submit(Submission),
}

/// What the primary button of the current step does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    /// Go to the next step
    Next,
    /// Submit, with the configured label
    Submit(String),
    /// A submission is in flight; the action is disabled
    Submitting,
}
