//! Wizard controller: the stateful shell around the pure validation core.
//!
//! The controller owns a wizard's descriptors and its `WizardState`, and is
//! the only place that state changes. Navigation is synchronous; the single
//! suspension point is the terminal submission, which is handed to a
//! caller-supplied [`SubmitHandler`].
//!
//! # Key Concepts
//!
//! - **Gate**: forward moves validate the current step first
//! - **Single flight**: at most one submission is in flight per wizard
//! - **Two-phase submit**: `request_advance()` + `finish_submit()` for drivers
//!   that run the submission themselves; `advance()` does both

mod machine;
mod outcome;
mod submit;

pub use machine::{WizardController, WizardSnapshot};
pub use outcome::{AdvanceRequest, Navigation, PrimaryAction};
pub use submit::{Submission, SubmitError, SubmitFuture, SubmitHandler};
