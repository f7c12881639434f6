//! Wizard controller that gates navigation and runs the terminal submission.

use super::outcome::{AdvanceRequest, Navigation, PrimaryAction};
use super::submit::{Submission, SubmitError, SubmitHandler};
use crate::builder::{BuildError, WizardBuilder};
use crate::config::{WizardConfig, WizardOptions};
use crate::core::{
    FieldErrors, FormData, NavigationHistory, StepDescriptor, StepTransition, Trigger, WizardState,
};
use crate::validation::{check_step, validate_step};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Read-only view of a wizard for a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub step_index: usize,
    pub step_id: String,
    pub data: FormData,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    /// `(step_index + 1) / step_count`, in `(0, 1]`
    pub progress: f64,
    pub is_last_step: bool,
    pub primary_action: PrimaryAction,
}

/// Resets `submitting` when dropped, so a failing, panicking or dropped
/// submit future never leaves the wizard stuck.
struct SubmitRelease<'a>(&'a mut bool);

impl Drop for SubmitRelease<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// State machine of a multi-step form.
///
/// Built with [`WizardBuilder`](crate::builder::WizardBuilder), which
/// guarantees at least one step and wizard-wide unique field names.
pub struct WizardController {
    id: Uuid,
    steps: Vec<StepDescriptor>,
    options: WizardOptions,
    handler: Arc<dyn SubmitHandler>,
    state: WizardState,
    history: NavigationHistory,
    /// Lease of the outstanding `Submission` ticket, dead once it is dropped.
    ticket: Weak<()>,
}

impl WizardController {
    /// Assemble a controller from already validated parts.
    pub(crate) fn new(
        steps: Vec<StepDescriptor>,
        initial_data: FormData,
        options: WizardOptions,
        handler: Arc<dyn SubmitHandler>,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(wizard = %id, steps = steps.len(), seeded = initial_data.len(), "Wizard created");
        Self {
            id,
            steps,
            options,
            handler,
            state: WizardState::new(initial_data),
            history: NavigationHistory::new(),
            ticket: Weak::new(),
        }
    }

    /// Build a controller from a declarative configuration.
    ///
    /// Shorthand for `WizardBuilder::from_config(config).on_submit(handler).build()`.
    pub fn from_config<H>(config: WizardConfig, handler: H) -> Result<Self, BuildError>
    where
        H: SubmitHandler + 'static,
    {
        WizardBuilder::from_config(config).on_submit(handler).build()
    }

    /// Identifier of this instance, used in log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.state.step_index]
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn is_last_step(&self) -> bool {
        self.state.step_index + 1 == self.steps.len()
    }

    /// Fraction of the wizard reached, counting the current step.
    pub fn progress(&self) -> f64 {
        (self.state.step_index + 1) as f64 / self.steps.len() as f64
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.in_flight() {
            PrimaryAction::Submitting
        } else if self.is_last_step() {
            PrimaryAction::Submit(self.options.submit_label.clone())
        } else {
            PrimaryAction::Next
        }
    }

    /// Owned view of everything a renderer needs.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step_index: self.state.step_index,
            step_id: self.current_step().id.clone(),
            data: self.state.data.clone(),
            field_errors: self.state.field_errors.clone(),
            submitting: self.in_flight(),
            progress: self.progress(),
            is_last_step: self.is_last_step(),
            primary_action: self.primary_action(),
        }
    }

    /// Store a value and clear that field's error. Never validates.
    ///
    /// The field does not need to belong to the current step.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.reclaim_abandoned();
        let name = name.into();
        if !self.declares(&name) {
            debug!(wizard = %self.id, field = %name, "Value set for undeclared field");
        }
        let cleared = self.state.set_field(name, value.into());
        if cleared {
            debug!(wizard = %self.id, "Field error cleared");
        }
    }

    /// Validate a step and show its errors.
    ///
    /// Replaces `field_errors` with the step's errors and returns whether the
    /// step is valid. An out-of-range index is invalid and leaves the errors
    /// untouched.
    pub fn validate_step(&mut self, index: usize) -> bool {
        let Some(step) = self.steps.get(index) else {
            warn!(wizard = %self.id, index, "Validation requested for unknown step");
            return false;
        };
        self.state.field_errors = validate_step(step, &self.state.data);
        self.state.field_errors.is_empty()
    }

    /// Gate and move forward, or dispatch the submission on the last step.
    ///
    /// Does not run the submit handler: a `Submit` request must be completed
    /// with [`finish_submit`](Self::finish_submit). While that submission is
    /// pending, further requests are ignored.
    pub fn request_advance(&mut self) -> AdvanceRequest {
        self.reclaim_abandoned();
        if self.state.submitting {
            warn!(wizard = %self.id, "Advance ignored: submission in flight");
            return AdvanceRequest::Done(Navigation::Ignored);
        }

        let index = self.state.step_index;
        if !self.validate_step(index) {
            debug!(
                wizard = %self.id,
                step = %self.steps[index].id,
                errors = self.state.field_errors.len(),
                "Advance blocked by validation"
            );
            return AdvanceRequest::Done(Navigation::Blocked(self.state.field_errors.clone()));
        }

        if !self.is_last_step() {
            return AdvanceRequest::Done(self.move_to(index + 1, Trigger::Advance));
        }

        let lease = Arc::new(());
        self.ticket = Arc::downgrade(&lease);
        self.state.submitting = true;
        self.state.submit_attempts += 1;
        info!(wizard = %self.id, attempt = self.state.submit_attempts, "Submitting");
        AdvanceRequest::Submit(Submission {
            attempt: self.state.submit_attempts,
            data: self.state.data.clone(),
            lease,
        })
    }

    /// Complete a submission started by `request_advance()`.
    ///
    /// Clears `submitting`. The handler's error is returned unchanged; the
    /// step index and data are kept so the user can retry. A ticket issued
    /// by another wizard is ignored and its outcome discarded.
    pub fn finish_submit(
        &mut self,
        submission: Submission,
        outcome: Result<(), SubmitError>,
    ) -> Result<Navigation, SubmitError> {
        if !self.owns(&submission) {
            warn!(wizard = %self.id, attempt = submission.attempt, "Foreign submission ignored");
            return Ok(Navigation::Ignored);
        }
        self.release();

        match outcome {
            Ok(()) => {
                info!(wizard = %self.id, attempt = submission.attempt, "Submission succeeded");
                Ok(Navigation::Submitted)
            }
            Err(error) => {
                warn!(wizard = %self.id, attempt = submission.attempt, %error, "Submission failed");
                Err(error)
            }
        }
    }

    /// Give up on a submission started by `request_advance()` without an outcome.
    ///
    /// Returns `false` for a ticket this wizard did not issue. Dropping the
    /// ticket has the same effect on the next navigation call.
    pub fn abort_submit(&mut self, submission: Submission) -> bool {
        if !self.owns(&submission) {
            warn!(wizard = %self.id, attempt = submission.attempt, "Foreign submission ignored");
            return false;
        }
        self.release();
        warn!(wizard = %self.id, attempt = submission.attempt, "Submission aborted");
        true
    }

    /// Validate the current step and move forward, submitting on the last step.
    ///
    /// A no-op while a submission is in flight. Handler failures are returned
    /// as-is; `submitting` is reset whatever happens, including when this
    /// future is dropped before completion.
    pub async fn advance(&mut self) -> Result<Navigation, SubmitError> {
        let submission = match self.request_advance() {
            AdvanceRequest::Done(navigation) => return Ok(navigation),
            AdvanceRequest::Submit(submission) => submission,
        };

        let handler = Arc::clone(&self.handler);
        let outcome = {
            let _release = SubmitRelease(&mut self.state.submitting);
            handler.submit(submission.data.clone()).await
        };

        self.finish_submit(submission, outcome)
    }

    /// Move one step back. Never validates.
    pub fn retreat(&mut self) -> Navigation {
        match self.state.step_index {
            0 => Navigation::Ignored,
            index => self.move_to(index - 1, Trigger::Retreat),
        }
    }

    /// Jump to a step.
    ///
    /// Any earlier step is reachable unconditionally; the next step only
    /// through the validation gate. Every other target is ignored, as is any
    /// jump while a submission is in flight.
    pub fn jump_to(&mut self, target: usize) -> Navigation {
        self.reclaim_abandoned();
        let index = self.state.step_index;
        if self.state.submitting {
            return Navigation::Ignored;
        }

        if target < index {
            self.move_to(target, Trigger::Jump)
        } else if target == index + 1 && target < self.steps.len() {
            if self.validate_step(index) {
                self.move_to(target, Trigger::Jump)
            } else {
                Navigation::Blocked(self.state.field_errors.clone())
            }
        } else {
            debug!(wizard = %self.id, from = index, target, "Jump rejected");
            Navigation::Ignored
        }
    }

    /// Whether the step indicator at `index` reacts to clicks.
    ///
    /// Completed steps always do; the current step only while it validates.
    /// Evaluating this never changes the displayed errors.
    pub fn is_step_interactive(&self, index: usize) -> bool {
        let current = self.state.step_index;
        index < current
            || (index == current && check_step(&self.steps[current], &self.state.data).is_success())
    }

    /// Handle a click on the step indicator at `index`.
    ///
    /// Completed steps are revisited; clicking the valid current step
    /// advances (and submits on the last step). Other clicks are inert.
    pub async fn click_step(&mut self, index: usize) -> Result<Navigation, SubmitError> {
        self.reclaim_abandoned();
        if self.state.submitting || !self.is_step_interactive(index) {
            return Ok(Navigation::Ignored);
        }

        if index < self.state.step_index {
            Ok(self.jump_to(index))
        } else {
            self.advance().await
        }
    }

    fn move_to(&mut self, to: usize, trigger: Trigger) -> Navigation {
        let from = self.state.step_index;
        self.state.step_index = to;
        self.history.push(StepTransition {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        });
        debug!(wizard = %self.id, from, to, ?trigger, step = %self.steps[to].id, "Step changed");
        Navigation::Moved { from, to }
    }

    /// Whether a submission is pending with its ticket still held.
    fn in_flight(&self) -> bool {
        self.state.submitting && self.ticket.strong_count() > 0
    }

    fn owns(&self, submission: &Submission) -> bool {
        self.ticket
            .upgrade()
            .is_some_and(|lease| Arc::ptr_eq(&lease, &submission.lease))
    }

    fn release(&mut self) {
        self.state.submitting = false;
        self.ticket = Weak::new();
    }

    /// Clear `submitting` left behind by a dropped ticket.
    fn reclaim_abandoned(&mut self) {
        if self.state.submitting && self.ticket.strong_count() == 0 {
            warn!(
                wizard = %self.id,
                attempt = self.state.submit_attempts,
                "Releasing abandoned submission"
            );
            self.state.submitting = false;
        }
    }

    fn declares(&self, name: &str) -> bool {
        self.steps.iter().any(|step| step.field(name).is_some())
    }
}
