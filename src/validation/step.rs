//! Step validation using Validation to accumulate ALL field failures.

use super::{validate_field, FieldError};
use crate::core::{FieldErrors, FormData, StepDescriptor};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking every field of a step.
pub type StepValidation = Validation<(), NonEmptyVec<FieldError>>;

/// Check every field of `step`, accumulating all failures.
///
/// Pure: the result depends only on the step and the data.
pub fn check_step(step: &StepDescriptor, data: &FormData) -> StepValidation {
    let checks: Vec<StepValidation> = step
        .fields
        .iter()
        .map(
            |field| match validate_field(field, data.get(&field.name), data) {
                Some(error) => Validation::fail(error),
                None => Validation::success(()),
            },
        )
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Field errors of `step`, keyed by field name. Empty means valid.
pub fn validate_step(step: &StepDescriptor, data: &FormData) -> FieldErrors {
    match check_step(step, data) {
        Validation::Success(_) => FieldErrors::new(),
        Validation::Failure(errors) => errors
            .iter()
            .map(|error| (error.field().to_string(), error.to_string()))
            .collect(),
    }
}
