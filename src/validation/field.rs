//! Single-field validation.

use super::FieldError;
use crate::core::{is_blank, FieldDescriptor, FormData};
use serde_json::Value;

/// Validate one field's value against its descriptor.
///
/// `value` is the field's current value (`None` when it was never set) and
/// `data` the whole accumulated form, which rules and custom checks may
/// consult.
///
/// - A blank required field fails with `"<label> is required"` and no other
///   check runs.
/// - A blank optional field is always valid.
/// - Otherwise the built-in rules run in order, then the custom check; the
///   first failure is returned.
pub fn validate_field(
    field: &FieldDescriptor,
    value: Option<&Value>,
    data: &FormData,
) -> Option<FieldError> {
    let value = match value {
        Some(value) if !is_blank(Some(value)) => value,
        _ if field.required => {
            return Some(FieldError::Required {
                field: field.name.clone(),
                label: field.label.clone(),
            })
        }
        _ => return None,
    };

    if let Some(error) = field
        .rules
        .iter()
        .find_map(|rule| rule.check(field, value, data))
    {
        return Some(error);
    }

    field
        .validate
        .as_ref()
        .and_then(|custom| custom.check(value, data))
        .map(|message| FieldError::Invalid {
            field: field.name.clone(),
            message,
        })
}
