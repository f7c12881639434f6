//! Caller-supplied field checks.

use crate::core::FormData;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type CheckFn = dyn Fn(&Value, &FormData) -> Option<String> + Send + Sync;

/// Custom check attached to a field.
///
/// The function receives the field's value and the whole accumulated form,
/// and returns the message to display when the value is rejected. It is only
/// called for non-blank values, and must be deterministic: it runs whenever
/// a step is validated, including for step-indicator affordances.
///
/// # Example
///
/// ```rust
/// use stepform::core::FormData;
/// use stepform::validation::CustomValidator;
/// use serde_json::json;
///
/// let no_admin = CustomValidator::new(|value, _data| {
///     (value == "admin").then(|| "Username is reserved".to_string())
/// });
///
/// let data = FormData::new();
/// assert_eq!(no_admin.check(&json!("admin"), &data).as_deref(), Some("Username is reserved"));
/// assert!(no_admin.check(&json!("alice"), &data).is_none());
/// ```
#[derive(Clone)]
pub struct CustomValidator {
    check: Arc<CheckFn>,
}

impl CustomValidator {
    /// Wrap a check function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &FormData) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Run the check.
    pub fn check(&self, value: &Value, data: &FormData) -> Option<String> {
        (self.check)(value, data)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}
