//! Form data values and the emptiness rule used by required fields.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Accumulated answers keyed by field name.
///
/// Values are plain JSON so checkbox booleans, select strings and free text
/// share one map across every step of the wizard.
pub type FormData = BTreeMap<String, Value>;

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Returns true when a value counts as "not provided".
///
/// Missing keys, `null`, `false` and the empty string are blank. Numbers
/// (zero included), arrays and objects never are.
///
/// # Example
///
/// ```rust
/// use stepform::core::is_blank;
/// use serde_json::json;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some(&json!(""))));
/// assert!(is_blank(Some(&json!(false))));
/// assert!(!is_blank(Some(&json!(0))));
/// assert!(!is_blank(Some(&json!("a"))));
/// ```
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Text form of a value as seen by length and pattern rules.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
