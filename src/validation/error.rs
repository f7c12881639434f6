//! Field validation errors.

use thiserror::Error;

/// A failed field check.
///
/// The `Display` form is the message shown next to the field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { field: String, label: String },

    #[error("{message}")]
    Invalid { field: String, message: String },
}

impl FieldError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field, .. } | Self::Invalid { field, .. } => field,
        }
    }
}
