//! Built-in validation rules.
//!
//! Rules are plain tagged data so whole wizards can be declared in JSON:
//!
//! ```json
//! { "rule": "min_length", "min": 8 }
//! { "rule": "pattern", "pattern": "^[0-9]{5}$", "message": "ZIP must be 5 digits" }
//! ```

use super::FieldError;
use crate::core::{value_text, FieldDescriptor, FormData};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// A compiled regular expression that serializes as its source text.
///
/// Deserializing an invalid expression fails, so a declared wizard can
/// never hold a pattern that does not compile.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Built-in check applied to a non-blank value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// `local@domain.tld` shape
    Email,

    /// At least `min` characters
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// At most `max` characters
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Whole value matches a regular expression
    Pattern { pattern: Pattern, message: String },

    /// Value equals the value of another field, e.g. a password confirmation
    MatchesField { field: String, message: String },
}

impl Rule {
    pub fn min_length(min: usize) -> Self {
        Self::MinLength { min, message: None }
    }

    pub fn max_length(max: usize) -> Self {
        Self::MaxLength { max, message: None }
    }

    /// Compile a pattern rule.
    pub fn pattern(source: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::Pattern {
            pattern: Pattern::new(source)?,
            message: message.into(),
        })
    }

    pub fn matches_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MatchesField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Evaluate the rule against a non-blank value of `field`.
    pub fn check(&self, field: &FieldDescriptor, value: &Value, data: &FormData) -> Option<FieldError> {
        let message = match self {
            Self::Email => (!EMAIL.is_match(&value_text(value)))
                .then(|| "Invalid email format".to_string()),
            Self::MinLength { min, message } => (value_text(value).chars().count() < *min)
                .then(|| {
                    message.clone().unwrap_or_else(|| {
                        format!("{} must be at least {} characters", field.label, min)
                    })
                }),
            Self::MaxLength { max, message } => (value_text(value).chars().count() > *max)
                .then(|| {
                    message.clone().unwrap_or_else(|| {
                        format!("{} must be at most {} characters", field.label, max)
                    })
                }),
            Self::Pattern { pattern, message } => {
                (!pattern.is_match(&value_text(value))).then(|| message.clone())
            }
            Self::MatchesField {
                field: other,
                message,
            } => (data.get(other) != Some(value)).then(|| message.clone()),
        }?;

        Some(FieldError::Invalid {
            field: field.name.clone(),
            message,
        })
    }
}
