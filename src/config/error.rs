//! Configuration error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a wizard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema
    #[error("Failed to parse wizard config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but describes an invalid wizard
    #[error(transparent)]
    Build(#[from] BuildError),
}
