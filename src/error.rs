//! Error types for docblock rendering and field-set loading.
//!
//! Parsing never fails: malformed tag content degrades to partially filled
//! fields. Only render configuration and serialization can error.

use thiserror::Error;

/// Errors surfaced to callers of the library.
#[derive(Error, Debug)]
pub enum DocBlockError {
    /// A render option outside its valid domain
    #[error("invalid configuration for `{option}`: {reason}")]
    InvalidConfiguration {
        option: &'static str,
        reason: String,
    },

    /// Renderer requested by name does not exist
    #[error("unknown format: {0}. Use comment or json")]
    UnknownFormat(String),

    /// JSON (de)serialization of a model or field set failed
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocBlockError {
    pub fn invalid_configuration(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            option,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocBlockError>;
