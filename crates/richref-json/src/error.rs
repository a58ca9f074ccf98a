//! Error types for rich-text decoding.

use thiserror::Error;

/// Errors that can occur while decoding rich text or references.
///
/// `at` is a JSON pointer to the offending node (e.g. `/0/content/2`).
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A node has the wrong shape.
    #[error("invalid node at {at}: {reason}")]
    InvalidNode { at: String, reason: String },

    /// A node lacks a required field.
    #[error("node at {at} is missing field '{field}'")]
    MissingField { at: String, field: String },

    /// A reference record could not be decoded.
    #[error("invalid reference record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Convenience alias for decoding results.
pub type JsonResult<T> = Result<T, JsonError>;
