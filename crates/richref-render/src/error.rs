//! Error types for reference rendering.

use thiserror::Error;

/// Errors a type renderer (or renderer configuration) can produce.
///
/// The walker never wraps these: a renderer's error reaches the caller
/// exactly as the renderer returned it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The merged record/node fields lack a field the renderer needs.
    #[error("{type_name} reference is missing field '{field}'")]
    MissingField { type_name: String, field: String },

    /// A field is present but cannot be used (wrong shape, not scalar, ...).
    #[error("{type_name} reference has invalid field '{field}': {reason}")]
    InvalidField {
        type_name: String,
        field: String,
        reason: String,
    },

    /// An href template could not be parsed.
    #[error("invalid href template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// Renderer configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// An application-defined renderer failed.
    #[error("renderer for {type_name} failed: {message}")]
    Custom { type_name: String, message: String },
}

impl RenderError {
    /// Create a custom renderer error.
    pub fn custom(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
