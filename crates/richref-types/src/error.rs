use thiserror::Error;

/// Errors produced by type construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("reference record has an empty path")]
    EmptyPath,

    #[error("reference record {path} has an empty type name")]
    EmptyTypeName { path: String },
}
