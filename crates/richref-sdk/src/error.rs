use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("expected exactly one event, found {0}")]
    NoEventFound(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("rich text error: {0}")]
    Json(#[from] richref_json::JsonError),

    #[error("render error: {0}")]
    Render(#[from] richref_render::RenderError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
