use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Data loading error: {0}")]
    DataLoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HandlerError>;
