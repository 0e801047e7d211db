use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Feature Error: {0}")]
    Feature(String),

    /// The feature does not handle this action; dispatch moves on to the next one.
    #[error("Unsupported action type")]
    Unsupported,

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
