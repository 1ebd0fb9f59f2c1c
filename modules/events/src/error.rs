// Events module errors

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Internal,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("event sink unavailable: {0}")]
    SinkUnavailable(String),
}

impl EventError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventError::Serialization(_) | EventError::SinkUnavailable(_) => ErrorKind::Internal,
        }
    }
}
