use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("malformed webhook payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type EventResult<T> = Result<T, EventError>;
