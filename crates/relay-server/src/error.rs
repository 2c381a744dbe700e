use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("sync failed")]
    SyncFailed,

    #[error("malformed webhook payload: {0}")]
    Payload(#[from] relay_events::EventError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Error-to-response mapping: a signature mismatch is 401 with the fixed
/// message; everything else is 500 carrying the error's own text. Sync
/// failures deliberately surface only the generic `sync failed` — the
/// detail stays in the server logs.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidSignature => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_error_is_401() {
        let response = ServerError::InvalidSignature.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn sync_failure_is_500() {
        let response = ServerError::SyncFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(ServerError::InvalidSignature.to_string(), "Invalid signature");
        assert_eq!(ServerError::SyncFailed.to_string(), "sync failed");
    }
}
