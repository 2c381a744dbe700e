use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with the webhook and health endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook/gitea", post(handler::gitea_webhook))
        .route("/webhook/github", post(handler::github_webhook))
        .route("/health", get(handler::health_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Boundary catch-all: a panic anywhere in a handler answers the request
/// with a 500 carrying the panic's message instead of dropping the
/// connection.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected error".to_string()
    };
    tracing::error!(message = %message, "webhook handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
