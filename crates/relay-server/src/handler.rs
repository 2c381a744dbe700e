//! Webhook handlers: verify the signature over the raw body, filter for
//! push events, dispatch the sync, translate the outcome.
//!
//! Verification always runs against the exact bytes received — the body is
//! parsed only after the signature and event checks pass.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json, Response};

use relay_events::{is_push, PushEvent, PushPayload};
use relay_signature::SignatureScheme;
use relay_sync::SyncOutcome;

use crate::error::{ServerError, ServerResult};
use crate::response::{HealthResponse, IgnoredResponse, SyncedResponse};
use crate::state::AppState;

/// Per-provider webhook header names.
pub mod headers {
    pub const GITEA_EVENT: &str = "X-Gitea-Event";
    pub const GITEA_SIGNATURE: &str = "X-Gitea-Signature";
    pub const GITHUB_EVENT: &str = "X-GitHub-Event";
    pub const GITHUB_SIGNATURE: &str = "X-Hub-Signature-256";
}

/// Header value as a string; missing or non-UTF-8 headers read as empty,
/// which fails verification (when a secret is set) and never matches "push".
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

/// Gitea→GitHub: push-mirror the branch named by the event.
pub async fn gitea_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Response> {
    let signature = header_str(&headers, headers::GITEA_SIGNATURE);
    if !relay_signature::verify(&body, signature, state.config.secret(), SignatureScheme::RawHex) {
        return Err(ServerError::InvalidSignature);
    }

    let event = header_str(&headers, headers::GITEA_EVENT);
    if !is_push(event) {
        return Ok(Json(IgnoredResponse::new(event)).into_response());
    }

    let push = PushEvent::from(PushPayload::from_bytes(&body)?);
    tracing::info!(
        repository = %push.repository,
        r#ref = %push.ref_name,
        commits = push.commits.len(),
        "received push from gitea"
    );

    match state.push_mirror().sync(&push.branch).await {
        SyncOutcome::Synced => {
            Ok(Json(SyncedResponse::with_branch(push.ref_name, push.branch)).into_response())
        }
        SyncOutcome::Failed { .. } => Err(ServerError::SyncFailed),
    }
}

/// GitHub→Gitea: trigger Gitea's mirror sync for the configured repository.
pub async fn github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Response> {
    let signature = header_str(&headers, headers::GITHUB_SIGNATURE);
    if !relay_signature::verify(
        &body,
        signature,
        state.config.secret(),
        SignatureScheme::PrefixedHex,
    ) {
        return Err(ServerError::InvalidSignature);
    }

    let event = header_str(&headers, headers::GITHUB_EVENT);
    if !is_push(event) {
        return Ok(Json(IgnoredResponse::new(event)).into_response());
    }

    let push = PushEvent::from(PushPayload::from_bytes(&body)?);
    tracing::info!(
        repository = %push.repository,
        r#ref = %push.ref_name,
        "received push from github"
    );

    match state.remote_mirror().sync().await {
        SyncOutcome::Synced => Ok(Json(SyncedResponse::ref_only(push.ref_name)).into_response()),
        SyncOutcome::Failed { .. } => Err(ServerError::SyncFailed),
    }
}

/// Liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
