//! Response envelopes for the webhook and health endpoints.

use serde::Serialize;

/// `200 {"status":"synced",...}`. The branch field is present only for the
/// git push-mirror direction; the remote-trigger direction reports the ref
/// alone.
#[derive(Clone, Debug, Serialize)]
pub struct SyncedResponse {
    pub status: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl SyncedResponse {
    pub fn with_branch(ref_name: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            status: "synced".into(),
            ref_name: ref_name.into(),
            branch: Some(branch.into()),
        }
    }

    pub fn ref_only(ref_name: impl Into<String>) -> Self {
        Self {
            status: "synced".into(),
            ref_name: ref_name.into(),
            branch: None,
        }
    }
}

/// `200 {"status":"ignored","event":...}` — a non-push event is a
/// successful no-op, not an error.
#[derive(Clone, Debug, Serialize)]
pub struct IgnoredResponse {
    pub status: String,
    pub event: String,
}

impl IgnoredResponse {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            status: "ignored".into(),
            event: event.into(),
        }
    }
}

/// `200 {"status":"healthy"}`, unconditionally.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".into(),
        }
    }
}
