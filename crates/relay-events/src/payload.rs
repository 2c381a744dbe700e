//! Push webhook payload model.
//!
//! Both Gitea and GitHub deliver push payloads with the same fields we care
//! about: the pushed ref, the repository's full name, and the commit list.
//! Everything else in the body is ignored.

use serde::Deserialize;

use crate::error::EventResult;
use crate::refs::branch_from_ref;

/// Raw push webhook body, as delivered by either hosting service.
///
/// Tolerant by construction: every field defaults when absent, matching the
/// permissive reads webhook senders expect.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref", default)]
    pub ref_name: String,
    #[serde(default)]
    pub repository: Option<RepositoryInfo>,
    #[serde(default)]
    pub commits: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default)]
    pub full_name: String,
}

impl PushPayload {
    /// Parse a push payload from the raw request body.
    pub fn from_bytes(body: &[u8]) -> EventResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A push event derived from a [`PushPayload`], ready for dispatch.
#[derive(Clone, Debug)]
pub struct PushEvent {
    /// Full ref path, e.g. `refs/heads/main`.
    pub ref_name: String,
    /// Ref with the `refs/heads/` prefix stripped; tags keep their full path.
    pub branch: String,
    /// Repository full name, for logging only.
    pub repository: String,
    /// Commit descriptors, carried opaquely and never inspected.
    pub commits: Vec<serde_json::Value>,
}

impl From<PushPayload> for PushEvent {
    fn from(payload: PushPayload) -> Self {
        let branch = branch_from_ref(&payload.ref_name).to_string();
        Self {
            ref_name: payload.ref_name,
            branch,
            repository: payload.repository.map(|r| r.full_name).unwrap_or_default(),
            commits: payload.commits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_payload() {
        let body = serde_json::json!({
            "ref": "refs/heads/main",
            "repository": { "full_name": "maple/mirror-relay" },
            "commits": [{ "id": "abc123" }, { "id": "def456" }],
            "pusher": { "name": "alice" },
        });
        let payload = PushPayload::from_bytes(body.to_string().as_bytes()).unwrap();
        assert_eq!(payload.ref_name, "refs/heads/main");
        assert_eq!(payload.commits.len(), 2);

        let event = PushEvent::from(payload);
        assert_eq!(event.branch, "main");
        assert_eq!(event.repository, "maple/mirror-relay");
    }

    #[test]
    fn missing_fields_default() {
        let payload = PushPayload::from_bytes(b"{}").unwrap();
        assert_eq!(payload.ref_name, "");
        assert!(payload.repository.is_none());
        assert!(payload.commits.is_empty());

        let event = PushEvent::from(payload);
        assert_eq!(event.branch, "");
        assert_eq!(event.repository, "");
    }

    #[test]
    fn tag_ref_keeps_full_path() {
        let body = serde_json::json!({ "ref": "refs/tags/v1" });
        let event = PushEvent::from(PushPayload::from_bytes(body.to_string().as_bytes()).unwrap());
        assert_eq!(event.ref_name, "refs/tags/v1");
        assert_eq!(event.branch, "refs/tags/v1");
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(PushPayload::from_bytes(b"not json").is_err());
    }
}
