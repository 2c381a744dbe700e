//! Remote-trigger strategy: ask the destination service to run its own
//! mirror sync.
//!
//! The relay moves no bytes in this direction. Gitea repositories configured
//! as pull mirrors re-fetch their upstream when the mirror-sync management
//! endpoint is POSTed, so the relay's whole job is one authenticated
//! request. Success is status 200 exactly; the response body is never read.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::SyncResult;
use crate::types::SyncOutcome;

#[async_trait]
pub trait MirrorTrigger: Send + Sync {
    /// Fire the mirror-sync endpoint once, returning the HTTP status code.
    async fn trigger(&self) -> SyncResult<u16>;
}

/// [`MirrorTrigger`] against Gitea's repository management API.
pub struct HttpMirrorTrigger {
    client: reqwest::Client,
    endpoint: String,
    admin_token: String,
}

impl HttpMirrorTrigger {
    pub fn new(base_url: &str, owner: &str, repo: &str, admin_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/api/v1/repos/{owner}/{repo}/mirror-sync",
                base_url.trim_end_matches('/')
            ),
            admin_token: admin_token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&format!("token {}", self.admin_token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl MirrorTrigger for HttpMirrorTrigger {
    async fn trigger(&self) -> SyncResult<u16> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers())
            .send()
            .await?;
        Ok(response.status().as_u16())
    }
}

/// Mirror-sync dispatch over any [`MirrorTrigger`].
pub struct RemoteMirror {
    trigger: Arc<dyn MirrorTrigger>,
}

impl RemoteMirror {
    pub fn new(trigger: Arc<dyn MirrorTrigger>) -> Self {
        Self { trigger }
    }

    /// Trigger the destination's mirror sync. Success iff the endpoint
    /// answers exactly 200; transport errors and every other status fold
    /// into [`SyncOutcome::Failed`].
    pub async fn sync(&self) -> SyncOutcome {
        match self.trigger.trigger().await {
            Ok(200) => {
                tracing::info!("mirror sync triggered");
                SyncOutcome::Synced
            }
            Ok(status) => {
                tracing::error!(status, "mirror-sync endpoint refused the trigger");
                SyncOutcome::failed(format!("mirror-sync endpoint returned status {status}"))
            }
            Err(err) => {
                tracing::error!(error = %err, "mirror-sync request failed");
                SyncOutcome::failed(err.to_string())
            }
        }
    }
}
