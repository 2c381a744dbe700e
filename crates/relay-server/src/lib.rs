//! HTTP listener for the mirror relay.
//!
//! One axum server exposes both relay directions plus a liveness probe:
//!
//! - `POST /webhook/gitea` — Gitea push → branch push-mirrored to GitHub
//! - `POST /webhook/github` — GitHub push → Gitea mirror-sync triggered
//! - `GET /health` — unconditional `{"status":"healthy"}`
//!
//! Each webhook request is verified against the direction's signature
//! scheme before anything else runs, filtered down to push events, then
//! dispatched. All state is request-scoped; the config is immutable after
//! startup and injected through [`AppState`].

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use config::{GiteaConfig, GithubConfig, RelayConfig};
pub use error::{ServerError, ServerResult};
pub use response::{HealthResponse, IgnoredResponse, SyncedResponse};
pub use server::RelayServer;
pub use state::AppState;
