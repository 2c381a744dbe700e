use tokio::net::TcpListener;

use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The mirror relay HTTP listener.
pub struct RelayServer {
    state: AppState,
}

impl RelayServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        if self.state.config.secret().is_none() {
            tracing::warn!(
                "webhook signature verification is DISABLED: no webhook secret configured; \
                 every payload will be accepted"
            );
        }
        let bind_addr = self.state.config.bind_addr;
        let app = self.router();
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("mirror relay listening on {bind_addr}");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use relay_sync::SystemGit;

    use super::*;
    use crate::config::RelayConfig;

    #[test]
    fn router_builds_from_production_state() {
        let state = AppState::production(RelayConfig::default());
        let server = RelayServer::new(state);
        let _router = server.router();
    }

    #[test]
    fn state_accepts_custom_collaborators() {
        let config = RelayConfig::default();
        let trigger = relay_sync::HttpMirrorTrigger::new("http://localhost", "o", "r", "t");
        let state = AppState::new(config, Arc::new(SystemGit), Arc::new(trigger));
        let _router = RelayServer::new(state).router();
    }
}
