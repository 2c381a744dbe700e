//! Shared request state: the immutable config plus the sync collaborators,
//! injected so tests can substitute fakes for git and the trigger API.

use std::sync::Arc;

use relay_sync::{
    GitClient, HttpMirrorTrigger, MirrorTrigger, PushMirror, RemoteMirror, SystemGit,
};

use crate::config::RelayConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    git: Arc<dyn GitClient>,
    trigger: Arc<dyn MirrorTrigger>,
}

impl AppState {
    pub fn new(
        config: RelayConfig,
        git: Arc<dyn GitClient>,
        trigger: Arc<dyn MirrorTrigger>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            git,
            trigger,
        }
    }

    /// State wired to the real collaborators: the system `git` binary and
    /// Gitea's mirror-sync API.
    pub fn production(config: RelayConfig) -> Self {
        let trigger = HttpMirrorTrigger::new(
            &config.gitea.base_url,
            &config.gitea.repo_owner,
            &config.gitea.repo_name,
            config.gitea.admin_token.clone(),
        );
        Self::new(config, Arc::new(SystemGit), Arc::new(trigger))
    }

    /// Gitea→GitHub dispatcher for one request.
    pub fn push_mirror(&self) -> PushMirror {
        PushMirror::new(
            self.git.clone(),
            self.config.gitea_clone_url(),
            self.config.github_push_url(),
        )
    }

    /// GitHub→Gitea dispatcher for one request.
    pub fn remote_mirror(&self) -> RemoteMirror {
        RemoteMirror::new(self.trigger.clone())
    }
}
