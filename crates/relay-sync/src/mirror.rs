//! Push-mirror strategy: propagate one branch by cloning from the source
//! service and pushing to the destination.
//!
//! Each sync runs in its own temporary workspace, so concurrent webhooks
//! never collide on the filesystem and nothing leaks between pushes of
//! different branches. The workspace is removed on every exit path by
//! `TempDir`'s drop. A single failed step aborts the whole operation; there
//! are no partial retries.

use std::sync::Arc;

use crate::error::{SyncError, SyncResult};
use crate::git::{redact_url, GitClient, GitOutput};
use crate::types::SyncOutcome;

/// Name under which the destination remote is registered in the workspace.
const DEST_REMOTE: &str = "github";

/// Branch-scoped clone-and-push mirroring.
pub struct PushMirror {
    git: Arc<dyn GitClient>,
    /// Clone URL on the source service; anonymous for a local instance.
    source_url: String,
    /// Push URL on the destination service, credentials embedded
    /// (token-in-URL).
    dest_url: String,
}

impl PushMirror {
    pub fn new(git: Arc<dyn GitClient>, source_url: String, dest_url: String) -> Self {
        Self {
            git,
            source_url,
            dest_url,
        }
    }

    /// Mirror `branch` from the source repository to the destination.
    ///
    /// Never returns an error: git failures and workspace problems fold
    /// into [`SyncOutcome::Failed`], with the failing step and its stderr
    /// logged here.
    pub async fn sync(&self, branch: &str) -> SyncOutcome {
        match self.run(branch).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(branch, error = %err, "push mirror aborted");
                SyncOutcome::failed(err.to_string())
            }
        }
    }

    async fn run(&self, branch: &str) -> SyncResult<SyncOutcome> {
        let workspace = tempfile::tempdir().map_err(SyncError::Workspace)?;
        let workdir = workspace.path();

        tracing::info!(
            branch,
            source = %redact_url(&self.source_url),
            dest = %redact_url(&self.dest_url),
            "mirroring branch"
        );

        let clone = self
            .git
            .clone_branch(&self.source_url, branch, workdir)
            .await?;
        if !clone.success() {
            return Ok(Self::step_failed("clone", &clone, branch));
        }

        let remote = self.git.add_remote(workdir, DEST_REMOTE, &self.dest_url).await?;
        if !remote.success() {
            return Ok(Self::step_failed("remote add", &remote, branch));
        }

        let push = self.git.push_branch(workdir, DEST_REMOTE, branch).await?;
        if !push.success() {
            return Ok(Self::step_failed("push", &push, branch));
        }

        tracing::info!(branch, "branch mirrored");
        Ok(SyncOutcome::Synced)
    }

    fn step_failed(step: &str, output: &GitOutput, branch: &str) -> SyncOutcome {
        tracing::error!(
            branch,
            step,
            status = output.status,
            stderr = %output.stderr.trim(),
            "git sync step failed"
        );
        SyncOutcome::failed(format!("git {step} exited with status {}", output.status))
    }
}
