//! Narrow interface over the `git` binary.
//!
//! The push-mirror strategy needs exactly three operations: a branch-scoped
//! clone, registering a second remote, and pushing one branch. Each returns
//! a structured [`GitOutput`] rather than raising on non-zero exit, so the
//! strategy decides what a failure means — and tests substitute a fake
//! without ever spawning a process.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{SyncError, SyncResult};

/// Captured result of one git invocation.
#[derive(Clone, Debug)]
pub struct GitOutput {
    /// Process exit status; `-1` when the process was killed by a signal.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Zero-exit output, for fakes and tests.
    pub fn ok() -> Self {
        Self {
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

#[async_trait]
pub trait GitClient: Send + Sync {
    /// `git clone --branch <branch> --single-branch <url> <dest>`.
    async fn clone_branch(&self, url: &str, branch: &str, dest: &Path) -> SyncResult<GitOutput>;

    /// `git remote add <name> <url>` inside `workdir`.
    async fn add_remote(&self, workdir: &Path, name: &str, url: &str) -> SyncResult<GitOutput>;

    /// `git push <remote> <branch>` inside `workdir`.
    async fn push_branch(&self, workdir: &Path, remote: &str, branch: &str)
        -> SyncResult<GitOutput>;
}

/// [`GitClient`] backed by the system `git` binary.
///
/// Commands run through `tokio::process`, so a long clone never occupies an
/// I/O-serving thread. No timeout is imposed here; git's own defaults apply.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    async fn run(&self, operation: &str, args: &[&str], cwd: Option<&Path>) -> SyncResult<GitOutput> {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let output = command.output().await.map_err(|source| SyncError::Spawn {
            operation: operation.to_string(),
            source,
        })?;
        Ok(GitOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[async_trait]
impl GitClient for SystemGit {
    async fn clone_branch(&self, url: &str, branch: &str, dest: &Path) -> SyncResult<GitOutput> {
        let dest = dest.to_string_lossy().into_owned();
        self.run(
            "clone",
            &["clone", "--branch", branch, "--single-branch", url, dest.as_str()],
            None,
        )
        .await
    }

    async fn add_remote(&self, workdir: &Path, name: &str, url: &str) -> SyncResult<GitOutput> {
        self.run("remote add", &["remote", "add", name, url], Some(workdir))
            .await
    }

    async fn push_branch(
        &self,
        workdir: &Path,
        remote: &str,
        branch: &str,
    ) -> SyncResult<GitOutput> {
        self.run("push", &["push", remote, branch], Some(workdir))
            .await
    }
}

/// Replace any userinfo (token) embedded in an HTTPS remote URL, so the URL
/// can appear in logs.
pub fn redact_url(url: &str) -> String {
    match (url.find("://"), url.find('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}***@{}", &url[..scheme_end + 3], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}
