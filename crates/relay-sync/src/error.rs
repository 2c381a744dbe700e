use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to create sync workspace: {0}")]
    Workspace(std::io::Error),

    #[error("failed to spawn git {operation}: {source}")]
    Spawn {
        operation: String,
        source: std::io::Error,
    },

    #[error("mirror-sync request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type SyncResult<T> = Result<T, SyncError>;
