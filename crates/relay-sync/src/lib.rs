//! Cross-service sync strategies for the mirror relay.
//!
//! Two directions, two mechanisms:
//!
//! - [`PushMirror`] clones one branch from the source service into a
//!   temporary workspace and pushes it to the destination (token-in-URL).
//! - [`RemoteMirror`] triggers the destination service's built-in
//!   mirror-sync feature with a single authenticated POST.
//!
//! Both fold every failure into a [`SyncOutcome`]; nothing here escapes as
//! an error past the dispatch boundary. No retries, no relay-imposed
//! timeouts, and no cross-request ordering: concurrent syncs of the same
//! branch proceed independently, isolated on the filesystem by per-sync
//! temporary workspaces.

pub mod error;
pub mod git;
pub mod mirror;
pub mod trigger;
pub mod types;

pub use error::{SyncError, SyncResult};
pub use git::{redact_url, GitClient, GitOutput, SystemGit};
pub use mirror::PushMirror;
pub use trigger::{HttpMirrorTrigger, MirrorTrigger, RemoteMirror};
pub use types::SyncOutcome;
