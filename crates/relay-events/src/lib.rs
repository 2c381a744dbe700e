//! Webhook event model for the mirror relay.
//!
//! Decides which inbound webhook events warrant a sync (push events only)
//! and extracts the fields a sync needs: the pushed ref, the derived branch
//! name, and the repository name for logging.

pub mod error;
pub mod filter;
pub mod payload;
pub mod refs;

pub use error::{EventError, EventResult};
pub use filter::{is_push, PUSH_EVENT};
pub use payload::{PushEvent, PushPayload, RepositoryInfo};
pub use refs::branch_from_ref;
