//! Webhook signature verification for the mirror relay.
//!
//! Each hosting service signs its webhook deliveries with HMAC-SHA256 over
//! the raw request body, but frames the digest differently: Gitea sends the
//! bare hex digest, GitHub prefixes it with `sha256=`. Both are verified
//! here with a constant-time comparison.

pub mod verify;

pub use verify::{compute, verify, SignatureScheme};
