//! Event-type filtering.
//!
//! Only push events trigger a sync. Every other event type (pull requests,
//! issues, stars, ...) is classified as ignored, which is a successful
//! no-op, not an error.

/// The only event type that triggers a sync.
pub const PUSH_EVENT: &str = "push";

/// Returns `true` iff the event-type header value is exactly `"push"`.
///
/// The match is case-sensitive: `"Push"` and `""` do not qualify.
pub fn is_push(event: &str) -> bool {
    event == PUSH_EVENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_qualifies() {
        assert!(is_push("push"));
    }

    #[test]
    fn other_events_are_ignored() {
        assert!(!is_push("pull_request"));
        assert!(!is_push("issues"));
        assert!(!is_push("star"));
        assert!(!is_push("create"));
    }

    #[test]
    fn match_is_exact() {
        assert!(!is_push(""));
        assert!(!is_push("Push"));
        assert!(!is_push("push "));
        assert!(!is_push("pushed"));
    }
}
