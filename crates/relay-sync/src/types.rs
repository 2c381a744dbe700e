/// Result of a sync attempt.
///
/// Strategy failures fold into `Failed` rather than crossing the dispatcher
/// boundary as errors; the detail is logged server-side and the HTTP
/// response carries only a generic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced,
    Failed { reason: String },
}

impl SyncOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_predicates() {
        assert!(SyncOutcome::Synced.is_synced());
        assert!(!SyncOutcome::failed("push rejected").is_synced());
    }

    #[test]
    fn failed_carries_reason() {
        let outcome = SyncOutcome::failed("clone exited with status 128");
        assert_eq!(
            outcome,
            SyncOutcome::Failed {
                reason: "clone exited with status 128".into()
            }
        );
    }
}
