//! Aggregated result of a sync run.

use crate::core::types::SecretName;

use super::PushOutcome;

/// A secret that was not written, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub key: SecretName,
    pub reason: String,
}

/// Per-key results of one sync run.
///
/// Every key of the input is recorded exactly once, either as succeeded or
/// as failed, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    succeeded: Vec<SecretName>,
    failed: Vec<Failure>,
}

impl SyncReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a completed push.
    pub fn record_outcome(&mut self, outcome: PushOutcome) {
        if outcome.accepted {
            self.succeeded.push(outcome.key);
        } else {
            let reason = outcome.reason();
            self.record_failure(outcome.key, reason);
        }
    }

    /// Record a key that failed before or during its push.
    pub fn record_failure(&mut self, key: impl Into<SecretName>, reason: impl Into<String>) {
        self.failed.push(Failure {
            key: key.into(),
            reason: reason.into(),
        });
    }

    /// True iff no key failed.
    pub fn overall_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Keys written successfully
    pub fn succeeded_keys(&self) -> &[SecretName] {
        &self.succeeded
    }

    /// Keys that were not written
    pub fn failed_keys(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.key.as_str()).collect()
    }

    /// Failed keys with their reasons
    pub fn failures(&self) -> &[Failure] {
        &self.failed
    }

    /// Number of keys attempted
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(key: &str, status: u16) -> PushOutcome {
        PushOutcome {
            key: key.into(),
            accepted: status == 201 || status == 204,
            status,
            status_text: String::new(),
            body: None,
        }
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = SyncReport::new();
        assert!(report.overall_success());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_partial_failure() {
        let mut report = SyncReport::new();
        report.record_outcome(outcome("FIRST", 201));
        report.record_outcome(outcome("SECOND", 422));
        report.record_outcome(outcome("THIRD", 204));

        assert!(!report.overall_success());
        assert_eq!(report.succeeded_keys(), ["FIRST", "THIRD"]);
        assert_eq!(report.failed_keys(), vec!["SECOND"]);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_record_failure_keeps_reason() {
        let mut report = SyncReport::new();
        report.record_failure("BROKEN", "invalid public key: bad length");

        assert_eq!(report.failures()[0].key, "BROKEN");
        assert_eq!(report.failures()[0].reason, "invalid public key: bad length");
    }
}
