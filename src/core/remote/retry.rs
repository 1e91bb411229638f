//! Retry policy for transient failures.

use std::time::Duration;

use crate::core::constants;

/// How many times to retry a transient failure and how long to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based): `backoff * 2^(attempt-1)`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.backoff.saturating_mul(1u32 << exponent)
    }

    /// Whether `status` is worth retrying.
    pub fn is_transient(status: u16) -> bool {
        constants::TRANSIENT_STATUSES.contains(&status)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: constants::DEFAULT_MAX_RETRIES,
            backoff: Duration::from_millis(constants::DEFAULT_BACKOFF_MS),
        }
    }
}
