//! Retry policy for remote completion calls.

use std::time::Duration;

/// Retry and cost bounds applied by the resilient caller.
///
/// The delay before retry `n` (0-indexed attempt that hit a rate limit) is
/// `2^n` backoff units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per call, including the first.
    pub max_attempts: u32,
    /// Base unit of the exponential backoff.
    pub backoff_unit: Duration,
    /// Upper bound applied to every requested output size.
    pub max_output_tokens: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_unit: Duration::from_secs(1),
            max_output_tokens: 4000,
        }
    }
}

impl RetryPolicy {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_backoff_unit(mut self, unit: Duration) -> Self {
        self.backoff_unit = unit;
        self
    }

    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    // ==================== Policy ====================

    /// Backoff delay after a rate-limited `attempt` (0-indexed).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.backoff_unit.saturating_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.backoff_unit, Duration::from_secs(1));
        assert_eq!(policy.max_output_tokens, 4000);
    }

    #[test]
    fn test_backoff_is_exponential() {
        let policy = RetryPolicy::default().with_backoff_unit(Duration::from_millis(10));
        assert_eq!(policy.backoff_delay(0), Duration::from_millis(10));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(20));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(40));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(64), policy.backoff_delay(40));
        assert!(policy.backoff_delay(64) >= policy.backoff_delay(31));
    }
}
