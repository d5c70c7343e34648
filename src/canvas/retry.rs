//! Retry policy for Canvas API requests.

use std::time::Duration;

/// Exponential backoff policy shared by every request a client issues.
///
/// The delay before retry `k` (1-indexed) is `base_delay * 2^(k-1)`. There is
/// no jitter and no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries (not counting the initial attempt).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retry `retry` (1-indexed).
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// 429 and every 5xx are transient; other statuses are final.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429 || status >= 500
    }

    /// Fresh retry state for one HTTP request.
    pub fn start(&self) -> RetryState {
        RetryState {
            policy: *self,
            retries: 0,
        }
    }
}

/// Retry bookkeeping for a single request; never shared between requests.
#[derive(Debug)]
pub struct RetryState {
    policy: RetryPolicy,
    retries: u32,
}

impl RetryState {
    /// Consume one retry, returning its number and the delay to wait first.
    /// `None` once the policy is exhausted.
    pub fn next_retry(&mut self) -> Option<(u32, Duration)> {
        if self.retries >= self.policy.max_retries {
            return None;
        }
        self.retries += 1;
        Some((self.retries, self.policy.delay_for_retry(self.retries)))
    }

    /// Retries consumed so far.
    pub fn retries(&self) -> u32 {
        self.retries
    }
}
