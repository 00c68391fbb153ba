//! Retry behavior for ledger reads.
//!
//! Only read-side endpoints ever retry, and only under [`RetryPolicy::Idempotent`].
//! Broadcasts and anything else that mutates ledger state always run with
//! [`RetryPolicy::None`] — a failed submission is surfaced to the operator,
//! never replayed.

use std::time::Duration;

/// Retry policy for one ledger request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Never retry — required for broadcasts.
    #[default]
    None,
    /// Bounded retries with exponential backoff, for idempotent reads.
    Idempotent,
}

/// Backoff schedule for idempotent reads.
///
/// Delays double per attempt from `base_delay` up to `cap`, plus up to 25%
/// additive jitter so several waiting clients do not re-poll a recovering
/// node in lockstep.
#[derive(Debug, Clone)]
pub struct Backoff {
    /// Retry attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for the pre-jitter delay.
    pub cap: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
            cap: Duration::from_secs(5),
        }
    }
}

impl Backoff {
    /// Delay before retry `attempt` (0-indexed).
    pub fn delay(&self, attempt: u32) -> Duration {
        let doubled = self.base_delay.saturating_mul(1u32 << attempt.min(16));
        let capped = doubled.min(self.cap);
        let jitter_ms = (capped.as_millis() as f64 * 0.25 * rand::random::<f64>()) as u64;
        capped + Duration::from_millis(jitter_ms)
    }
}

/// Should a ledger read be retried after this HTTP status?
///
/// 429 (node throttling) and the 5xx range; anything else in 4xx is a
/// caller mistake and retrying will not change the answer.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..=599).contains(&status)
}
