//! Consecutive-failure tracking.
//!
//! # States
//! ```text
//! 0 → 1 → ... → threshold-1     on failure
//! k → 0                         on success
//! threshold-1 → (degraded) → 0  on the threshold-th consecutive failure
//! ```
//!
//! Owned by the loop task, so no atomics.

/// Counts consecutive failed fetches and signals when the threshold is hit.
#[derive(Debug, Clone)]
pub struct FailureCounter {
    consecutive: u32,
    threshold: u32,
}

impl FailureCounter {
    /// Create a counter that trips after `threshold` consecutive failures.
    /// A threshold of zero is treated as one.
    pub fn new(threshold: u32) -> Self {
        Self {
            consecutive: 0,
            threshold: threshold.max(1),
        }
    }

    /// Current number of consecutive failures.
    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Report a failed fetch.
    ///
    /// Returns `true` when this failure reached the threshold; the counter is
    /// reset to zero in that case.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive += 1;
        if self.consecutive >= self.threshold {
            self.consecutive = 0;
            return true;
        }
        false
    }

    /// Report a successful fetch.
    pub fn record_success(&mut self) {
        self.consecutive = 0;
    }
}

impl Default for FailureCounter {
    fn default() -> Self {
        Self::new(3)
    }
}
