//! Failed-attempt lockout counter.
//!
//! Every failed code validation — button path or serial path alike —
//! increments the counter.  Any success resets it.  At the threshold the
//! panel latches into a lockout that only the explicit administrative
//! [`reset`](LockoutCounter::reset) (or a power cycle) clears; the count is
//! never decremented by time.

use log::{error, info};

/// Counts consecutive failed deactivation attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutCounter {
    count: u8,
    threshold: u8,
}

impl LockoutCounter {
    pub fn new(threshold: u8) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Record a failed attempt.  Returns `true` if this failure crossed the
    /// lockout threshold.
    pub fn record_failure(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count == self.threshold {
            error!(
                "lockout engaged after {} consecutive failed attempts",
                self.count
            );
            return true;
        }
        false
    }

    /// A successful validation forgives the whole streak.
    pub fn record_success(&mut self) {
        if self.count > 0 {
            info!("code accepted, clearing {} recorded failures", self.count);
        }
        self.count = 0;
    }

    /// Administrative reset — the only recovery path once locked.
    pub fn reset(&mut self) {
        if self.is_locked() {
            info!("lockout administratively reset");
        }
        self.count = 0;
    }

    /// Consecutive failures recorded so far.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// True once the failure streak has reached the threshold.
    pub fn is_locked(&self) -> bool {
        self.count >= self.threshold
    }
}
