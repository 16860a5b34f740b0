//! Cooperative alert scheduling
//!
//! The schedule is plain data: the host loop owns the clock and asks
//! whether a pass is due, then runs the [`AlertEvaluator`] itself. This
//! keeps the timing decoupled from both the UI and the evaluation.
//!
//! [`AlertEvaluator`]: super::AlertEvaluator

use std::time::{Duration, Instant};

/// Default cadence between alert passes
pub const DAILY: Duration = Duration::from_secs(24 * 60 * 60);

/// Tracks when the next alert pass is due
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_run: Option<Instant>,
}

impl TickScheduler {
    /// Create a scheduler with a custom interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Create a scheduler with the default daily cadence
    pub fn daily() -> Self {
        Self::new(DAILY)
    }

    /// Whether a pass is due at `now`; a `true` answer records the run.
    ///
    /// The first call after construction is always due, so a pass runs
    /// immediately on startup or login.
    pub fn due(&mut self, now: Instant) -> bool {
        let due = match self.last_run {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last_run = Some(now);
        }
        due
    }

    /// The configured interval between passes
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::daily()
    }
}
