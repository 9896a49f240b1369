//! Bounded exponential backoff for quota-limited Gemini calls.

use std::iter::Take;
use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

/// How many attempts an analysis may make and how long the first wait is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(2000),
        }
    }
}

impl RetryPolicy {
    pub fn start(&self) -> RetryState {
        let retries = self.max_attempts.saturating_sub(1);
        RetryState {
            attempt: 1,
            remaining: retries,
            delays: self.backoff().take(retries as usize),
        }
    }

    /// Doubling schedule starting at `base_delay`: `2^n * (base / 2)` ms.
    /// An odd base is rounded down to the nearest even millisecond.
    fn backoff(&self) -> ExponentialBackoff {
        let half_ms = (self.base_delay.as_millis() / 2).max(1) as u64;
        ExponentialBackoff::from_millis(2).factor(half_ms)
    }
}

/// Per-call retry bookkeeping. Lives only for one `analyze` invocation.
#[derive(Debug, Clone)]
pub struct RetryState {
    attempt: u32,
    remaining: u32,
    delays: Take<ExponentialBackoff>,
}

impl RetryState {
    /// 1-based number of the attempt about to be made.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Search grounding has a tighter quota than plain generation, so only
    /// the first attempt asks for it.
    pub fn search_enabled(&self) -> bool {
        self.attempt == 1
    }

    /// Consume one retry. Returns the wait before the next attempt, or
    /// `None` when the budget is spent.
    pub fn next_backoff(&mut self) -> Option<Duration> {
        let wait = self.delays.next()?;
        self.remaining -= 1;
        self.attempt += 1;
        Some(wait)
    }
}
