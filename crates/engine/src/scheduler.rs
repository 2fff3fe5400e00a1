//! Fixed-period tick scheduler.
//!
//! The scheduler does not read a clock. Callers feed it elapsed milliseconds
//! (from `Instant` in the terminal loop, or literal numbers in tests) and it
//! reports how many ticks became due. Once cancelled it never fires again.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    period_ms: u32,
    /// Time accumulated toward the next tick, always < period_ms.
    elapsed_ms: u32,
    fired: u64,
    cancelled: bool,
}

impl TickScheduler {
    /// A zero period is clamped to 1ms.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
            fired: 0,
            cancelled: false,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Total ticks reported so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Add elapsed time and return the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }
        let total = self.elapsed_ms as u64 + elapsed_ms as u64;
        let due = total / self.period_ms as u64;
        self.elapsed_ms = (total % self.period_ms as u64) as u32;
        self.fired += due;
        due as u32
    }

    /// Time left before the next tick, or None once cancelled.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(Duration::from_millis(
            (self.period_ms - self.elapsed_ms) as u64,
        ))
    }

    /// Stop scheduling. Returns true only on the first call.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        self.elapsed_ms = 0;
        true
    }
}
