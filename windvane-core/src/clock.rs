//! Software millisecond clock
//!
//! A free-running tick counter fed by the periodic timer interrupt. It is
//! the only timing primitive on the stepper path.

use portable_atomic::{AtomicU32, Ordering};

/// Millisecond tick counter
///
/// Incremented once per timer period from interrupt context. The counter
/// wraps at `u32::MAX`.
#[derive(Debug)]
pub struct MillisecondClock {
    ticks: AtomicU32,
}

impl Default for MillisecondClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisecondClock {
    /// Create a clock at zero
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance the clock by one tick
    ///
    /// Called from the timer interrupt. Never blocks.
    pub fn on_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick count
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Reset the tick count to zero
    pub fn reset(&self) {
        self.ticks.store(0, Ordering::Relaxed);
    }
}
