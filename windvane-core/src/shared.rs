//! State shared between the foreground loop and interrupt handlers
//!
//! Each value has exactly one writing context. The speed handler writes the
//! step delay while the foreground loop is preempted, and the sequencer reads
//! it between steps, so relaxed atomics are enough and no lock is taken.

use portable_atomic::{AtomicU16, Ordering};

use crate::clock::MillisecondClock;

/// Step delay in milliseconds, written by the speed handler
#[derive(Debug)]
pub struct StepDelay {
    ms: AtomicU16,
}

impl StepDelay {
    /// Create a cell holding `ms`
    pub const fn new(ms: u16) -> Self {
        Self {
            ms: AtomicU16::new(ms),
        }
    }

    /// Current step delay
    pub fn get(&self) -> u16 {
        self.ms.load(Ordering::Relaxed)
    }

    /// Latch a new step delay
    pub fn set(&self, ms: u16) {
        self.ms.store(ms, Ordering::Relaxed);
    }
}

/// Process-wide fan state
///
/// Owned by the top-level context (a `static` in the firmware) and handed to
/// components by reference.
#[derive(Debug)]
pub struct FanState {
    /// Millisecond clock fed by the timer interrupt
    pub clock: MillisecondClock,
    /// Inter-step delay latched by the speed handler
    pub step_delay: StepDelay,
}

impl FanState {
    /// Create the shared state with an initial step delay
    pub const fn new(initial_step_delay_ms: u16) -> Self {
        Self {
            clock: MillisecondClock::new(),
            step_delay: StepDelay::new(initial_step_delay_ms),
        }
    }
}
