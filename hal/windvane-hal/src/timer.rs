//! Periodic timer abstraction
//!
//! The millisecond clock is fed by a compare timer that raises an interrupt
//! once per period while armed.

/// Periodic compare timer
pub trait PeriodicTimer {
    /// Start the timer so it interrupts once per millisecond
    fn arm(&mut self);

    /// Stop the timer; no further interrupts are delivered until re-armed
    fn disarm(&mut self);

    /// Check if the timer is currently armed
    fn is_armed(&self) -> bool;
}
