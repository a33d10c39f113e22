//! Direction permit pair
//!
//! Both permits start granted, so whichever condition is satisfied first
//! decides the effective starting direction. From then on completing a burst
//! revokes its own direction and grants the other.

use crate::stepper::Direction;

/// Pair of direction permits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionPermits {
    ccw: bool,
    cw: bool,
}

impl Default for DirectionPermits {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionPermits {
    /// Power-on permits: both directions granted
    pub const fn new() -> Self {
        Self { ccw: true, cw: true }
    }

    /// Check if a burst in `direction` may run
    pub fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::CounterClockwise => self.ccw,
            Direction::Clockwise => self.cw,
        }
    }

    /// Counter-clockwise permit
    pub fn ccw(&self) -> bool {
        self.ccw
    }

    /// Clockwise permit
    pub fn cw(&self) -> bool {
        self.cw
    }

    /// Permits after a burst in `direction` has completed
    pub fn after_burst(self, direction: Direction) -> Self {
        match direction {
            Direction::CounterClockwise => Self {
                ccw: false,
                cw: true,
            },
            Direction::Clockwise => Self {
                ccw: true,
                cw: false,
            },
        }
    }
}
