//! GPIO pin abstractions
//!
//! Digital outputs drive the four stepper phases and the three status
//! indicators. Digital inputs carry the two motion-sensor zones and the
//! speed button.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reads are fresh on every call; implementations must not cache.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input line whose rising edge raises an interrupt
///
/// An edge stays pending until the handler bound to it acknowledges it with
/// [`EdgeInput::clear_edge`]. Only an acknowledged line waits for a new
/// press; a pending edge is delivered again.
pub trait EdgeInput: InputPin {
    /// Clear the pending edge flag
    fn clear_edge(&mut self);
}

/// Pending flag for an edge-triggered input
///
/// Chip implementations of [`EdgeInput`] keep one of these next to the pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLatch {
    pending: bool,
}

impl EdgeLatch {
    /// Create a latch with no edge pending
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Record an edge
    ///
    /// Returns `false` if the previous edge had not been cleared yet.
    pub fn latch(&mut self) -> bool {
        let fresh = !self.pending;
        self.pending = true;
        fresh
    }

    /// Check if an edge is waiting to be acknowledged
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Acknowledge the pending edge
    pub fn clear(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_until_cleared() {
        let mut latch = EdgeLatch::new();
        assert!(!latch.is_pending());

        assert!(latch.latch());
        assert!(latch.is_pending());

        latch.clear();
        assert!(!latch.is_pending());
    }

    #[test]
    fn test_second_edge_before_clear_is_stale() {
        let mut latch = EdgeLatch::new();
        assert!(latch.latch());
        assert!(!latch.latch());
        assert!(latch.is_pending());

        latch.clear();
        assert!(latch.latch());
    }
}
