//! GPIO wrappers
//!
//! Thin newtypes that put `embassy-rp` pins behind the `windvane-hal`
//! traits. Pin direction and pulls are chosen when the embassy pin is
//! created in `main`.

use embassy_rp::gpio::{Input, Output};

use windvane_hal::{EdgeInput, EdgeLatch, InputPin, OutputPin};

/// Push-pull output pin
pub struct Rp2040Output<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2040Output<'d> {
    /// Wrap an embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for Rp2040Output<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Plain digital input (motion sensor zones)
pub struct Rp2040Input<'d> {
    pin: Input<'d>,
}

impl<'d> Rp2040Input<'d> {
    /// Wrap an embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for Rp2040Input<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Button input armed on its rising edge
///
/// The edge is latched as pending when [`EdgeButton::wait_for_edge`]
/// resolves and stays pending until the handler acknowledges it. While an
/// edge is pending the next wait hands it back without touching the GPIO
/// interrupt. Edges seen while the handler runs are not queued: the wait
/// after an acknowledgement arms the GPIO interrupt afresh.
pub struct EdgeButton<'d> {
    pin: Input<'d>,
    latch: EdgeLatch,
}

impl<'d> EdgeButton<'d> {
    /// Wrap an embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self {
            pin,
            latch: EdgeLatch::new(),
        }
    }

    /// Wait for the next rising edge and mark it pending
    ///
    /// Returns `false` without waiting if the previous edge was never
    /// acknowledged.
    pub async fn wait_for_edge(&mut self) -> bool {
        if self.latch.is_pending() {
            return false;
        }

        self.pin.wait_for_rising_edge().await;
        self.latch.latch()
    }

    /// Check if an edge is waiting to be acknowledged
    pub fn is_pending(&self) -> bool {
        self.latch.is_pending()
    }
}

impl InputPin for EdgeButton<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl EdgeInput for EdgeButton<'_> {
    fn clear_edge(&mut self) {
        self.latch.clear();
    }
}
