//! Button-driven speed configuration handler
//!
//! Runs in interrupt context when the button line rises, preempting the
//! foreground loop until it returns. The protocol is:
//!
//! 1. wait out any low level left from the edge that fired the handler
//! 2. while the line stays high, light the configuring indicator and keep
//!    converting the potentiometer, latching each result as the step delay
//! 3. when the line drops, turn the indicator off, wait for the line to come
//!    back high and acknowledge the edge
//!
//! The delay in effect afterwards is the last sample taken before the line
//! dropped. A stuck button or converter hangs here; there is no timeout.

use windvane_hal::{AnalogInput, EdgeInput, OutputPin};

use super::scale::SpeedScale;
use crate::shared::StepDelay;

/// Outcome of one configuration session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedUpdate {
    /// Conversions that completed and were latched
    pub conversions: u32,
    /// Conversions the converter reported as failed
    pub discarded: u32,
    /// Step delay latched last, if any conversion completed
    pub latched_ms: Option<u16>,
}

/// Speed configuration handler
pub struct SpeedConfigurator<'a, B, A, L> {
    button: B,
    adc: A,
    /// Lit while the potentiometer is being sampled
    indicator: L,
    step_delay: &'a StepDelay,
    scale: SpeedScale,
}

impl<'a, B, A, L> SpeedConfigurator<'a, B, A, L>
where
    B: EdgeInput,
    A: AnalogInput,
    L: OutputPin,
{
    /// Create a handler writing into `step_delay`
    pub fn new(
        button: B,
        adc: A,
        indicator: L,
        step_delay: &'a StepDelay,
        scale: SpeedScale,
    ) -> Self {
        Self {
            button,
            adc,
            indicator,
            step_delay,
            scale,
        }
    }

    /// Scale used to turn samples into delays
    pub fn scale(&self) -> SpeedScale {
        self.scale
    }

    /// Borrow the button, e.g. to wait for the next edge
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Handle one rising edge on the button line
    pub fn on_button_edge(&mut self) -> SpeedUpdate {
        while self.button.is_low() {
            core::hint::spin_loop();
        }

        let mut update = SpeedUpdate::default();

        while self.button.is_high() {
            self.indicator.set_high();

            match self.adc.convert() {
                Ok(raw) => {
                    let ms = self.scale.delay_for_sample(raw);
                    self.step_delay.set(ms);
                    update.conversions += 1;
                    update.latched_ms = Some(ms);
                }
                Err(_) => update.discarded += 1,
            }
        }

        self.indicator.set_low();

        while self.button.is_low() {
            core::hint::spin_loop();
        }

        self.button.clear_edge();
        update
    }
}
