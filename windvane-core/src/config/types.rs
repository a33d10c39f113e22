//! Configuration type definitions

use crate::speed::scale::{
    SpeedScale, DEFAULT_ADC_MAX, DEFAULT_MIN_STEP_DELAY_MS, DEFAULT_SCALE_DEN, DEFAULT_SCALE_NUM,
};
use crate::stepper::sequencer::DEFAULT_BURST_STEPS;

use super::parse::ParseError;

/// Fan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FanConfig {
    /// Phase steps per burst
    pub burst_steps: u32,
    /// Step delay in effect before the speed button is first used (ms)
    pub initial_step_delay_ms: u16,
    /// Floor applied to scaled potentiometer samples (ms)
    pub min_step_delay_ms: u16,
    /// Sample-to-milliseconds scale numerator
    pub speed_scale_num: u32,
    /// Sample-to-milliseconds scale denominator
    pub speed_scale_den: u32,
    /// Full-scale converter reading
    pub adc_max: u16,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            burst_steps: DEFAULT_BURST_STEPS,
            initial_step_delay_ms: DEFAULT_MIN_STEP_DELAY_MS,
            min_step_delay_ms: DEFAULT_MIN_STEP_DELAY_MS,
            speed_scale_num: DEFAULT_SCALE_NUM,
            speed_scale_den: DEFAULT_SCALE_DEN,
            adc_max: DEFAULT_ADC_MAX,
        }
    }
}

impl FanConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.burst_steps == 0 || self.speed_scale_den == 0 || self.min_step_delay_ms == 0 {
            return Err(ParseError::OutOfRange);
        }
        if self.adc_max == 0 {
            return Err(ParseError::OutOfRange);
        }
        Ok(())
    }

    /// Potentiometer scaling derived from this config
    pub fn speed_scale(&self) -> SpeedScale {
        SpeedScale::new(
            self.speed_scale_num,
            self.speed_scale_den,
            self.min_step_delay_ms,
            self.adc_max,
        )
    }

    /// Initial step delay, clamped into the range the potentiometer covers
    pub fn initial_step_delay(&self) -> u16 {
        self.speed_scale().clamp(self.initial_step_delay_ms)
    }
}
