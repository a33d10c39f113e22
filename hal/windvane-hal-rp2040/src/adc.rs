//! Blocking ADC channel
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! The speed handler runs in interrupt context and polls, so the converter
//! is used in blocking mode.

use embassy_rp::adc::{Adc, Blocking, Channel};

use windvane_hal::{AnalogInput, ConversionError};

/// Full-scale reading of the RP2040 ADC
pub const ADC_MAX: u16 = 4095;

/// One ADC channel with the converter it is read through
pub struct BlockingAdcChannel<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> BlockingAdcChannel<'d> {
    /// Pair a blocking converter with a channel
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for BlockingAdcChannel<'_> {
    fn convert(&mut self) -> Result<u16, ConversionError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| ConversionError::Failed)
    }
}
