//! Analog sample to step delay scaling

/// Default scale numerator (0.024 ms per count)
pub const DEFAULT_SCALE_NUM: u32 = 24;

/// Default scale denominator
pub const DEFAULT_SCALE_DEN: u32 = 1000;

/// Shortest step delay the motor follows reliably (ms)
pub const DEFAULT_MIN_STEP_DELAY_MS: u16 = 5;

/// Full-scale reading of a 10-bit converter
pub const DEFAULT_ADC_MAX: u16 = 1023;

/// Linear sample-to-delay mapping with a floor
///
/// `delay = max(floor(sample * num / den), min_delay_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedScale {
    num: u32,
    den: u32,
    min_delay_ms: u16,
    adc_max: u16,
}

impl Default for SpeedScale {
    fn default() -> Self {
        Self::new(
            DEFAULT_SCALE_NUM,
            DEFAULT_SCALE_DEN,
            DEFAULT_MIN_STEP_DELAY_MS,
            DEFAULT_ADC_MAX,
        )
    }
}

impl SpeedScale {
    /// Create a scale of `num / den` ms per count
    ///
    /// A zero denominator is treated as one.
    pub const fn new(num: u32, den: u32, min_delay_ms: u16, adc_max: u16) -> Self {
        Self {
            num,
            den: if den == 0 { 1 } else { den },
            min_delay_ms,
            adc_max,
        }
    }

    /// Step delay for a raw analog sample
    ///
    /// Samples above the converter's full scale are treated as full scale.
    pub fn delay_for_sample(&self, raw: u16) -> u16 {
        let raw = u64::from(raw.min(self.adc_max));
        let scaled = raw * u64::from(self.num) / u64::from(self.den);
        let scaled = u16::try_from(scaled).unwrap_or(u16::MAX);
        scaled.max(self.min_delay_ms)
    }

    /// Shortest delay the scale can produce
    pub fn min_delay_ms(&self) -> u16 {
        self.min_delay_ms
    }

    /// Longest delay the scale can produce (full-scale sample)
    pub fn max_delay_ms(&self) -> u16 {
        self.delay_for_sample(self.adc_max)
    }

    /// Clamp an arbitrary delay into the range this scale produces
    pub fn clamp(&self, ms: u16) -> u16 {
        ms.clamp(self.min_delay_ms(), self.max_delay_ms())
    }
}
