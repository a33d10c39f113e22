//! Analog input abstraction
//!
//! The speed potentiometer is read through a single on-demand conversion.

/// Errors reported by an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// The converter signalled a failed conversion
    Failed,
}

/// Analog input channel with on-demand conversion
pub trait AnalogInput {
    /// Trigger a conversion and block until it completes
    ///
    /// Returns the raw sample. A converter that never completes blocks
    /// forever; there is no timeout at this layer.
    fn convert(&mut self) -> Result<u16, ConversionError>;
}
