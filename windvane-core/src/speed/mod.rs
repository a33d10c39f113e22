//! Speed configuration
//!
//! A button press hands the potentiometer control over the step delay.
//! The raw analog sample is scaled linearly into milliseconds and floored so
//! the motor is never stepped faster than it can follow.

pub mod configurator;
pub mod scale;

pub use configurator::{SpeedConfigurator, SpeedUpdate};
pub use scale::SpeedScale;
