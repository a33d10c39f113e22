//! RP2040-specific HAL for the motion tracking fan
//!
//! This crate provides RP2040 implementations of the shared
//! `windvane-hal` traits:
//!
//! - GPIO outputs and inputs on top of `embassy-rp`
//! - Edge-armed button input for the speed handler
//! - Blocking ADC channel for the speed potentiometer
//! - SysTick as the one-millisecond compare timer

#![no_std]

pub mod adc;
pub mod gpio;
pub mod timer;

pub use adc::BlockingAdcChannel;
pub use gpio::{EdgeButton, Rp2040Input, Rp2040Output};
pub use timer::SysTickTimer;

// Re-export shared traits from windvane-hal for convenience
pub use windvane_hal::{AnalogInput, EdgeInput, InputPin, OutputPin, PeriodicTimer};
