//! Board-agnostic core logic for the motion tracking fan
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Millisecond clock and the busy-wait delay built on it
//! - Stepper phase sequencing
//! - Motion direction inference with alternating direction permits
//! - Speed configuration from the potentiometer
//! - Configuration type definitions and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod delay;
pub mod motion;
pub mod shared;
pub mod speed;
pub mod stepper;

pub use clock::MillisecondClock;
pub use shared::{FanState, StepDelay};
