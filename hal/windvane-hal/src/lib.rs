//! Windvane Hardware Abstraction Layer
//!
//! This crate defines the electrical boundary the fan logic runs against.
//! Chip-specific crates implement these traits once the board has been
//! brought up (clocks calibrated, pin directions and pulls configured,
//! interrupt vectors registered).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  windvane-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  windvane-core (direction + sequencing) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  windvane-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ windvane-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::EdgeInput`] - Digital I/O
//! - [`gpio::EdgeLatch`] - Pending flag shared by edge input implementations
//! - [`adc::AnalogInput`] - On-demand analog conversion
//! - [`timer::PeriodicTimer`] - Millisecond compare timer driving the tick interrupt

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod timer;

pub use adc::{AnalogInput, ConversionError};
pub use gpio::{EdgeInput, EdgeLatch, InputPin, OutputPin};
pub use timer::PeriodicTimer;
