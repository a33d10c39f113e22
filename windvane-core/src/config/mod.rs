//! Configuration types
//!
//! Calibration values that depend on the motor and converter fitted to a
//! particular build, plus a parser for the embedded `fan.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
