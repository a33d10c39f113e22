//! Motion direction inference
//!
//! Two motion sensors watch adjacent zones. Presence in one zone but not the
//! other tells the fan which way to turn, and the direction permits make the
//! fan alternate instead of re-running the same direction.

pub mod controller;
pub mod permits;

pub use controller::{MotionDirectionController, ZoneReading};
pub use permits::DirectionPermits;
