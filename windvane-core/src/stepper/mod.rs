//! Four-phase stepper sequencing
//!
//! The fan head is turned by a unipolar stepper driven one coil at a time.
//! A burst walks the energized coil around the four phases a fixed number
//! of times in one direction.

pub mod pattern;
pub mod sequencer;

pub use pattern::{active_coil, phase_pattern, Direction, PHASE_COUNT};
pub use sequencer::{BurstReport, StepperSequencer};

/// Something that can run a complete burst in one direction
///
/// The motion controller only needs this much of the sequencer.
pub trait BurstRunner {
    /// Run one burst and return once the last step's delay has elapsed
    fn run_burst(&mut self, direction: Direction) -> BurstReport;
}
