//! Stepper burst sequencer
//!
//! Owns the four phase outputs, the two direction indicators and the phase
//! index. The phase index survives direction changes so a reversal picks up
//! from the coil that was last energized.

use windvane_hal::OutputPin;

use super::pattern::{phase_pattern, Direction, PHASE_COUNT};
use super::BurstRunner;
use crate::delay::DelayMs;
use crate::shared::StepDelay;

/// Default number of steps in one burst (roughly half a turn of the fan head)
pub const DEFAULT_BURST_STEPS: u32 = 1000;

/// Summary of a completed burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstReport {
    /// Direction the burst turned
    pub direction: Direction,
    /// Number of phase steps emitted
    pub steps: u32,
    /// Phase index the burst started from
    pub start_phase: u8,
    /// Phase index the next burst will start from
    pub end_phase: u8,
}

/// Four-phase stepper sequencer
pub struct StepperSequencer<'a, P, L, D> {
    /// Phase outputs, index `n` driven by pattern bit `n`
    phases: [P; 4],
    /// Lit while a counter-clockwise burst runs
    ccw_indicator: L,
    /// Lit while a clockwise burst runs
    cw_indicator: L,
    delay: D,
    step_delay: &'a StepDelay,
    burst_steps: u32,
    phase: u8,
}

impl<'a, P, L, D> StepperSequencer<'a, P, L, D>
where
    P: OutputPin,
    L: OutputPin,
    D: DelayMs,
{
    /// Create a sequencer at phase 0
    ///
    /// `step_delay` is read before every step, so a speed change made while
    /// a burst is running applies from the next step on.
    pub fn new(
        phases: [P; 4],
        ccw_indicator: L,
        cw_indicator: L,
        delay: D,
        step_delay: &'a StepDelay,
        burst_steps: u32,
    ) -> Self {
        Self {
            phases,
            ccw_indicator,
            cw_indicator,
            delay,
            step_delay,
            burst_steps,
            phase: 0,
        }
    }

    /// Current phase index (0-3)
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Number of steps per burst
    pub fn burst_steps(&self) -> u32 {
        self.burst_steps
    }

    fn write_pattern(&mut self, pattern: u8) {
        for (bit, pin) in self.phases.iter_mut().enumerate() {
            pin.set_state(pattern & (1 << bit) != 0);
        }
    }

    fn toggle_indicator(&mut self, direction: Direction) {
        match direction {
            Direction::CounterClockwise => self.ccw_indicator.toggle(),
            Direction::Clockwise => self.cw_indicator.toggle(),
        }
    }
}

impl<P, L, D> BurstRunner for StepperSequencer<'_, P, L, D>
where
    P: OutputPin,
    L: OutputPin,
    D: DelayMs,
{
    fn run_burst(&mut self, direction: Direction) -> BurstReport {
        let start_phase = self.phase;
        self.toggle_indicator(direction);

        for _ in 0..self.burst_steps {
            let pattern = phase_pattern(self.phase, direction);
            self.write_pattern(pattern);
            self.phase = (self.phase + 1) % PHASE_COUNT;
            self.delay.wait(self.step_delay.get());
        }

        self.toggle_indicator(direction);

        BurstReport {
            direction,
            steps: self.burst_steps,
            start_phase,
            end_phase: self.phase,
        }
    }
}
