//! Foreground motion controller
//!
//! Polls the two zone sensors in a tight loop and runs a burst when exactly
//! one zone reports presence and that direction is permitted:
//!
//! ```text
//!  zone A  zone B   direction
//!    0       1      counter-clockwise
//!    1       0      clockwise
//!    0       0      none
//!    1       1      none (ambiguous)
//! ```

use windvane_hal::InputPin;

use super::permits::DirectionPermits;
use crate::stepper::{BurstReport, BurstRunner, Direction};

/// One sample of both motion sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneReading {
    /// Zone A reports presence
    pub zone_a: bool,
    /// Zone B reports presence
    pub zone_b: bool,
}

impl ZoneReading {
    /// Direction of travel implied by this reading, if any
    pub fn direction(&self) -> Option<Direction> {
        match (self.zone_a, self.zone_b) {
            (false, true) => Some(Direction::CounterClockwise),
            (true, false) => Some(Direction::Clockwise),
            _ => None,
        }
    }

    /// Check if this reading calls for a burst in `direction`
    pub fn points(&self, direction: Direction) -> bool {
        self.direction() == Some(direction)
    }
}

/// Motion direction controller
pub struct MotionDirectionController<A, B> {
    zone_a: A,
    zone_b: B,
    permits: DirectionPermits,
}

impl<A: InputPin, B: InputPin> MotionDirectionController<A, B> {
    /// Create a controller with both directions permitted
    pub fn new(zone_a: A, zone_b: B) -> Self {
        Self {
            zone_a,
            zone_b,
            permits: DirectionPermits::new(),
        }
    }

    /// Current direction permits
    pub fn permits(&self) -> DirectionPermits {
        self.permits
    }

    /// Read both sensors
    pub fn sample(&self) -> ZoneReading {
        ZoneReading {
            zone_a: self.zone_a.is_high(),
            zone_b: self.zone_b.is_high(),
        }
    }

    /// Run one pass of the foreground loop
    ///
    /// Samples the sensors once, then checks the counter-clockwise condition
    /// followed by the clockwise one against that sample. Returns the burst
    /// that ran, or `None` if the pass performed no motion.
    pub fn poll_once<R: BurstRunner>(&mut self, runner: &mut R) -> Option<BurstReport> {
        let reading = self.sample();
        let mut report = None;

        for direction in [Direction::CounterClockwise, Direction::Clockwise] {
            if reading.points(direction) && self.permits.allows(direction) {
                report = Some(runner.run_burst(direction));
                self.permits = self.permits.after_burst(direction);
            }
        }

        report
    }

    /// Poll forever, handing each completed burst to `on_burst`
    pub fn run<R: BurstRunner>(
        &mut self,
        runner: &mut R,
        mut on_burst: impl FnMut(&BurstReport),
    ) -> ! {
        loop {
            if let Some(report) = self.poll_once(runner) {
                on_burst(&report);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::cell::Cell;
    use std::vec::Vec;

    struct MockInput {
        high: Cell<bool>,
    }

    impl MockInput {
        fn new(high: bool) -> Self {
            Self {
                high: Cell::new(high),
            }
        }
    }

    impl InputPin for &MockInput {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[derive(Default)]
    struct RecordingRunner {
        bursts: Vec<Direction>,
    }

    impl BurstRunner for RecordingRunner {
        fn run_burst(&mut self, direction: Direction) -> BurstReport {
            self.bursts.push(direction);
            BurstReport {
                direction,
                steps: 1000,
                start_phase: 0,
                end_phase: 0,
            }
        }
    }

    #[test]
    fn test_zone_reading_direction() {
        let read = |zone_a, zone_b| ZoneReading { zone_a, zone_b }.direction();
        assert_eq!(read(false, true), Some(Direction::CounterClockwise));
        assert_eq!(read(true, false), Some(Direction::Clockwise));
        assert_eq!(read(false, false), None);
        assert_eq!(read(true, true), None);
    }

    #[test]
    fn test_ccw_condition_runs_once() {
        let zone_a = MockInput::new(false);
        let zone_b = MockInput::new(true);
        let mut controller = MotionDirectionController::new(&zone_a, &zone_b);
        let mut runner = RecordingRunner::default();

        let report = controller.poll_once(&mut runner);
        assert_eq!(report.map(|r| r.direction), Some(Direction::CounterClockwise));
        assert!(!controller.permits().ccw());
        assert!(controller.permits().cw());

        // Same condition again: CCW is revoked
        assert_eq!(controller.poll_once(&mut runner), None);
        assert_eq!(controller.poll_once(&mut runner), None);
        assert_eq!(runner.bursts, [Direction::CounterClockwise]);
    }

    #[test]
    fn test_ccw_rearmed_by_cw_burst() {
        let zone_a = MockInput::new(false);
        let zone_b = MockInput::new(true);
        let mut controller = MotionDirectionController::new(&zone_a, &zone_b);
        let mut runner = RecordingRunner::default();

        controller.poll_once(&mut runner);

        zone_a.high.set(true);
        zone_b.high.set(false);
        let report = controller.poll_once(&mut runner);
        assert_eq!(report.map(|r| r.direction), Some(Direction::Clockwise));

        zone_a.high.set(false);
        zone_b.high.set(true);
        controller.poll_once(&mut runner);

        assert_eq!(
            runner.bursts,
            [
                Direction::CounterClockwise,
                Direction::Clockwise,
                Direction::CounterClockwise
            ]
        );
    }

    #[test]
    fn test_first_condition_decides_start() {
        let zone_a = MockInput::new(true);
        let zone_b = MockInput::new(false);
        let mut controller = MotionDirectionController::new(&zone_a, &zone_b);
        let mut runner = RecordingRunner::default();

        // CW is satisfied first even though nothing ran counter-clockwise
        controller.poll_once(&mut runner);
        assert_eq!(runner.bursts, [Direction::Clockwise]);
        assert!(controller.permits().ccw());
        assert!(!controller.permits().cw());
    }

    #[test]
    fn test_ambiguous_readings_do_nothing() {
        let mut runner = RecordingRunner::default();

        for (a, b) in [(false, false), (true, true)] {
            let zone_a = MockInput::new(a);
            let zone_b = MockInput::new(b);
            let mut controller = MotionDirectionController::new(&zone_a, &zone_b);

            for _ in 0..10 {
                assert_eq!(controller.poll_once(&mut runner), None);
            }
            assert_eq!(controller.permits(), DirectionPermits::new());
        }

        assert!(runner.bursts.is_empty());
    }

    #[test]
    fn test_at_most_one_burst_per_pass() {
        let zone_a = MockInput::new(false);
        let zone_b = MockInput::new(true);
        let mut controller = MotionDirectionController::new(&zone_a, &zone_b);
        let mut runner = RecordingRunner::default();

        for flip in 0..20 {
            zone_a.high.set(flip % 2 == 1);
            zone_b.high.set(flip % 2 == 0);
            let before = runner.bursts.len();
            controller.poll_once(&mut runner);
            assert!(runner.bursts.len() - before <= 1);
        }

        // Alternating sensors alternate the bursts
        assert_eq!(runner.bursts.len(), 20);
        for pair in runner.bursts.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
