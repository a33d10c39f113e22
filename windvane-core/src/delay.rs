//! Busy-wait delay primitive
//!
//! Pacing between stepper phases is done by spinning on the millisecond
//! clock. The calling context stalls for the whole duration; only hardware
//! interrupts run in the meantime.

use windvane_hal::PeriodicTimer;

use crate::clock::MillisecondClock;

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for `duration_ms` milliseconds
    fn wait(&mut self, duration_ms: u16);
}

/// Delay that spins on the millisecond clock
///
/// Each wait resets the clock, arms the timer, spins until the clock reaches
/// the requested count and disarms the timer again. The timer only runs
/// while a wait is in progress.
pub struct BusyWaitDelay<'a, T> {
    clock: &'a MillisecondClock,
    timer: T,
}

impl<'a, T: PeriodicTimer> BusyWaitDelay<'a, T> {
    /// Create a delay driven by `timer` ticking `clock`
    pub fn new(clock: &'a MillisecondClock, mut timer: T) -> Self {
        timer.disarm();
        Self { clock, timer }
    }

    #[cfg(test)]
    fn timer(&self) -> &T {
        &self.timer
    }
}

impl<T: PeriodicTimer> DelayMs for BusyWaitDelay<'_, T> {
    fn wait(&mut self, duration_ms: u16) {
        self.clock.reset();
        self.timer.arm();

        while self.clock.ticks() < u32::from(duration_ms) {
            core::hint::spin_loop();
        }

        self.timer.disarm();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::boxed::Box;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    /// Timer that ticks the clock from a background thread while armed,
    /// standing in for the timer interrupt.
    struct ThreadTimer {
        clock: &'static MillisecondClock,
        running: Arc<AtomicBool>,
        handle: Option<JoinHandle<()>>,
        arm_count: u32,
    }

    impl ThreadTimer {
        fn new(clock: &'static MillisecondClock) -> Self {
            Self {
                clock,
                running: Arc::new(AtomicBool::new(false)),
                handle: None,
                arm_count: 0,
            }
        }
    }

    impl PeriodicTimer for ThreadTimer {
        fn arm(&mut self) {
            self.arm_count += 1;
            self.running.store(true, Ordering::SeqCst);
            let running = self.running.clone();
            let clock = self.clock;
            self.handle = Some(thread::spawn(move || {
                while running.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_micros(50));
                    clock.on_tick();
                }
            }));
        }

        fn disarm(&mut self) {
            self.running.store(false, Ordering::SeqCst);
            if let Some(handle) = self.handle.take() {
                handle.join().unwrap();
            }
        }

        fn is_armed(&self) -> bool {
            self.running.load(Ordering::SeqCst)
        }
    }

    fn leaked_clock() -> &'static MillisecondClock {
        Box::leak(Box::new(MillisecondClock::new()))
    }

    #[test]
    fn test_wait_spins_until_duration() {
        let clock = leaked_clock();
        let mut delay = BusyWaitDelay::new(clock, ThreadTimer::new(clock));

        delay.wait(12);

        assert!(clock.ticks() >= 12);
        assert!(!delay.timer().is_armed());
        assert_eq!(delay.timer().arm_count, 1);
    }

    #[test]
    fn test_wait_resets_clock_first() {
        let clock = leaked_clock();
        for _ in 0..1000 {
            clock.on_tick();
        }
        let mut delay = BusyWaitDelay::new(clock, ThreadTimer::new(clock));

        delay.wait(5);

        // A stale count would have let the wait return without ticking
        let ticks = clock.ticks();
        assert!((5..1000).contains(&ticks));
    }

    #[test]
    fn test_zero_wait_returns() {
        let clock = leaked_clock();
        let mut delay = BusyWaitDelay::new(clock, ThreadTimer::new(clock));

        delay.wait(0);

        assert!(!delay.timer().is_armed());
        assert_eq!(delay.timer().arm_count, 1);
    }
}
