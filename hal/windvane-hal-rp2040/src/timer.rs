//! SysTick millisecond timer
//!
//! The embassy time driver runs on the RP2040 TIMER block, which leaves the
//! Cortex-M SysTick free to act as the fan's compare timer. While armed it
//! raises the `SysTick` exception once per millisecond; the firmware's
//! exception handler advances the shared clock.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;

use windvane_hal::PeriodicTimer;

/// Largest value the 24-bit SysTick reload register holds
const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Reload value giving a one-millisecond period at `core_hz`
pub const fn reload_for(core_hz: u32) -> u32 {
    let reload = core_hz / 1000 - 1;
    if reload > MAX_RELOAD {
        MAX_RELOAD
    } else {
        reload
    }
}

/// SysTick configured as a one-millisecond periodic timer
pub struct SysTickTimer {
    syst: SYST,
    reload: u32,
    armed: bool,
}

impl SysTickTimer {
    /// Take SysTick, clocked from the core clock at `core_hz`
    ///
    /// The timer starts disarmed.
    pub fn new(mut syst: SYST, core_hz: u32) -> Self {
        syst.disable_counter();
        syst.disable_interrupt();
        syst.set_clock_source(SystClkSource::Core);

        Self {
            syst,
            reload: reload_for(core_hz),
            armed: false,
        }
    }

    /// Reload value in use
    pub fn reload(&self) -> u32 {
        self.reload
    }
}

impl PeriodicTimer for SysTickTimer {
    fn arm(&mut self) {
        self.syst.set_reload(self.reload);
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.syst.disable_counter();
        self.syst.disable_interrupt();
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_for_core_clock() {
        // 125 MHz default RP2040 system clock
        assert_eq!(reload_for(125_000_000), 124_999);
        // 1 MHz gives the classic 999 compare value
        assert_eq!(reload_for(1_000_000), 999);
        assert_eq!(reload_for(u32::MAX), MAX_RELOAD);
    }
}
