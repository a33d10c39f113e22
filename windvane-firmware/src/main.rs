//! Windvane - Motion Tracking Fan Firmware
//!
//! Main firmware binary for RP2040-based fan heads. Two motion sensors watch
//! adjacent zones and the fan turns toward whichever one last saw movement.
//!
//! Execution contexts, highest priority first:
//!
//! - `SysTick` exception: advances the millisecond clock
//! - `SWI_IRQ_1` interrupt executor: speed configuration on button edges
//! - thread mode: the foreground sensing and stepping loop

#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

use windvane_core::delay::BusyWaitDelay;
use windvane_core::motion::MotionDirectionController;
use windvane_core::speed::scale::DEFAULT_MIN_STEP_DELAY_MS;
use windvane_core::speed::SpeedConfigurator;
use windvane_core::stepper::StepperSequencer;
use windvane_core::FanState;
use windvane_hal_rp2040::{
    BlockingAdcChannel, EdgeButton, Rp2040Input, Rp2040Output, SysTickTimer,
};

mod config;
mod tasks;

/// State shared by the foreground loop and both interrupt contexts
static FAN: FanState = FanState::new(DEFAULT_MIN_STEP_DELAY_MS);

/// Executor for the speed handler, preempting thread mode
static EXECUTOR_SPEED: InterruptExecutor = InterruptExecutor::new();

#[exception]
fn SysTick() {
    FAN.clock.on_tick();
}

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_SPEED.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Windvane firmware starting...");

    let p = embassy_rp::init(Default::default());
    let core = unwrap!(cortex_m::Peripherals::take());

    let config = config::load();
    FAN.step_delay.set(config.initial_step_delay());
    info!("Initial step delay: {}ms", FAN.step_delay.get());

    // Pin map
    // GPIO2-5: stepper phases A-D
    // GPIO6/7: motion sensor zones A/B (active high)
    // GPIO8: speed button (pressed = low)
    // GPIO9/10/11: CCW, CW and configuring indicators
    // GPIO26: speed potentiometer (ADC0)
    let phases = [
        Rp2040Output::new(Output::new(p.PIN_2, Level::Low)),
        Rp2040Output::new(Output::new(p.PIN_3, Level::Low)),
        Rp2040Output::new(Output::new(p.PIN_4, Level::Low)),
        Rp2040Output::new(Output::new(p.PIN_5, Level::Low)),
    ];
    let zone_a = Rp2040Input::new(Input::new(p.PIN_6, Pull::Down));
    let zone_b = Rp2040Input::new(Input::new(p.PIN_7, Pull::Down));
    let button = EdgeButton::new(Input::new(p.PIN_8, Pull::Up));
    let ccw_led = Rp2040Output::new(Output::new(p.PIN_9, Level::Low));
    let cw_led = Rp2040Output::new(Output::new(p.PIN_10, Level::Low));
    let config_led = Rp2040Output::new(Output::new(p.PIN_11, Level::Low));

    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let pot = Channel::new_pin(p.PIN_26, Pull::None);
    let pot = BlockingAdcChannel::new(adc, pot);

    // Speed handler
    let handler = SpeedConfigurator::new(
        button,
        pot,
        config_led,
        &FAN.step_delay,
        config.speed_scale(),
    );

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_SPEED.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::speed_task(handler)).unwrap();

    // Foreground loop
    let timer = SysTickTimer::new(core.SYST, embassy_rp::clocks::clk_sys_freq());
    debug!("SysTick reload: {}", timer.reload());
    let delay = BusyWaitDelay::new(&FAN.clock, timer);

    let mut sequencer = StepperSequencer::new(
        phases,
        ccw_led,
        cw_led,
        delay,
        &FAN.step_delay,
        config.burst_steps,
    );
    let mut controller = MotionDirectionController::new(zone_a, zone_b);

    info!("Watching for motion ({} steps/burst)", sequencer.burst_steps());

    controller.run(&mut sequencer, |report| {
        debug!(
            "Burst {:?}: {} steps, phase {} -> {}",
            report.direction, report.steps, report.start_phase, report.end_phase
        );
    })
}
