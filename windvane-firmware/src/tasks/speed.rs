//! Speed configuration task
//!
//! Runs on the interrupt executor so the button handler preempts the
//! foreground stepping loop. Each rising edge on the button line runs one
//! blocking configuration session.

use defmt::*;

use windvane_core::speed::SpeedConfigurator;
use windvane_hal_rp2040::{BlockingAdcChannel, EdgeButton, Rp2040Output};

/// Speed handler bound to the RP2040 peripherals
pub type SpeedHandler = SpeedConfigurator<
    'static,
    EdgeButton<'static>,
    BlockingAdcChannel<'static>,
    Rp2040Output<'static>,
>;

/// Speed configuration task
#[embassy_executor::task]
pub async fn speed_task(mut handler: SpeedHandler) {
    let scale = handler.scale();
    info!(
        "Speed task started ({}-{}ms)",
        scale.min_delay_ms(),
        scale.max_delay_ms()
    );

    loop {
        if !handler.button_mut().wait_for_edge().await {
            warn!("Button edge still pending, handling it again");
        }

        let update = handler.on_button_edge();

        if handler.button_mut().is_pending() {
            error!("Speed handler returned without acknowledging the edge");
        }

        match update.latched_ms {
            Some(ms) => info!(
                "Step delay set to {}ms ({} samples)",
                ms, update.conversions
            ),
            None => debug!("Button released before any sample"),
        }

        if update.discarded > 0 {
            warn!("{} ADC conversions failed", update.discarded);
        }
    }
}
