//! Configuration loading
//!
//! The configuration is compiled in from `fan.toml` and was already checked
//! by the build script, so a parse failure here means the two disagree.
//! In that case the firmware falls back to the built-in defaults.

use defmt::*;

use windvane_core::config::{parse_config, FanConfig};

/// Embedded configuration (compiled into firmware)
/// Edit fan.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../fan.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> FanConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Loaded fan.toml: {} steps/burst, scale {}/{}, floor {}ms",
                config.burst_steps,
                config.speed_scale_num,
                config.speed_scale_den,
                config.min_step_delay_ms
            );
            config
        }
        Err(e) => {
            error!("Failed to parse fan.toml: {:?}", e);
            warn!("Using built-in defaults");
            FanConfig::default()
        }
    }
}
