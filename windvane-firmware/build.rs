//! Build script for windvane-firmware
//!
//! - Sets up linker search paths and arguments for memory.x
//! - Validates fan.toml at compile time, first as TOML and then with the
//!   firmware's own parser so a file that builds is a file that loads

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate fan.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=fan.toml");

    let config_path = Path::new("fan.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: fan.toml not found!                                      ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds fan.toml as its configuration.              ║\n\
            ║  Please create one in the windvane-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read fan.toml                                  ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in fan.toml                          ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_fan(&config, &mut errors);
    validate_speed(&config, &mut errors);

    // toml accepts number forms (exponents, `+` signs, long fractions) the
    // firmware's parser does not
    if errors.is_empty() {
        if let Err(e) = windvane_core::config::parse_config(&config_content) {
            errors.push(format!(
                "firmware parser rejects fan.toml: {:?} ({})",
                e,
                describe_parse_error(e)
            ));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid fan configuration                                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=fan.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable hint for a firmware parser error
fn describe_parse_error(e: windvane_core::config::ParseError) -> &'static str {
    use windvane_core::config::ParseError;

    match e {
        ParseError::InvalidSection => "only [fan] and [speed] are allowed",
        ParseError::UnknownKey => "key not valid in its section",
        ParseError::InvalidValue => "use plain digits, at most 6 decimals, no sign or exponent",
        ParseError::OutOfRange => "value out of range",
    }
}

/// Check an optional integer key lies within `min..=max`
fn check_integer(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) => {
            if *v < min || *v > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

/// Validate the [fan] section
fn validate_fan(config: &toml::Value, errors: &mut Vec<String>) {
    let fan = match config.get("fan") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[fan] must be a table".to_string());
            return;
        }
        None => return,
    };

    for key in fan.keys() {
        if !["burst_steps", "initial_step_delay_ms"].contains(&key.as_str()) {
            errors.push(format!("[fan] unknown key '{}'", key));
        }
    }

    check_integer(fan, "fan", "burst_steps", 1, u32::MAX as i64, errors);
    check_integer(fan, "fan", "initial_step_delay_ms", 0, u16::MAX as i64, errors);
}

/// Validate the [speed] section
fn validate_speed(config: &toml::Value, errors: &mut Vec<String>) {
    let speed = match config.get("speed") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[speed] must be a table".to_string());
            return;
        }
        None => return,
    };

    for key in speed.keys() {
        if !["min_step_delay_ms", "adc_max", "scale", "scale_num", "scale_den"]
            .contains(&key.as_str())
        {
            errors.push(format!("[speed] unknown key '{}'", key));
        }
    }

    check_integer(speed, "speed", "min_step_delay_ms", 1, u16::MAX as i64, errors);
    check_integer(speed, "speed", "adc_max", 1, u16::MAX as i64, errors);
    check_integer(speed, "speed", "scale_num", 0, u32::MAX as i64, errors);
    check_integer(speed, "speed", "scale_den", 1, u32::MAX as i64, errors);

    match speed.get("scale") {
        None | Some(toml::Value::Integer(_)) => {}
        Some(toml::Value::Float(f)) => {
            if *f < 0.0 {
                errors.push("[speed] scale must not be negative".to_string());
            }
        }
        Some(_) => errors.push("[speed] scale must be a number".to_string()),
    }

    if speed.contains_key("scale")
        && (speed.contains_key("scale_num") || speed.contains_key("scale_den"))
    {
        errors.push("[speed] set either scale or scale_num/scale_den".to_string());
    }
}
