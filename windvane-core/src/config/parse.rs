//! Minimal parser for `fan.toml`
//!
//! Handles only the subset of TOML the fan configuration uses. It does NOT
//! support the full TOML spec.
//!
//! Supported:
//! - `[fan]` and `[speed]` section headers
//! - `key = value` pairs with unsigned integer values
//! - decimal values for `scale` (e.g. `0.024`)
//! - comments (`# ...`), whole-line or trailing
//!
//! Keys missing from the file keep their defaults.

use super::types::FanConfig;

/// Most fractional digits accepted in a decimal value
const MAX_FRACTION_DIGITS: u32 = 6;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Value could not be parsed
    InvalidValue,
    /// Value parsed but outside the accepted range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Fan,
    Speed,
}

/// Parse `fan.toml` text into a validated [`FanConfig`]
pub fn parse_config(input: &str) -> Result<FanConfig, ParseError> {
    let mut config = FanConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let name = line
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "fan" => Ok(Section::Fan),
        "speed" => Ok(Section::Speed),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut FanConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Fan, "burst_steps") => config.burst_steps = parse_u32(value)?,
        (Section::Fan, "initial_step_delay_ms") => {
            config.initial_step_delay_ms = parse_u16(value)?
        }
        (Section::Speed, "min_step_delay_ms") => config.min_step_delay_ms = parse_u16(value)?,
        (Section::Speed, "adc_max") => config.adc_max = parse_u16(value)?,
        (Section::Speed, "scale") => {
            let (num, den) = parse_decimal(value)?;
            config.speed_scale_num = num;
            config.speed_scale_den = den;
        }
        (Section::Speed, "scale_num") => config.speed_scale_num = parse_u32(value)?,
        (Section::Speed, "scale_den") => config.speed_scale_den = parse_u32(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Unsigned integer, allowing TOML's `1_000` digit separators
fn parse_u32(value: &str) -> Result<u32, ParseError> {
    if value.is_empty() || value.starts_with('_') || value.ends_with('_') {
        return Err(ParseError::InvalidValue);
    }

    let mut acc: u32 = 0;
    for b in value.bytes() {
        match b {
            b'_' => continue,
            b'0'..=b'9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(u32::from(b - b'0')))
                    .ok_or(ParseError::OutOfRange)?;
            }
            _ => return Err(ParseError::InvalidValue),
        }
    }
    Ok(acc)
}

fn parse_u16(value: &str) -> Result<u16, ParseError> {
    let wide = parse_u32(value)?;
    u16::try_from(wide).map_err(|_| ParseError::OutOfRange)
}

/// Parse `int.frac` into a `(numerator, denominator)` pair
fn parse_decimal(value: &str) -> Result<(u32, u32), ParseError> {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => return Ok((parse_u32(value)?, 1)),
    };

    let digits = frac_part.len() as u32;
    if digits == 0 || digits > MAX_FRACTION_DIGITS {
        return Err(ParseError::InvalidValue);
    }
    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidValue);
    }

    let den = 10u32.pow(digits);
    let int = if int_part.is_empty() {
        0
    } else {
        parse_u32(int_part)?
    };
    let frac = parse_u32(frac_part)?;

    let num = int
        .checked_mul(den)
        .and_then(|n| n.checked_add(frac))
        .ok_or(ParseError::OutOfRange)?;

    Ok((num, den))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Windvane fan configuration

[fan]
burst_steps = 1_000        # about half a turn
initial_step_delay_ms = 10

[speed]
min_step_delay_ms = 5
scale = 0.006
adc_max = 4095
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.burst_steps, 1000);
        assert_eq!(config.initial_step_delay_ms, 10);
        assert_eq!(config.min_step_delay_ms, 5);
        assert_eq!(config.speed_scale_num, 6);
        assert_eq!(config.speed_scale_den, 1000);
        assert_eq!(config.adc_max, 4095);
        // 4095 * 0.006 = 24.57
        assert_eq!(config.speed_scale().max_delay_ms(), 24);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(FanConfig::default()));
        assert_eq!(parse_config("# only a comment\n"), Ok(FanConfig::default()));
    }

    #[test]
    fn test_explicit_ratio() {
        let config = parse_config("[speed]\nscale_num = 3\nscale_den = 125\n").unwrap();
        assert_eq!(config.speed_scale_num, 3);
        assert_eq!(config.speed_scale_den, 125);
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(parse_decimal("0.024"), Ok((24, 1000)));
        assert_eq!(parse_decimal(".5"), Ok((5, 10)));
        assert_eq!(parse_decimal("2"), Ok((2, 1)));
        assert_eq!(parse_decimal("1.25"), Ok((125, 100)));
        assert_eq!(parse_decimal("1."), Err(ParseError::InvalidValue));
        assert_eq!(parse_decimal("0.0000001"), Err(ParseError::InvalidValue));
        assert_eq!(parse_decimal("0.-1"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_config("[motor]\n"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[fan\n"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("burst_steps = 10\n"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[fan]\nspeed = 10\n"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[fan]\nburst_steps\n"), Err(ParseError::InvalidValue));
        assert_eq!(
            parse_config("[fan]\nburst_steps = many\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[fan]\ninitial_step_delay_ms = 70000\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(parse_config("[fan]\nburst_steps = 0\n"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_rejects_toml_number_forms_outside_subset() {
        // Valid TOML, but not plain digits with an optional short fraction
        assert_eq!(
            parse_config("[speed]\nscale = 24e-3\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[speed]\nscale = 0.0060000\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[fan]\nburst_steps = +1000\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[speed]\nscale = 0.006000\n").map(|c| c.speed_scale_num),
            Ok(6000)
        );
    }
}
