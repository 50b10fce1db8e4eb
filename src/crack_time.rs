//! Brute-force time estimation and human-scale formatting.

use std::fmt;

use crate::magnitude::Magnitude;

const SECONDS_PER_MILLENNIUM: f64 = 60.0 * 60.0 * 24.0 * 365.0 * 1000.0;

/// Units below millennia, each with the factor that converts it into the next.
const UNITS: [(&str, &str, f64); 5] = [
    ("second", "seconds", 60.0),
    ("minute", "minutes", 60.0),
    ("hour", "hours", 24.0),
    ("day", "days", 365.0),
    ("year", "years", 1000.0),
];

/// Estimated time to exhaust the whole search space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CrackTime {
    pub total_combinations: Magnitude,
    pub seconds: Magnitude,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds.is_finite() {
            return f.write_str(&format_duration(self.seconds.to_f64()));
        }
        let millennia = self.seconds.divide(SECONDS_PER_MILLENNIUM);
        write!(f, "{} millennia", millennia)
    }
}

/// Estimates `character_set_size^length / guess_rate` seconds.
///
/// Returns `None` when there is nothing to estimate: an empty password, an
/// empty character set, or a guess rate that is not a positive finite number.
pub fn estimate_crack_time(
    character_set_size: u32,
    length: usize,
    guess_rate: f64,
) -> Option<CrackTime> {
    if character_set_size == 0 || length == 0 {
        return None;
    }
    if !(guess_rate > 0.0 && guess_rate.is_finite()) {
        return None;
    }
    let total_combinations = Magnitude::power(character_set_size, length);
    Some(CrackTime {
        total_combinations,
        seconds: total_combinations.divide(guess_rate),
    })
}

/// Renders a number of seconds in the largest fitting unit, from seconds up
/// to millennia.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "less than 1 second".to_string();
    }

    // Bands are picked on the displayed value, so 59.97 s reads "1 minute".
    let mut value = seconds;
    for (singular, plural, next) in UNITS {
        if round_tenths(value) < next {
            return with_unit(value, singular, plural);
        }
        value /= next;
    }
    with_unit(value, "millennium", "millennia")
}

fn with_unit(value: f64, singular: &str, plural: &str) -> String {
    let shown = format_number(value);
    let unit = if shown == "1" { singular } else { plural };
    format!("{} {}", shown, unit)
}

/// Formats a non-negative number for display.
///
/// - below 1,000: rounded to one decimal, trailing `.0` dropped
/// - below 1e15: rounded to an integer with `,` thousands separators
/// - from 1e15: scientific notation with two decimals, e.g. `1.23e+20`
pub fn format_number(num: f64) -> String {
    let num = num.max(0.0);
    let rounded = round_tenths(num);
    if rounded < 1000.0 {
        return format!("{}", rounded);
    }
    if num < 1e15 {
        return group_thousands(num.round() as u64);
    }
    if num.is_finite() {
        return format_scientific(num.log10());
    }
    "\u{221e}".to_string()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats `10^log10` as `d.dde±x`.
pub(crate) fn format_scientific(log10: f64) -> String {
    if log10 == f64::NEG_INFINITY {
        return "0.00e+0".to_string();
    }
    let mut exponent = log10.floor();
    let mut mantissa = (10f64.powf(log10 - exponent) * 100.0).round() / 100.0;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    let sign = if exponent < 0.0 { '-' } else { '+' };
    format!("{:.2}e{}{}", mantissa, sign, exponent.abs() as u64)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
