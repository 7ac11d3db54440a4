//! Human-readable rendering of numeric results.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;
pub const DEFAULT_MASS_DECIMALS: usize = 3;

/// Below/above these decimal exponents values switch to scientific notation.
const MIN_FIXED_EXPONENT: i32 = -4;
const MAX_FIXED_EXPONENT: i32 = 15;

/// Controls how results are rendered. The raw values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub significant_digits: usize,
    pub mass_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            mass_decimals: DEFAULT_MASS_DECIMALS,
        }
    }
}

/// Formats `value` with at most `digits` significant digits, trimming
/// trailing zeros.
///
/// ```
/// use chemcalc::display::format_significant;
/// assert_eq!(format_significant(273.15, 6), "273.15");
/// assert_eq!(format_significant(1.0 / 3.0, 6), "0.333333");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    // Take the exponent after rounding so 9.999995e-5 and 1e-4 pick the
    // same notation.
    let scientific = format!("{:.*e}", digits - 1, value);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);

    if !(MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        return trim_scientific(&scientific);
    }

    let last_digit = exponent - (digits as i32 - 1);
    if last_digit >= 0 {
        // Integer part already carries every significant digit.
        let scale = 10f64.powi(last_digit);
        format!("{:.0}", (value / scale).round() * scale)
    } else {
        trim_fraction(&format!("{:.*}", (-last_digit) as usize, value))
    }
}

/// Formats a molar mass in g/mol with a fixed number of decimals.
pub fn format_mass(grams_per_mole: f64, decimals: usize) -> String {
    format!("{grams_per_mole:.decimals$} g/mol")
}

fn trim_fraction(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn trim_scientific(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None => s.to_string(),
    }
}
