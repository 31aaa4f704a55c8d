// Grouped decimal formatting and parsing with configurable separators.
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::config::NumberSettings;

/// Thousands and decimal separators used when rendering or reading numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub thousands: char,
    pub decimal: char,
}

impl NumberStyle {
    pub fn new(thousands: char, decimal: char) -> Self {
        NumberStyle { thousands, decimal }
    }

    /// `1.234,56`
    pub fn brazilian() -> Self {
        NumberStyle::new('.', ',')
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        NumberStyle::new(',', '.')
    }
}

impl From<&NumberSettings> for NumberStyle {
    fn from(settings: &NumberSettings) -> Self {
        NumberStyle::new(settings.thousand_separator, settings.decimal_separator)
    }
}

/// Formats `value` with `decimals` fraction digits and grouped thousands.
/// Halves round away from zero. Non-finite values give `""`.
///
/// - `1234.5`, 2 => `"1,234.50"`
/// - `1234.5`, 0 => `"1,235"`
pub fn format_decimal(value: f64, decimals: usize, style: &NumberStyle) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value.abs() * factor;
    // Near f64::MAX the scaled value overflows; such values have no fraction to round.
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value.abs()
    };
    let fixed = format!("{:.*}", decimals, rounded);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && rounded != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, style.thousands));
    if let Some(frac) = frac_part {
        out.push(style.decimal);
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Parses a number written in `style`, e.g. `"1.234,56"` with [`NumberStyle::brazilian`].
pub fn parse_decimal(s: &str, style: &NumberStyle) -> Result<f64> {
    let normalized: String = s
        .trim()
        .chars()
        .filter(|c| *c != style.thousands)
        .map(|c| if c == style.decimal { '.' } else { c })
        .collect();

    f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
}
