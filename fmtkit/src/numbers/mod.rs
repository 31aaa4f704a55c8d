//! Number and currency formatting.
pub mod decimal;

use once_cell::sync::Lazy;
use shared::models::Numeric;

use crate::config::NumberSettings;
use crate::error::Result;

pub use decimal::{format_decimal, parse_decimal, NumberStyle};
pub use shared::utils::is_numeric;

static DEFAULT_FORMATTER: Lazy<NumberFormatter> = Lazy::new(NumberFormatter::default);

/// Formats numbers according to a [`NumberSettings`].
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    style: NumberStyle,
    fraction_digits: usize,
    currency_minor_units: u32,
}

impl NumberFormatter {
    pub fn new(settings: &NumberSettings) -> Self {
        NumberFormatter {
            style: NumberStyle::from(settings),
            fraction_digits: settings.fraction_digits,
            currency_minor_units: settings.currency_minor_units,
        }
    }

    pub fn style(&self) -> &NumberStyle {
        &self.style
    }

    /// Grouped number with the configured fraction digits, or none with `to_int`.
    /// Zero is always formatted; anything else that is not numeric gives `""`.
    pub fn number_format<'a, N: Into<Numeric<'a>>>(&self, value: Option<N>, to_int: bool) -> String {
        let decimals = if to_int { 0 } else { self.fraction_digits };
        let Some(value): Option<Numeric<'a>> = value.map(Into::into) else {
            return String::new();
        };
        if value.is_zero_literal() {
            return format_decimal(0.0, decimals, &self.style);
        }
        value
            .to_f64(true)
            .map_or_else(String::new, |v| format_decimal(v, decimals, &self.style))
    }

    /// Reads a number written in this formatter's style back.
    pub fn parse(&self, text: &str) -> Result<f64> {
        Ok(parse_decimal(text, &self.style)?)
    }

    /// Formats an amount given in minor units (cents).
    pub fn format_currency<'a, N: Into<Numeric<'a>>>(&self, value: Option<N>) -> String {
        let Some(value): Option<Numeric<'a>> = value.map(Into::into) else {
            return String::new();
        };
        if value.is_zero_literal() {
            return format_decimal(0.0, self.fraction_digits, &self.style);
        }
        value.to_f64(true).map_or_else(String::new, |cents| {
            format_decimal(
                cents / f64::from(self.currency_minor_units),
                self.fraction_digits,
                &self.style,
            )
        })
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter::new(&NumberSettings::default())
    }
}

/// Formats a number to 2dp with grouped thousands.
///
/// - `"123456"` => `"123,456.00"`
/// - `"123456"`, `to_int` => `"123,456"`
/// - `0` => `"0.00"`
/// - `"ab78"`, `None` => `""`
pub fn number_format<'a, N: Into<Numeric<'a>>>(value: Option<N>, to_int: bool) -> String {
    DEFAULT_FORMATTER.number_format(value, to_int)
}

/// Alias for [`number_format`].
pub fn format_number<'a, N: Into<Numeric<'a>>>(value: Option<N>, to_int: bool) -> String {
    number_format(value, to_int)
}

/// Formats cents as a currency amount.
///
/// - `123456` => `"1,234.56"`
/// - `"12345600"` => `"123,456.00"`
pub fn format_currency<'a, N: Into<Numeric<'a>>>(value: Option<N>) -> String {
    DEFAULT_FORMATTER.format_currency(value)
}

/// English ordinal suffix: `"st"`, `"nd"`, `"rd"` or `"th"`.
/// Values from 4 to 20 always take `"th"`.
pub fn ordinal_suffix(number: i64) -> &'static str {
    if number > 3 && number < 21 {
        return "th";
    }
    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `1` => `"1st"`, `22` => `"22nd"`.
pub fn nth_number(number: i64) -> String {
    format!("{}{}", number, ordinal_suffix(number))
}
