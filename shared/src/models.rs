use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::is_numeric;

/// A value that may be a number already or a string holding one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl<'a> Numeric<'a> {
    /// `0`, `0.0` and `"0"` are formatted even though they are falsy.
    pub fn is_zero_literal(&self) -> bool {
        match self {
            Numeric::Int(i) => *i == 0,
            Numeric::Float(f) => *f == 0.0,
            Numeric::Text(s) => *s == "0",
        }
    }

    pub fn as_text(&self) -> Cow<'a, str> {
        match self {
            Numeric::Int(i) => Cow::Owned(i.to_string()),
            Numeric::Float(f) => Cow::Owned(f.to_string()),
            Numeric::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Numeric value, or `None` when the value is falsy or not a number.
    pub fn to_f64(&self, allow_float: bool) -> Option<f64> {
        match self {
            Numeric::Int(0) => None,
            Numeric::Int(i) => Some(*i as f64),
            Numeric::Float(f) if *f == 0.0 || f.is_nan() => None,
            Numeric::Float(_) | Numeric::Text(_) => {
                let text = self.as_text();
                if !is_numeric(&text, allow_float) {
                    return None;
                }
                text.parse::<f64>().ok()
            }
        }
    }
}

impl From<i64> for Numeric<'_> {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric<'_> {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<u32> for Numeric<'_> {
    fn from(value: u32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(value: &'a str) -> Self {
        Numeric::Text(value)
    }
}

impl<'a> From<&'a String> for Numeric<'a> {
    fn from(value: &'a String) -> Self {
        Numeric::Text(value.as_str())
    }
}

/// Anything a date helper accepts: Unix seconds, a date string or an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Timestamp(i64),
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<i32> for DateInput<'_> {
    fn from(value: i32) -> Self {
        DateInput::Timestamp(i64::from(value))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Instant(value.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Character classes used by the password generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub include_lowercase: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: 10,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            include_lowercase: true,
        }
    }
}
