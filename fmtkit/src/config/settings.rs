// Formatting settings, loaded from the bundled default.json or a user supplied file
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{FormatError, Result};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FormatSettings {
    pub dates: DateSettings,
    pub numbers: NumberSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DateSettings {
    pub date_format: String,
    pub datetime_format: String,
    pub time_format: String,
    /// Unix seconds; numeric inputs below this are treated as invalid.
    pub min_timestamp: i64,
    /// Parsed dates before this day are treated as invalid.
    pub min_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NumberSettings {
    pub thousand_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: usize,
    /// Currency amounts arrive in minor units (cents).
    pub currency_minor_units: u32,
}

impl Default for DateSettings {
    fn default() -> Self {
        DateSettings {
            date_format: "D MMM, YYYY".to_string(),
            datetime_format: "D MMM, YYYY hh:mm a".to_string(),
            time_format: "HH:mm".to_string(),
            min_timestamp: 75_600_000,
            min_date: NaiveDate::from_ymd_opt(1970, 1, 2).unwrap_or_default(),
        }
    }
}

impl Default for NumberSettings {
    fn default() -> Self {
        NumberSettings {
            thousand_separator: ',',
            decimal_separator: '.',
            fraction_digits: 2,
            currency_minor_units: 100,
        }
    }
}

impl FormatSettings {
    /// Loads the configuration embedded at build time from assets/config/default.json.
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: FormatSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded format settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let numbers = &self.numbers;
        if numbers.thousand_separator == numbers.decimal_separator {
            return Err(FormatError::ConfigError(format!(
                "thousand and decimal separators must differ (both '{}')",
                numbers.decimal_separator
            )));
        }
        if numbers.currency_minor_units == 0 {
            return Err(FormatError::ConfigError(
                "currency_minor_units must be greater than 0".to_string(),
            ));
        }
        if numbers.fraction_digits > 10 {
            return Err(FormatError::ConfigError(format!(
                "fraction_digits must be at most 10, got {}",
                numbers.fraction_digits
            )));
        }
        Ok(())
    }
}
