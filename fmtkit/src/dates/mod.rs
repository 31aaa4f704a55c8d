// Date formatting, differences and relative phrasing
pub mod calendar;
pub mod parse;
pub mod pattern;
pub mod relative;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use shared::models::{DateInput, TimeUnit};
use shared::utils::is_numeric;

use crate::config::DateSettings;

pub use calendar::{
    days_until_birthday, diff_in_unit, is_christmas_time, month_name_from_sql_index,
    ChristmasOptions,
};
pub use parse::{parse_date_text, resolve};
pub use pattern::{render, to_strftime};
pub use relative::relative_time;

static DEFAULT_FORMATTER: Lazy<DateFormatter> = Lazy::new(DateFormatter::default);

/// Renders dates with the patterns and validity floor of a [`DateSettings`].
#[derive(Debug, Clone)]
pub struct DateFormatter {
    settings: DateSettings,
}

impl DateFormatter {
    pub fn new(settings: &DateSettings) -> Self {
        DateFormatter {
            settings: settings.clone(),
        }
    }

    /// Resolves `input`, rejecting timestamps below `min_timestamp` and dates
    /// before `min_date`.
    pub fn resolve_checked(&self, input: DateInput<'_>) -> Option<DateTime<Utc>> {
        let seconds = match input {
            DateInput::Timestamp(secs) => Some(secs),
            DateInput::Text(text) if is_numeric(text, false) => text.parse::<i64>().ok(),
            _ => None,
        };
        if let Some(secs) = seconds {
            if secs < self.settings.min_timestamp {
                tracing::debug!(secs, min = self.settings.min_timestamp, "Rejected timestamp below floor");
                return None;
            }
            return DateTime::from_timestamp(secs, 0);
        }

        let resolved = resolve(input);
        if resolved.is_none() {
            tracing::debug!(?input, "Could not parse date input");
        }
        resolved.filter(|dt| {
            let keep = dt.date_naive() >= self.settings.min_date;
            if !keep {
                tracing::debug!(date = %dt, min = %self.settings.min_date, "Rejected date before floor");
            }
            keep
        })
    }

    fn render_with<'a, D: Into<DateInput<'a>>>(
        &self,
        value: Option<D>,
        pattern: Option<&str>,
        fallback: &str,
    ) -> String {
        value
            .and_then(|v| self.resolve_checked(v.into()))
            .map_or_else(String::new, |dt| render(&dt, pattern.unwrap_or(fallback)))
    }

    /// `1602162242` => `"8 Oct, 2020"`
    pub fn format_date<'a, D: Into<DateInput<'a>>>(&self, value: Option<D>, pattern: Option<&str>) -> String {
        self.render_with(value, pattern, &self.settings.date_format)
    }

    /// `1602162242` => `"8 Oct, 2020 01:04 pm"`
    pub fn format_date_time<'a, D: Into<DateInput<'a>>>(
        &self,
        value: Option<D>,
        pattern: Option<&str>,
    ) -> String {
        self.render_with(value, pattern, &self.settings.datetime_format)
    }

    /// `1602162242` => `"13:04"`
    pub fn get_time_from_date<'a, D: Into<DateInput<'a>>>(
        &self,
        value: Option<D>,
        pattern: Option<&str>,
    ) -> String {
        self.render_with(value, pattern, &self.settings.time_format)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        DateFormatter::new(&DateSettings::default())
    }
}

pub fn format_date<'a, D: Into<DateInput<'a>>>(value: Option<D>, pattern: Option<&str>) -> String {
    DEFAULT_FORMATTER.format_date(value, pattern)
}

pub fn format_date_time<'a, D: Into<DateInput<'a>>>(value: Option<D>, pattern: Option<&str>) -> String {
    DEFAULT_FORMATTER.format_date_time(value, pattern)
}

pub fn get_time_from_date<'a, D: Into<DateInput<'a>>>(value: Option<D>, pattern: Option<&str>) -> String {
    DEFAULT_FORMATTER.get_time_from_date(value, pattern)
}

fn resolve_opt<'a, D: Into<DateInput<'a>>>(value: Option<D>) -> Option<DateTime<Utc>> {
    value.and_then(|v| resolve(v.into()))
}

/// Absolute difference in `unit`, truncated. `0` when either side is missing or invalid.
pub fn date_diff<'a, 'b, A, B>(from: Option<A>, to: Option<B>, unit: TimeUnit) -> i64
where
    A: Into<DateInput<'a>>,
    B: Into<DateInput<'b>>,
{
    match (resolve_opt(from), resolve_opt(to)) {
        (Some(a), Some(b)) => diff_in_unit(a, b, unit),
        _ => 0,
    }
}

/// Absolute whole days between two dates.
pub fn days_diff<'a, 'b, A, B>(from: Option<A>, to: Option<B>) -> i64
where
    A: Into<DateInput<'a>>,
    B: Into<DateInput<'b>>,
{
    date_diff(from, to, TimeUnit::Day)
}

/// `"a day ago"`, `"in 3 months"`; just the phrase with `without_suffix`.
pub fn from_now<'a, D: Into<DateInput<'a>>>(value: Option<D>, without_suffix: bool) -> String {
    resolve_opt(value).map_or_else(String::new, |dt| relative_time(dt, Utc::now(), without_suffix))
}

/// Days until the next anniversary of `value`, counted from today.
pub fn birthday_from_now<'a, D: Into<DateInput<'a>>>(value: Option<D>) -> Option<i64> {
    let birth = resolve_opt(value)?.date_naive();
    days_until_birthday(birth, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatSettings;
    use chrono::{Duration, NaiveDate, TimeZone};

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None::<&str>, None), "");
        assert_eq!(format_date(Some("abc"), None), "");
        assert_eq!(format_date(Some(1602162242), None), "8 Oct, 2020");
        assert_eq!(format_date(Some("1602162242"), None), "8 Oct, 2020");
        assert_eq!(format_date(Some("2020-10-08T13:04:02.123Z"), None), "8 Oct, 2020");
        assert_eq!(format_date(Some(1602162242), Some("YYYY-MM-DD")), "2020-10-08");
    }

    #[test]
    fn test_full_month_names() {
        assert_eq!(format_date(Some("October 8, 2020"), None), "8 Oct, 2020");
        assert_eq!(format_date(Some("8 October 2020"), Some("YYYY-MM-DD")), "2020-10-08");
        assert_eq!(days_diff(Some("October 8, 2020"), Some("October 10, 2020")), 2);
    }

    #[test]
    fn test_format_date_floor() {
        assert_eq!(format_date(Some("1000"), None), "");
        assert_eq!(format_date(Some(0), None), "");
        assert_eq!(format_date(Some("Jan 14, 1000"), None), "");
        assert_eq!(format_date(Some("1970-01-01"), None), "");
        assert_eq!(format_date(Some("1970-01-02"), None), "2 Jan, 1970");
    }

    #[test]
    fn test_format_date_time_and_time() {
        assert_eq!(format_date_time(Some(1602162242), None), "8 Oct, 2020 01:04 pm");
        assert_eq!(format_date_time(Some("abc"), None), "");
        assert_eq!(get_time_from_date(Some(1602162242), None), "13:04");
        assert_eq!(get_time_from_date(Some(1602162242), Some("h:mm A")), "1:04 PM");
        assert_eq!(get_time_from_date(None::<i64>, None), "");
    }

    #[test]
    fn test_formatter_from_settings() {
        let settings = FormatSettings::from_json_str(
            r#"{"dates": {"date_format": "DD/MM/YYYY", "min_date": "2000-01-01"}}"#,
        )
        .unwrap();
        let formatter = DateFormatter::new(&settings.dates);
        assert_eq!(formatter.format_date(Some(1602162242), None), "08/10/2020");
        assert_eq!(formatter.format_date(Some("1999-12-31"), None), "");
    }

    #[test]
    fn test_instants_and_naive_dates() {
        let dt = Utc.with_ymd_and_hms(2020, 10, 8, 13, 4, 2).unwrap();
        assert_eq!(format_date(Some(dt), None), "8 Oct, 2020");
        let day = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        assert_eq!(format_date(Some(day), Some("D MMMM YYYY")), "1 March 2021");
    }

    #[test]
    fn test_days_diff() {
        assert_eq!(days_diff(Some("2020-10-08"), Some("2020-10-10")), 2);
        assert_eq!(days_diff(Some("2020-10-10"), Some("2020-10-08")), 2);
        assert_eq!(days_diff(Some("abc"), Some("2020-10-08")), 0);
        assert_eq!(days_diff(None::<&str>, Some("2020-10-08")), 0);
    }

    #[test]
    fn test_date_diff_units() {
        assert_eq!(date_diff(Some("2020-01-01"), Some("2021-07-01"), TimeUnit::Month), 18);
        assert_eq!(date_diff(Some("2020-01-01"), Some("2021-07-01"), TimeUnit::Quarter), 6);
        assert_eq!(date_diff(Some("2020-01-01"), Some("2021-07-01"), TimeUnit::Year), 1);
        assert_eq!(date_diff(Some("2020-01-01"), Some("2020-01-15"), TimeUnit::Week), 2);
        assert_eq!(date_diff(Some(1602162242), Some(1602162302), TimeUnit::Second), 60);
    }

    #[test]
    fn test_from_now() {
        assert_eq!(from_now(None::<&str>, false), "");
        assert_eq!(from_now(Some("abc"), false), "");
        let yesterday = Utc::now() - Duration::days(1);
        assert_eq!(from_now(Some(yesterday), false), "a day ago");
        assert_eq!(from_now(Some(yesterday), true), "a day");
    }

    #[test]
    fn test_birthday_from_now() {
        assert_eq!(birthday_from_now(None::<&str>), None);
        assert_eq!(birthday_from_now(Some("abc")), None);
        assert_eq!(birthday_from_now(Some(Utc::now())), Some(0));
        let days = birthday_from_now(Some("1990-06-15")).unwrap();
        assert!((0..=366).contains(&days));
    }
}
