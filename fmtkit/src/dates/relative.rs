// "2 days ago" / "in a month" phrasing.
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436875;
const DAYS_PER_YEAR: f64 = 365.2425;

/// Describes the distance between `date` and `now` in words.
///
/// Thresholds (after rounding): up to 44 seconds is "a few seconds", up to
/// 89 seconds "a minute", up to 44 minutes "N minutes", up to 89 minutes
/// "an hour", up to 21 hours "N hours", up to 35 hours "a day", up to 25 days
/// "N days", up to 45 days "a month", up to 10 months "N months", up to 17
/// months "a year", and "N years" beyond that.
///
/// Future dates read "in ...", past ones "... ago", unless `without_suffix`.
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>, without_suffix: bool) -> String {
    let delta_ms = (date - now).num_milliseconds();
    let is_future = delta_ms > 0;
    let seconds = (delta_ms as f64 / 1000.0).abs();
    let days = seconds / SECONDS_PER_DAY;

    let minutes = (seconds / 60.0).round() as i64;
    let hours = (seconds / 3600.0).round() as i64;
    let whole_days = days.round() as i64;
    let months = (days / DAYS_PER_MONTH).round() as i64;
    let years = (days / DAYS_PER_YEAR).round() as i64;
    let seconds = seconds.round() as i64;

    let phrase = if seconds <= 44 {
        "a few seconds".to_string()
    } else if seconds <= 89 {
        "a minute".to_string()
    } else if minutes <= 44 {
        counted(minutes, "a minute", "minutes")
    } else if minutes <= 89 {
        "an hour".to_string()
    } else if hours <= 21 {
        counted(hours, "an hour", "hours")
    } else if hours <= 35 {
        "a day".to_string()
    } else if whole_days <= 25 {
        counted(whole_days, "a day", "days")
    } else if whole_days <= 45 {
        "a month".to_string()
    } else if months <= 10 {
        counted(months, "a month", "months")
    } else if months <= 17 {
        "a year".to_string()
    } else {
        counted(years, "a year", "years")
    };

    if without_suffix {
        phrase
    } else if is_future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn counted(n: i64, one: &str, unit: &str) -> String {
    if n <= 1 {
        one.to_string()
    } else {
        format!("{} {}", n, unit)
    }
}
