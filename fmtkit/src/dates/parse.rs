// Turns DateInput values into UTC instants.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::models::DateInput;
use shared::utils::is_numeric;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// `%b` only takes abbreviations, so full month names get their own `%B` entries.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parses a date string: RFC 3339, ISO-like date/times, `Jan 14, 2020`,
/// `January 14, 2020`, `14 Jan 2020` or `2020/01/14`. Offsets are converted to
/// UTC; strings without one are taken as UTC.
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Resolves an input without any validity floor.
///
/// Integer strings and timestamps are Unix seconds; `0` and `""` are treated
/// as missing.
pub fn resolve(input: DateInput<'_>) -> Option<DateTime<Utc>> {
    match input {
        DateInput::Timestamp(0) => None,
        DateInput::Timestamp(secs) => DateTime::from_timestamp(secs, 0),
        DateInput::Text(text) if is_numeric(text, false) => {
            text.parse::<i64>().ok().and_then(|secs| resolve(DateInput::Timestamp(secs)))
        }
        DateInput::Text(text) => parse_date_text(text),
        DateInput::Instant(dt) => Some(dt),
    }
}
