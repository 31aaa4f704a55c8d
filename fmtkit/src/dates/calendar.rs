// Calendar arithmetic: unit differences, birthdays, the holiday window and month names.
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use shared::models::TimeUnit;

use super::pattern;

/// Absolute difference between two instants in whole `unit`s, truncated.
///
/// Month, quarter and year count calendar months, so Jan 31 to Feb 29 is
/// one month.
pub fn diff_in_unit(a: DateTime<Utc>, b: DateTime<Utc>, unit: TimeUnit) -> i64 {
    let (early, late) = if a <= b { (a, b) } else { (b, a) };
    let delta = late - early;
    match unit {
        TimeUnit::Millisecond => delta.num_milliseconds(),
        TimeUnit::Second => delta.num_seconds(),
        TimeUnit::Minute => delta.num_minutes(),
        TimeUnit::Hour => delta.num_hours(),
        TimeUnit::Day => delta.num_days(),
        TimeUnit::Week => delta.num_weeks(),
        TimeUnit::Month => whole_months(early, late),
        TimeUnit::Quarter => whole_months(early, late) / 3,
        TimeUnit::Year => whole_months(early, late) / 12,
    }
}

fn whole_months(early: DateTime<Utc>, late: DateTime<Utc>) -> i64 {
    let mut months = i64::from(late.year() - early.year()) * 12 + i64::from(late.month())
        - i64::from(early.month());
    while months > 0 {
        let reached = u32::try_from(months)
            .ok()
            .and_then(|m| early.checked_add_months(Months::new(m)))
            .is_some_and(|candidate| candidate <= late);
        if reached {
            break;
        }
        months -= 1;
    }
    months.max(0)
}

/// Days from `today` until the next anniversary of `birth`; `0` on the day itself.
/// A Feb 29 birthday falls on Feb 28 in common years.
pub fn days_until_birthday(birth: NaiveDate, today: NaiveDate) -> Option<i64> {
    let this_year = anniversary(birth, today.year())?;
    let next = if this_year < today {
        anniversary(birth, today.year() + 1)?
    } else {
        this_year
    };
    Some((next - today).num_days())
}

fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), 28))
}

/// The end-of-year holiday window and the day to test against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChristmasOptions {
    /// First day (inclusive) in December.
    pub december_start_day: u32,
    /// Last day (inclusive) in January.
    pub january_end_day: u32,
    /// Defaults to today (UTC).
    pub date_to_check: Option<NaiveDate>,
}

impl Default for ChristmasOptions {
    fn default() -> Self {
        ChristmasOptions {
            december_start_day: 23,
            january_end_day: 5,
            date_to_check: None,
        }
    }
}

impl ChristmasOptions {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match date.month() {
            12 => date.day() >= self.december_start_day,
            1 => date.day() <= self.january_end_day,
            _ => false,
        }
    }
}

pub fn is_christmas_time(options: &ChristmasOptions) -> bool {
    let date = options
        .date_to_check
        .unwrap_or_else(|| Utc::now().date_naive());
    options.contains(date)
}

/// Name of a 1-based month (as SQL returns it), formatted with `pattern`
/// (default `MMM`). Out-of-range indexes give `""`.
///
/// - `1` => `"Jan"`
/// - `12`, `"MMMM"` => `"December"`
pub fn month_name_from_sql_index(index: u32, pattern: Option<&str>) -> String {
    NaiveDate::from_ymd_opt(2023, index, 1).map_or_else(String::new, |date| {
        let dt = date.and_time(chrono::NaiveTime::MIN).and_utc();
        pattern::render(&dt, pattern.unwrap_or("MMM"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_diff_in_days_is_absolute() {
        let a = Utc.with_ymd_and_hms(2020, 10, 8, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2020, 10, 10, 0, 0, 0).unwrap();
        assert_eq!(diff_in_unit(a, b, TimeUnit::Day), 2);
        assert_eq!(diff_in_unit(b, a, TimeUnit::Day), 2);
        assert_eq!(diff_in_unit(a, a, TimeUnit::Day), 0);
    }

    #[test]
    fn test_diff_truncates() {
        let a = Utc.with_ymd_and_hms(2020, 10, 8, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2020, 10, 9, 23, 59, 59).unwrap();
        assert_eq!(diff_in_unit(a, b, TimeUnit::Day), 1);
        assert_eq!(diff_in_unit(a, b, TimeUnit::Hour), 47);
        assert_eq!(diff_in_unit(a, b, TimeUnit::Week), 0);
    }

    #[test]
    fn test_diff_calendar_months() {
        let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let feb29 = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let mar30 = Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap();
        assert_eq!(diff_in_unit(jan31, feb29, TimeUnit::Month), 1);
        assert_eq!(diff_in_unit(jan31, mar30, TimeUnit::Month), 1);
        let later = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(diff_in_unit(jan31, later, TimeUnit::Month), 30);
        assert_eq!(diff_in_unit(jan31, later, TimeUnit::Quarter), 10);
        assert_eq!(diff_in_unit(jan31, later, TimeUnit::Year), 2);
    }

    #[test]
    fn test_days_until_birthday() {
        let today = ymd(2023, 8, 23);
        assert_eq!(days_until_birthday(ymd(1990, 8, 23), today), Some(0));
        assert_eq!(days_until_birthday(ymd(1990, 8, 27), today), Some(4));
        // 2023-08-23 -> 2024-08-19 crosses Feb 29.
        assert_eq!(days_until_birthday(ymd(1990, 8, 19), today), Some(362));
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(days_until_birthday(ymd(2000, 2, 29), ymd(2023, 2, 27)), Some(1));
        assert_eq!(days_until_birthday(ymd(2000, 2, 29), ymd(2024, 2, 27)), Some(2));
    }

    fn check(date: NaiveDate) -> bool {
        is_christmas_time(&ChristmasOptions {
            date_to_check: Some(date),
            ..ChristmasOptions::default()
        })
    }

    #[test]
    fn test_christmas_window() {
        assert!(check(ymd(2023, 12, 23)));
        assert!(check(ymd(2023, 12, 31)));
        assert!(check(ymd(2024, 1, 5)));
        assert!(!check(ymd(2024, 1, 6)));
        assert!(!check(ymd(2023, 12, 22)));
        assert!(!check(ymd(2023, 7, 1)));
    }

    #[test]
    fn test_custom_christmas_window() {
        let options = ChristmasOptions {
            december_start_day: 1,
            january_end_day: 10,
            date_to_check: None,
        };
        assert!(options.contains(ymd(2023, 12, 1)));
        assert!(options.contains(ymd(2024, 1, 10)));
        assert!(!options.contains(ymd(2024, 1, 11)));
    }

    #[test]
    fn test_month_name_from_sql_index() {
        assert_eq!(month_name_from_sql_index(1, None), "Jan");
        assert_eq!(month_name_from_sql_index(12, Some("MMMM")), "December");
        assert_eq!(month_name_from_sql_index(0, None), "");
        assert_eq!(month_name_from_sql_index(13, None), "");
    }
}
