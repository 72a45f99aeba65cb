//! Application clock - calendar-day normalization in one fixed time zone.
//!
//! Every "is this today / same day" comparison in the system goes through
//! this module. Comparing raw timestamps across time zones silently produces
//! off-by-one-day results, so instants are converted to the application zone
//! first and days are compared as `NaiveDate` (canonically `YYYY-MM-DD`).

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::errors::{Error, Result};

/// The single time zone all calendar-day math is anchored to (UTC+06:00).
pub const APP_TIMEZONE: Tz = chrono_tz::Asia::Dhaka;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current instant in the application time zone.
#[must_use]
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIMEZONE)
}

/// Today's calendar day in the application time zone.
#[must_use]
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Current hour (0-23) in the application time zone.
#[must_use]
pub fn current_hour() -> u32 {
    now().hour()
}

/// Converts a UTC instant to the calendar day it falls on in the
/// application time zone. This is the only sanctioned way to turn an
/// instant into a day.
#[must_use]
pub fn to_app_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&APP_TIMEZONE).date_naive()
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Canonical `YYYY-MM` key for the month a calendar day falls in.
/// Zero-padded, so lexicographic order equals chronological order.
#[must_use]
pub fn month_key(day: NaiveDate) -> String {
    day.format("%Y-%m").to_string()
}

/// Parses a canonical `YYYY-MM-DD` string, failing fast on anything else.
/// Invalid inputs are rejected with a validation error rather than being
/// coerced to a nonsense date.
pub fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).map_err(|e| Error::Validation {
        message: format!("invalid calendar day '{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn app_date_rolls_over_before_utc_midnight() {
        // 19:00 UTC is already 01:00 the next day in UTC+6.
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
        assert_eq!(
            to_app_date(instant),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn app_date_matches_utc_day_in_the_morning() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 0).unwrap();
        assert_eq!(
            to_app_date(instant),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn day_and_month_keys_are_zero_padded() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(day_key(day), "2024-03-07");
        assert_eq!(month_key(day), "2024-03");
    }

    #[test]
    fn parse_day_round_trips_canonical_keys() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_day(&day_key(day)).unwrap(), day);
    }

    #[test]
    fn parse_day_rejects_garbage() {
        assert!(parse_day("not-a-date").is_err());
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("2024-02-30").is_err());
        assert!(parse_day("").is_err());
    }
}
