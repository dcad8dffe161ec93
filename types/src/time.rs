//! Calendar helpers for wizard dates.
//!
//! Dates arrive from the client as free-form strings (`2030-01-31`,
//! `2030-01-31T09:00`, RFC 3339). All comparisons are made against a caller
//! supplied `now` so that validation stays a pure function of its inputs.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WorthyError;

/// Parse a client date string. Date-only input is taken as midnight.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, WorthyError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| WorthyError::InvalidDate(s.to_string()))
}

/// First day of the month containing `now`.
pub fn start_of_month(now: NaiveDateTime) -> NaiveDate {
    now.date().with_day(1).unwrap_or(now.date())
}

/// A month/year pair as picked in the first-payment selector (month is 1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// First day of this month, or an error when `month` is outside 1..=12.
    pub fn first_day(&self) -> Result<NaiveDate, WorthyError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(WorthyError::InvalidMonth {
            month: self.month,
            year: self.year,
        })
    }

    /// Whether this month lies before the month containing `now`.
    pub fn is_before_month_of(&self, now: NaiveDateTime) -> Result<bool, WorthyError> {
        Ok(self.first_day()? < start_of_month(now))
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_date_only_as_midnight() {
        let dt = parse_date_time("2030-05-17").unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(2030, 5, 17).unwrap().and_time(NaiveTime::MIN));
    }

    #[test]
    fn parses_datetime_local_and_rfc3339() {
        assert!(parse_date_time("2030-05-17T08:30").is_ok());
        assert!(parse_date_time("2030-05-17T08:30:00Z").is_ok());
        assert!(parse_date_time("2030-05-17T08:30:00+02:00").is_ok());
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert!(matches!(
            parse_date_time("next tuesday"),
            Err(WorthyError::InvalidDate(_))
        ));
        assert!(parse_date_time("").is_err());
    }

    #[test]
    fn current_month_is_not_in_the_past() {
        let now = at(2026, 10, 19);
        assert!(!MonthYear::new(10, 2026).is_before_month_of(now).unwrap());
        assert!(MonthYear::new(9, 2026).is_before_month_of(now).unwrap());
        assert!(!MonthYear::new(1, 2027).is_before_month_of(now).unwrap());
    }

    #[test]
    fn month_out_of_range_is_error() {
        assert!(MonthYear::new(13, 2030).first_day().is_err());
        assert!(MonthYear::new(0, 2030).first_day().is_err());
    }
}
