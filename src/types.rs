//! Core type definitions for compile-time safety.
//!
//! Calendar arithmetic in this crate works on whole local calendar days. The
//! [`CalendarDate`] newtype drops any time or zone component at construction so
//! two values compare equal exactly when year, month and day match.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A local calendar day with no time-of-day or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its parts, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date on the local clock.
    pub fn today() -> Self {
        Self::from(chrono::Local::now())
    }

    /// Get the inner `NaiveDate`.
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Shift by a signed number of days, saturating at the representable range.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map_or(self, Self)
    }

    /// Whole calendar days from `other` to `self` (positive when `self` is later).
    pub fn days_since(&self, other: Self) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(d: CalendarDate) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_time_component_is_dropped() {
        let morning = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap().and_hms_opt(0, 0, 1).unwrap();
        let evening = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(CalendarDate::from(morning), CalendarDate::from(evening));
    }

    #[test]
    fn test_display_and_parse() {
        let d = CalendarDate::from_ymd(2026, 3, 5).unwrap();
        assert_eq!(d.to_string(), "2026-03-05");
        assert_eq!("2026-03-05".parse::<CalendarDate>().unwrap(), d);
        assert!("2026-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_days_since_crosses_dst_boundaries() {
        // US daylight saving starts 2026-03-08; day arithmetic is unaffected
        let before = CalendarDate::from_ymd(2026, 3, 7).unwrap();
        let after = CalendarDate::from_ymd(2026, 3, 9).unwrap();
        assert_eq!(after.days_since(before), 2);
        assert_eq!(before.days_since(after), -2);
        assert_eq!(before.add_days(2), after);
    }

    #[test]
    fn test_serializes_as_iso_string() {
        let d = CalendarDate::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-12-25\"");
    }
}
