//! Temporal types for financial reporting
//!
//! This module provides the date handling used by the ledger:
//! - Inclusive reporting ranges with end-of-day normalization
//! - Timezone-aware day boundaries for calendar bucketing

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for store-local day boundaries
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Gets the start of day (00:00:00) in this timezone as UTC
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_local_timezone(self.0)
            .single()
            .expect("Invalid timezone conversion")
            .with_timezone(&Utc)
    }

    /// Gets the end of day (23:59:59) in this timezone as UTC
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_hms_opt(23, 59, 59)
            .expect("23:59:59 is always a valid time")
            .and_local_timezone(self.0)
            .single()
            .expect("Invalid timezone conversion")
            .with_timezone(&Utc)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange { start: String, end: String },
}

/// An inclusive date-time interval for financial range queries
///
/// Reporting filters pick calendar dates, so an end bound that lands exactly
/// on midnight means "the whole of that day". Construction widens such a
/// bound to 23:59:59 of the same day; any end bound with an explicit
/// time-of-day is kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportRange {
    /// Creates an inclusive range, normalizing a midnight end bound to end-of-day
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        let end = if end.hour() == 0 && end.minute() == 0 {
            end.date_naive()
                .and_hms_opt(23, 59, 59)
                .expect("23:59:59 is always a valid time")
                .and_utc()
        } else {
            end
        };

        if start > end {
            return Err(TemporalError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Creates the trailing window ending at `anchor` and reaching back `days` days
    pub fn trailing_days(anchor: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: anchor - Duration::days(days),
            end: anchor,
        }
    }

    /// Start of the range (inclusive)
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the range (inclusive)
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true if the timestamp falls within the range
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Human-readable period label, e.g. "2026-07-01 to 2026-07-31"
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.date_naive().format("%Y-%m-%d"),
            self.end.date_naive().format("%Y-%m-%d")
        )
    }

    /// The calendar dates covered by the range, oldest first
    pub fn calendar_dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut day = self.start.date_naive();
        let last = self.end.date_naive();
        while day <= last {
            dates.push(day);
            day = day.succ_opt().expect("date overflow");
        }
        dates
    }
}

/// Returns true if the date falls on Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_midnight_end_widens_to_end_of_day() {
        let start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();

        let range = ReportRange::new(start, end).unwrap();
        assert_eq!(range.end(), Utc.with_ymd_and_hms(2026, 7, 1, 23, 59, 59).unwrap());
        assert!(range.contains(Utc.with_ymd_and_hms(2026, 7, 1, 18, 30, 0).unwrap()));
    }

    #[test]
    fn test_explicit_end_time_is_kept() {
        let start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 7, 2, 12, 15, 0).unwrap();

        let range = ReportRange::new(start, end).unwrap();
        assert_eq!(range.end(), end);
    }

    #[test]
    fn test_range_is_inclusive_on_both_bounds() {
        let start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap();
        let range = ReportRange::new(start, end).unwrap();

        assert!(range.contains(range.start()));
        assert!(range.contains(range.end()));
        assert!(!range.contains(start - Duration::seconds(1)));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 7, 1, 10, 0, 0).unwrap();

        assert!(matches!(
            ReportRange::new(start, end),
            Err(TemporalError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_trailing_days_window() {
        let anchor = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let range = ReportRange::trailing_days(anchor, 30);

        assert_eq!(range.end(), anchor);
        assert_eq!(range.start(), anchor - Duration::days(30));
    }

    #[test]
    fn test_calendar_dates_cover_window() {
        let start = Utc.with_ymd_and_hms(2026, 7, 30, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 2, 20, 0, 0).unwrap();
        let dates = ReportRange::new(start, end).unwrap().calendar_dates();

        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 7, 30).unwrap());
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2026, 8, 2).unwrap());
    }

    #[test]
    fn test_weekday_classification() {
        // 2026-08-03 is a Monday
        assert!(is_weekday(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()));
        assert!(!is_weekday(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()));
        assert!(!is_weekday(NaiveDate::from_ymd_opt(2026, 8, 9).unwrap()));
    }

    #[test]
    fn test_timezone_day_boundaries() {
        let tz = Timezone::default();
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

        let start = tz.start_of_day(date);
        let end = tz.end_of_day(date);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 5, 23, 59, 59).unwrap());
    }
}
