//! Financial reporting DTOs

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::temporal::{ReportRange, TemporalError, Timezone};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if !value.is_sign_positive() || value.is_zero() {
        return Err(ValidationError::new("positive"));
    }
    Ok(())
}

/// Inclusive date range query, e.g. `?start=2026-07-01&end=2026-07-31`
///
/// Bare dates widen to full days: the range runs from midnight of `start`
/// through end-of-day of `end`.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RangeQuery {
    /// Builds the inclusive reporting range for the queried dates
    pub fn to_report_range(&self) -> Result<ReportRange, TemporalError> {
        let tz = Timezone::default();
        // The end bound lands on midnight here, which ReportRange widens to
        // the end of that day.
        ReportRange::new(tz.start_of_day(self.start), tz.start_of_day(self.end))
    }
}

/// Trailing-window query for the daily sales series and dashboard
#[derive(Debug, Deserialize)]
pub struct TrailingQuery {
    /// Days to look back (default 30)
    pub days: Option<i64>,
}

impl TrailingQuery {
    pub fn days_or_default(&self) -> i64 {
        self.days.unwrap_or(30)
    }
}

/// Direct expense entry request
#[derive(Debug, Deserialize, Validate)]
pub struct AddExpenseRequest {
    #[validate(length(min = 1, max = 256))]
    pub description: String,
    #[validate(custom(function = positive))]
    pub amount: Decimal,
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    /// Defaults to now when omitted
    pub occurred_at: Option<DateTime<Utc>>,
}
