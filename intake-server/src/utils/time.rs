//! Time helpers
//!
//! Date parsing and conversion live at the API boundary; repositories only
//! see `i64` Unix millis.

use chrono::{DateTime, NaiveDate, Utc};

use super::{AppError, AppResult};

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Unix millis -> UTC calendar date
pub fn millis_to_utc_date(millis: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
