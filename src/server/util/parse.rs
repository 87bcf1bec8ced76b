//! Parsing of client-supplied dates and times.
//!
//! Malformed values become `AppError::BadRequest` so they surface as 400 responses.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};

use crate::server::error::AppError;

const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses a reservation start instant.
///
/// Accepts RFC 3339 (`2026-05-01T10:00:00Z`, `2026-05-01T12:00:00+02:00`) or a local
/// `YYYY-MM-DDTHH:MM[:SS]` / `YYYY-MM-DD HH:MM[:SS]` value, which is read as UTC.
/// Fractional seconds are truncated.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(AppError::BadRequest)` - The value is not a valid timestamp
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc).trunc_subsecs(0));
    }

    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc().trunc_subsecs(0))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid timestamp '{}'", value)))
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Parses a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    let value = value.trim();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid time '{}'", value)))
}

/// Parses a `[start, end)` pair of times of day, rejecting empty or inverted ranges.
pub fn parse_time_range(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime), AppError> {
    let start_time = parse_time(start)?;
    let end_time = parse_time(end)?;

    if start_time >= end_time {
        return Err(AppError::BadRequest(format!(
            "Start time {} must be before end time {}",
            start_time, end_time
        )));
    }

    Ok((start_time, end_time))
}
