//! Shared helper utilities for factory methods.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Counter for generating unique names, phone numbers and other keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Placeholder stored in `password_hash` columns by the factories.
///
/// It is not a valid PHC string, so logins against factory rows always fail
/// unless a test sets a real hash.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Builds a UTC instant on a fixed test date.
///
/// # Arguments
/// - `hour` - Hour of day (0-23)
/// - `minute` - Minute of hour (0-59)
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, hour, minute, 0)
        .single()
        .unwrap()
}

/// The fixed test date used by `at`.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
}
