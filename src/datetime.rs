//! Millisecond timestamp arithmetic used by the grid mapping.
//!
//! Timestamps are milliseconds since the Unix epoch. Day boundaries are taken
//! in UTC so a column's origin does not move with the host time zone.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Calendar units the grid arithmetic works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn duration(self, amount: i64) -> Option<Duration> {
        match self {
            TimeUnit::Minutes => Duration::try_minutes(amount),
            TimeUnit::Hours => Duration::try_hours(amount),
            TimeUnit::Days => Duration::try_days(amount),
        }
    }
}

/// Milliseconds in `amount` of `unit`, or `None` past chrono's range.
#[inline]
pub fn millis_from(unit: TimeUnit, amount: i64) -> Option<i64> {
    unit.duration(amount).map(|d| d.num_milliseconds())
}

/// Milliseconds in a fractional amount of `unit`, rounded to the nearest ms.
///
/// `None` for non-finite amounts or results outside `i64`.
pub fn millis_from_fractional(unit: TimeUnit, amount: f64) -> Option<i64> {
    let millis = (millis_from(unit, 1)? as f64 * amount).round();
    (millis.is_finite() && millis.abs() < i64::MAX as f64).then_some(millis as i64)
}

/// Add `amount` of `unit` to a timestamp, `None` on overflow.
#[inline]
pub fn add_duration(timestamp_ms: i64, unit: TimeUnit, amount: i64) -> Option<i64> {
    timestamp_ms.checked_add(millis_from(unit, amount)?)
}

/// Midnight (UTC) of the day containing `timestamp_ms`.
pub fn start_of_day(timestamp_ms: i64) -> Option<i64> {
    let date = DateTime::from_timestamp_millis(timestamp_ms)?.date_naive();
    Some(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Whether both timestamps fall on the same UTC day.
pub fn same_day(a_ms: i64, b_ms: i64) -> bool {
    match (start_of_day(a_ms), start_of_day(b_ms)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Midnight (UTC) of a calendar date as a timestamp.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Render a timestamp as `YYYY-MM-DD HH:MM` for logs and CLI output.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("<invalid {timestamp_ms}>"))
}
