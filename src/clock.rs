//! The scheduling day and time-of-day arithmetic.
//!
//! All scheduling happens inside a single calendar day. Positions within
//! that day are expressed as minutes from midnight (`f64`, since travel
//! legs are fractional). [`DayClock`] converts those positions back into
//! wall-clock timestamps for the output fields.
//!
//! # Time Model
//! Timestamps are naive local wall-clock values. An RFC 3339 input keeps
//! the wall-clock reading at its own offset; the offset itself is dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::ScheduleError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Output format for `expectedStartDate` / `expectedFinishDate`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Anchors minute offsets to a concrete scheduling day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    day: NaiveDate,
}

impl DayClock {
    /// Creates a clock for the given day.
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }

    /// The scheduling day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Timestamp `minutes` after midnight of the scheduling day, rounded
    /// to the nearest second. Values past 1440 roll into the next day;
    /// offsets beyond chrono's range saturate at its bounds.
    pub fn at_minutes(&self, minutes: f64) -> NaiveDateTime {
        let midnight = self.day.and_time(NaiveTime::MIN);
        add_minutes(midnight, minutes).unwrap_or(if minutes < 0.0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
    }
}

/// `ts + minutes`, rounded to the nearest second. `None` when the offset
/// or the result falls outside chrono's range.
pub fn add_minutes(ts: NaiveDateTime, minutes: f64) -> Option<NaiveDateTime> {
    let seconds = (minutes * 60.0).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_seconds(seconds as i64).and_then(|offset| ts.checked_add_signed(offset))
}

/// Minutes from midnight of a timestamp's own day.
pub fn minute_of_day(ts: &NaiveDateTime) -> f64 {
    ts.time().num_seconds_from_midnight() as f64 / 60.0
}

/// Formats a timestamp for the task record.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a shift boundary in `"H:MM AM/PM"` form into minutes from midnight.
///
/// ```
/// use u_field_schedule::clock::parse_clock_time;
///
/// assert_eq!(parse_clock_time("08:00 AM").unwrap(), 480.0);
/// assert_eq!(parse_clock_time("5:30 pm").unwrap(), 1050.0);
/// assert!(parse_clock_time("17:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> Result<f64, ScheduleError> {
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let time = NaiveTime::parse_from_str(&normalized, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(&normalized, "%I:%M%p"))
        .map_err(|_| ScheduleError::invalid_clock_time(value))?;
    Ok(time.num_seconds_from_midnight() as f64 / 60.0)
}

/// Parses an appointment timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space
/// separator, and a bare `YYYY-MM-DD` (midnight). Returns `None` for
/// anything else; the caller decides what an unparseable date means.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
