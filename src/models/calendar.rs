//! Shift and free-time window models.
//!
//! # Time Model
//! All positions are minutes from midnight of the scheduling day.
//! Windows are half-open `[start, end)`: a task ending exactly at
//! `end` fits.
//!
//! A window may be degenerate (`start >= end`) when fixed appointments
//! overlap. Degenerate windows are kept in sequence so the appointment
//! that closes them is still pinned; they simply admit nothing.

use serde::{Deserialize, Serialize};

use crate::clock::parse_clock_time;
use crate::error::ScheduleError;

/// A resource's working day `[start_minute, end_minute]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift start (minutes from midnight).
    pub start_minute: f64,
    /// Shift end (minutes from midnight).
    pub end_minute: f64,
}

impl Shift {
    /// Creates a shift from minute offsets.
    pub fn new(start_minute: f64, end_minute: f64) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Parses `"H:MM AM/PM"` boundaries.
    pub fn parse(start: &str, end: &str) -> Result<Self, ScheduleError> {
        Ok(Self::new(parse_clock_time(start)?, parse_clock_time(end)?))
    }

    /// Shift length (minutes). Negative for a shift that ends before it starts.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end_minute - self.start_minute
    }
}

/// A span of availability between two anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minutes, inclusive).
    pub start: f64,
    /// Interval end (minutes, exclusive for starts, inclusive for finishes).
    pub end: f64,
    /// Index of the appointment that closes this window.
    /// `None` for the trailing window that runs to shift end.
    pub anchor: Option<usize>,
}

impl TimeWindow {
    /// Creates a window closed by the appointment at `anchor`.
    pub fn anchored(start: f64, end: f64, anchor: usize) -> Self {
        Self {
            start,
            end,
            anchor: Some(anchor),
        }
    }

    /// Creates the trailing window.
    pub fn trailing(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            anchor: None,
        }
    }

    /// Window length (minutes). Negative when appointments overlap.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether no task can fit.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.length() <= 0.0
    }

    /// Whether `[start, finish)` lies inside this window.
    pub fn admits(&self, start: f64, finish: f64) -> bool {
        start >= self.start && finish <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_parse() {
        let shift = Shift::parse("08:00 AM", "05:00 PM").unwrap();
        assert_eq!(shift.start_minute, 480.0);
        assert_eq!(shift.end_minute, 1020.0);
        assert_eq!(shift.length(), 540.0);
    }

    #[test]
    fn test_shift_parse_error_names_value() {
        let err = Shift::parse("08:00 AM", "5pm").unwrap_err();
        assert!(err.to_string().contains("5pm"));
    }

    #[test]
    fn test_time_window() {
        let w = TimeWindow::anchored(480.0, 540.0, 0);
        assert_eq!(w.length(), 60.0);
        assert!(!w.is_exhausted());
        assert!(w.admits(480.0, 540.0)); // exact fit
        assert!(!w.admits(479.0, 500.0));
        assert!(!w.admits(500.0, 541.0));
    }

    #[test]
    fn test_degenerate_window() {
        let w = TimeWindow::anchored(600.0, 570.0, 1); // overlapping appointments
        assert!(w.is_exhausted());
        assert!(TimeWindow::trailing(600.0, 600.0).is_exhausted());
    }
}
