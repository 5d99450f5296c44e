//! Free-time window construction.
//!
//! `N` sorted appointments split a shift into `N + 1` windows:
//! `[shift start, a1.start)`, `[a1.end, a2.start)`, ..., `[aN.end, shift end]`.
//! Overlapping appointments yield degenerate windows (`start > end`),
//! which are kept so every appointment still closes exactly one window.

use super::AppointmentEvent;
use crate::models::{Shift, TimeWindow};

/// Builds the ordered free-time windows for a shift.
///
/// `appointments` must be sorted by start; window `i` (for `i < N`) is
/// anchored to `appointments[i]`.
///
/// ```
/// use u_field_schedule::models::Shift;
/// use u_field_schedule::scheduler::build_windows;
///
/// let windows = build_windows(&Shift::new(480.0, 1020.0), &[]);
/// assert_eq!(windows.len(), 1);
/// assert_eq!((windows[0].start, windows[0].end), (480.0, 1020.0));
/// ```
pub fn build_windows(shift: &Shift, appointments: &[AppointmentEvent]) -> Vec<TimeWindow> {
    let mut windows = Vec::with_capacity(appointments.len() + 1);
    let mut open = shift.start_minute;

    for (i, appt) in appointments.iter().enumerate() {
        windows.push(TimeWindow::anchored(open, appt.start_minute(), i));
        open = appt.end_minute();
    }
    windows.push(TimeWindow::trailing(open, shift.end_minute));

    windows
}

/// Sorts appointments by time of day (stable).
pub fn sort_appointments(appointments: &mut [AppointmentEvent]) {
    appointments.sort_by(|a, b| a.start_minute().total_cmp(&b.start_minute()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn appt(id: &str, h: u32, m: u32, duration: f64) -> AppointmentEvent {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap();
        AppointmentEvent {
            task_id: id.to_string(),
            task_index: 0,
            start,
            end: start + Duration::minutes(duration as i64),
            duration_minutes: duration,
            location: None,
        }
    }

    #[test]
    fn test_windows_around_appointments() {
        let shift = Shift::new(480.0, 1020.0);
        let appts = vec![appt("A", 9, 0, 30.0), appt("B", 13, 0, 60.0)];
        let w = build_windows(&shift, &appts);

        assert_eq!(w.len(), 3);
        assert_eq!(w[0], TimeWindow::anchored(480.0, 540.0, 0));
        assert_eq!(w[1], TimeWindow::anchored(570.0, 780.0, 1));
        assert_eq!(w[2], TimeWindow::trailing(840.0, 1020.0));
    }

    #[test]
    fn test_overlapping_appointments_degenerate_window() {
        let shift = Shift::new(480.0, 1020.0);
        // A runs 09:00-10:30, B starts 10:00
        let appts = vec![appt("A", 9, 0, 90.0), appt("B", 10, 0, 30.0)];
        let w = build_windows(&shift, &appts);

        assert_eq!(w[1].start, 630.0);
        assert_eq!(w[1].end, 600.0);
        assert!(w[1].is_exhausted());
        assert_eq!(w[1].anchor, Some(1));
    }

    #[test]
    fn test_back_to_back_appointments() {
        let shift = Shift::new(480.0, 1020.0);
        let appts = vec![appt("A", 9, 0, 60.0), appt("B", 10, 0, 30.0)];
        let w = build_windows(&shift, &appts);
        assert_eq!(w[1].length(), 0.0);
        assert!(w[1].is_exhausted());
    }

    #[test]
    fn test_appointment_before_shift() {
        let shift = Shift::new(480.0, 1020.0);
        let w = build_windows(&shift, &[appt("A", 7, 0, 30.0)]);
        assert!(w[0].is_exhausted()); // [480, 420)
        assert_eq!(w[1], TimeWindow::trailing(450.0, 1020.0));
    }

    #[test]
    fn test_sort_appointments_stable() {
        let mut appts = vec![
            appt("late", 14, 0, 30.0),
            appt("first", 9, 0, 30.0),
            appt("second", 9, 0, 15.0),
        ];
        sort_appointments(&mut appts);
        let order: Vec<_> = appts.iter().map(|a| a.task_id.as_str()).collect();
        assert_eq!(order, ["first", "second", "late"]);
    }
}
