//! Schedule quality metrics (KPIs).
//!
//! Summarizes one resource's day for the dispatch board.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Windowed / Overflow / Appointments | Assignment counts by placement |
//! | Travel | Sum of travel legs (minutes) |
//! | Busy | Travel + work time (minutes) |
//! | Overrun | Last finish past shift end (minutes, ≥ 0) |
//! | Utilization | Busy / shift length |

use serde::Serialize;

use crate::clock::DayClock;
use crate::models::{Placement, ResourceSchedule, Shift};

/// Day summary for one resource. Time values are minutes.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Pinned appointments.
    pub appointment_count: usize,
    /// Floating tasks placed inside windows.
    pub windowed_count: usize,
    /// Floating tasks placed past the last window.
    pub overflow_count: usize,
    /// Total travel.
    pub total_travel_minutes: f64,
    /// Travel plus work.
    pub busy_minutes: f64,
    /// How far the day runs past shift end.
    pub overrun_minutes: f64,
    /// Busy time over shift length (may exceed 1.0 when overloaded).
    pub utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a resource schedule and its shift.
    pub fn calculate(schedule: &ResourceSchedule, shift: &Shift) -> Self {
        let mut appointment_count = 0;
        let mut windowed_count = 0;
        let mut overflow_count = 0;
        let mut total_travel = 0.0;
        let mut work = 0.0;

        for a in &schedule.assignments {
            match a.placement {
                Placement::Appointment => appointment_count += 1,
                Placement::Window(_) => windowed_count += 1,
                Placement::Overflow => overflow_count += 1,
            }
            total_travel += a.travel_minutes;
            work += a.duration_minutes();
        }

        let shift_end = DayClock::new(schedule.day).at_minutes(shift.end_minute);
        let overrun_minutes = schedule
            .last_finish()
            .filter(|end| *end > shift_end)
            .map(|end| (end - shift_end).num_seconds() as f64 / 60.0)
            .unwrap_or(0.0);

        let busy = total_travel + work;
        let utilization = if shift.length() > 0.0 {
            busy / shift.length()
        } else {
            0.0
        };

        Self {
            appointment_count,
            windowed_count,
            overflow_count,
            total_travel_minutes: total_travel,
            busy_minutes: busy,
            overrun_minutes,
            utilization,
        }
    }
}
