//! Task classification: fixed appointment or floating work.
//!
//! A task is an appointment when its `appointmentStartDate` parses. A task
//! that claims to be an appointment (by commitment type or by carrying a
//! start date) but has no usable start is demoted to floating work rather
//! than dropped; the demotion is reported, never silent.

use chrono::NaiveDateTime;

use crate::clock::{add_minutes, minute_of_day, parse_timestamp};
use crate::config::SchedulerConfig;
use crate::models::{Coordinates, Task};

/// Why a task is floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingReason {
    /// No appointment semantics at all.
    Unanchored,
    /// Declared as an appointment, but the start date is missing or unparseable.
    UnparseableAppointment,
}

/// Result of classifying one task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskClass {
    /// Immovable appointment.
    Appointment(AppointmentEvent),
    /// Work placed wherever it fits.
    Floating(FloatingReason),
}

/// A fixed appointment on the resource's day.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentEvent {
    /// Appointment task ID.
    pub task_id: String,
    /// Position of the task in the input task list.
    pub task_index: usize,
    /// Original start.
    pub start: NaiveDateTime,
    /// `start + duration`.
    pub end: NaiveDateTime,
    /// Duration (minutes).
    pub duration_minutes: f64,
    /// Appointment location, if known.
    pub location: Option<Coordinates>,
}

impl AppointmentEvent {
    /// Start as minutes from midnight of its own day.
    pub fn start_minute(&self) -> f64 {
        minute_of_day(&self.start)
    }

    /// End as minutes from the same midnight; exceeds 1440 when the
    /// appointment runs past midnight.
    pub fn end_minute(&self) -> f64 {
        self.start_minute() + self.duration_minutes
    }
}

/// A queued floating task.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingStop {
    /// Task ID.
    pub task_id: String,
    /// Position of the task in the input task list.
    pub task_index: usize,
    /// Duration (minutes).
    pub duration_minutes: f64,
    /// Task location, if known.
    pub location: Option<Coordinates>,
}

impl FloatingStop {
    /// Builds a queue entry from a task.
    pub fn from_task(task: &Task, task_index: usize, config: &SchedulerConfig) -> Self {
        Self {
            task_id: task.task_id.clone(),
            task_index,
            duration_minutes: task.duration_minutes(config.default_duration_minutes),
            location: task.coordinates(),
        }
    }
}

/// Classifies a task as appointment or floating.
///
/// ```
/// use u_field_schedule::SchedulerConfig;
/// use u_field_schedule::models::Task;
/// use u_field_schedule::scheduler::{classify_task, FloatingReason, TaskClass};
///
/// let config = SchedulerConfig::default();
/// let fixed = Task::new("A").with_appointment_start("2026-10-19T09:00:00");
/// assert!(matches!(classify_task(&fixed, 0, &config), TaskClass::Appointment(_)));
///
/// let broken = Task::new("B").with_commitment_type("Appointment");
/// assert_eq!(
///     classify_task(&broken, 1, &config),
///     TaskClass::Floating(FloatingReason::UnparseableAppointment)
/// );
/// ```
pub fn classify_task(task: &Task, task_index: usize, config: &SchedulerConfig) -> TaskClass {
    let declared_date = task
        .appointment_start_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let duration_minutes = task.duration_minutes(config.default_duration_minutes);
    let bounds = declared_date
        .and_then(parse_timestamp)
        .and_then(|start| Some((start, add_minutes(start, duration_minutes)?)));

    if let Some((start, end)) = bounds {
        return TaskClass::Appointment(AppointmentEvent {
            task_id: task.task_id.clone(),
            task_index,
            start,
            end,
            duration_minutes,
            location: task.coordinates(),
        });
    }

    let appointment_typed = task
        .commitment_type
        .as_deref()
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(&config.appointment_commitment));

    if appointment_typed || declared_date.is_some() {
        TaskClass::Floating(FloatingReason::UnparseableAppointment)
    } else {
        TaskClass::Floating(FloatingReason::Unanchored)
    }
}
