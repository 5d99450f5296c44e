//! Single-resource scheduling run.
//!
//! # Algorithm
//!
//! 1. Classify the resource's eligible tasks; sort appointments by start.
//! 2. Build free-time windows from the shift and the appointments.
//! 3. For each window in order: fill it from the floating queue, then pin
//!    the appointment that closes it and move the cursor to its end.
//! 4. Drain the remaining queue past the last window.
//!
//! State (`RouteCursor`, queue) is strictly sequential within a resource.
//! Nothing is shared between resources.

use std::collections::VecDeque;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{
    build_windows, classify_task, drain_overflow, fill_window, sort_appointments,
    AppointmentEvent, FillContext, FloatingReason, FloatingStop, RouteCursor, TaskClass,
};
use crate::clock::DayClock;
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::{
    Assignment, Placement, Resource, ResourceSchedule, Shift, Task, Violation,
};

/// Schedules one resource's day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_field_schedule::SchedulerConfig;
/// use u_field_schedule::models::{Resource, Task};
/// use u_field_schedule::scheduler::ResourceScheduler;
///
/// let config = SchedulerConfig::default();
/// let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let resource = Resource::new("R1", "08:00 AM", "05:00 PM");
/// let tasks = vec![
///     Task::new("F1").with_employee("R1").with_status("Assigned").with_duration(45.0),
/// ];
///
/// let schedule = ResourceScheduler::new(&config, day)
///     .schedule(&resource, &tasks)
///     .unwrap()
///     .expect("resource has eligible work");
/// assert_eq!(schedule.assignment_count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourceScheduler<'a> {
    config: &'a SchedulerConfig,
    clock: DayClock,
}

impl<'a> ResourceScheduler<'a> {
    /// Creates a scheduler for the given day.
    pub fn new(config: &'a SchedulerConfig, day: NaiveDate) -> Self {
        Self {
            config,
            clock: DayClock::new(day),
        }
    }

    /// Schedules `resource` using its eligible tasks from `tasks`.
    ///
    /// Returns `Ok(None)` when the resource has no eligible tasks; such
    /// resources are skipped before their shift is even parsed.
    pub fn schedule(
        &self,
        resource: &Resource,
        tasks: &[Task],
    ) -> Result<Option<ResourceSchedule>, ScheduleError> {
        let owned: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_eligible_for(&resource.resource_id, &self.config.eligible_status))
            .map(|(i, _)| i)
            .collect();
        self.schedule_partition(resource, tasks, &owned)
    }

    /// Schedules `resource` using the pre-partitioned task indices `owned`
    /// (already filtered by owner and status, in input order).
    pub fn schedule_partition(
        &self,
        resource: &Resource,
        tasks: &[Task],
        owned: &[usize],
    ) -> Result<Option<ResourceSchedule>, ScheduleError> {
        if owned.is_empty() {
            return Ok(None);
        }
        let shift = resource.shift()?;
        let mut schedule = ResourceSchedule::new(&resource.resource_id, self.clock.day());

        // Classify
        let mut appointments = Vec::new();
        let mut queue = VecDeque::new();
        for &idx in owned {
            let task = &tasks[idx];
            match classify_task(task, idx, self.config) {
                TaskClass::Appointment(event) => appointments.push(event),
                TaskClass::Floating(reason) => {
                    if reason == FloatingReason::UnparseableAppointment {
                        warn!(
                            "{}: appointment {} has no usable start ({:?}); scheduling as floating",
                            resource.resource_id, task.task_id, task.appointment_start_date
                        );
                        schedule.add_violation(Violation::demoted_appointment(
                            &task.task_id,
                            "appointment start missing or unparseable; scheduled as floating",
                        ));
                    }
                    queue.push_back(FloatingStop::from_task(task, idx, self.config));
                }
            }
        }
        sort_appointments(&mut appointments);
        flag_overlaps(&resource.resource_id, &appointments, &mut schedule);

        // Fill
        let ctx = FillContext {
            resource_id: &resource.resource_id,
            shift,
            clock: self.clock,
            speed_kmh: self.config.average_speed_kmh,
        };
        let mut cursor = RouteCursor::start_of_shift(&shift, resource.home());

        for (i, window) in build_windows(&shift, &appointments).iter().enumerate() {
            for a in fill_window(window, i, &mut queue, &mut cursor, &ctx) {
                schedule.add_assignment(a);
            }
            if let Some(anchor) = window.anchor {
                let appt = &appointments[anchor];
                schedule.add_assignment(pin_appointment(appt, &resource.resource_id));
                cursor.advance(appt.end_minute(), appt.location);
            }
        }

        for a in drain_overflow(&mut queue, &mut cursor, &ctx) {
            flag_overrun(&a, &shift, &self.clock, &mut schedule);
            schedule.add_assignment(a);
        }

        info!(
            "{}: scheduled {} tasks ({} appointments, {} windowed, {} overflow)",
            resource.resource_id,
            schedule.assignment_count(),
            appointments.len(),
            schedule.windowed().count(),
            schedule.overflowed().count()
        );
        Ok(Some(schedule))
    }
}

/// Appointment output: exactly its original bounds.
fn pin_appointment(appt: &AppointmentEvent, resource_id: &str) -> Assignment {
    Assignment {
        task_id: appt.task_id.clone(),
        task_index: appt.task_index,
        resource_id: resource_id.to_string(),
        start: appt.start,
        end: appt.end,
        travel_minutes: 0.0,
        placement: Placement::Appointment,
    }
}

fn flag_overlaps(resource_id: &str, appointments: &[AppointmentEvent], schedule: &mut ResourceSchedule) {
    for pair in appointments.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.end_minute() > next.start_minute() {
            warn!(
                "{}: appointment {} starts before {} ends",
                resource_id, next.task_id, prev.task_id
            );
            schedule.add_violation(Violation::overlapping_appointments(
                &next.task_id,
                format!("starts before appointment '{}' ends", prev.task_id),
            ));
        }
    }
}

fn flag_overrun(a: &Assignment, shift: &Shift, clock: &DayClock, schedule: &mut ResourceSchedule) {
    let shift_end = clock.at_minutes(shift.end_minute);
    if a.end > shift_end {
        let late = (a.end - shift_end).num_seconds() as f64 / 60.0;
        warn!(
            "{}: task {} ends {:.0} minutes after shift end",
            a.resource_id, a.task_id, late
        );
        schedule.add_violation(Violation::shift_overrun(
            &a.task_id,
            format!("ends {late:.0} minutes after shift end"),
        ));
    }
}
