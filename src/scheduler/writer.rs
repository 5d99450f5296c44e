//! Writes computed times back onto task records.
//!
//! The only step with an effect outside the run. Writing the same plan
//! twice leaves the records unchanged after the first pass.

use tracing::warn;

use super::DayPlan;
use crate::clock::format_timestamp;
use crate::models::{ResourceSchedule, Task};

/// Applies schedules to the task list they were computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleWriter;

impl ScheduleWriter {
    /// Writes every schedule in `plan`. Returns the number of tasks updated.
    pub fn apply(tasks: &mut [Task], plan: &DayPlan) -> usize {
        let mut written = 0;
        for schedule in &plan.schedules {
            written += Self::apply_schedule(tasks, schedule);
        }
        written
    }

    /// Writes one resource's schedule. Returns the number of tasks updated.
    ///
    /// Assignments whose index no longer points at the same task ID are
    /// skipped; the task list must not be reordered between planning and
    /// writing.
    pub fn apply_schedule(tasks: &mut [Task], schedule: &ResourceSchedule) -> usize {
        let mut written = 0;
        for a in &schedule.assignments {
            match tasks.get_mut(a.task_index) {
                Some(task) if task.task_id == a.task_id => {
                    task.expected_start_date = Some(format_timestamp(&a.start));
                    task.expected_finish_date = Some(format_timestamp(&a.end));
                    written += 1;
                }
                _ => warn!(
                    "{}: task {} not found at index {}; skipped",
                    schedule.resource_id, a.task_id, a.task_index
                ),
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::models::Resource;
    use crate::scheduler::plan_day;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sample() -> (Vec<Resource>, Vec<Task>) {
        let resources = vec![Resource::new("R1", "08:00 AM", "05:00 PM").with_home(0.0, 0.0)];
        let tasks = vec![
            Task::new("A")
                .with_employee("R1")
                .with_status("Assigned")
                .with_commitment_type("Appointment")
                .with_appointment_start("2026-10-19T09:00:00")
                .with_duration(30.0),
            Task::new("F1").with_employee("R1").with_status("Assigned").with_duration(60.0),
            Task::new("F2").with_employee("R1").with_status("Assigned").with_duration(30.0),
            Task::new("closed")
                .with_employee("R1")
                .with_status("Completed")
                .with_attribute("region", "North"),
        ];
        (resources, tasks)
    }

    #[test]
    fn test_apply_writes_expected_dates() {
        let (resources, mut tasks) = sample();
        let plan = plan_day(&resources, &tasks, day(), &SchedulerConfig::default()).unwrap();

        let written = ScheduleWriter::apply(&mut tasks, &plan);
        assert_eq!(written, 3);

        assert_eq!(tasks[1].expected_start_date.as_deref(), Some("2026-10-19T08:00:00"));
        assert_eq!(tasks[1].expected_finish_date.as_deref(), Some("2026-10-19T09:00:00"));
        assert_eq!(tasks[0].expected_start_date.as_deref(), Some("2026-10-19T09:00:00"));
        assert_eq!(tasks[0].expected_finish_date.as_deref(), Some("2026-10-19T09:30:00"));
        assert_eq!(tasks[2].expected_start_date.as_deref(), Some("2026-10-19T09:30:00"));
        assert_eq!(tasks[2].expected_finish_date.as_deref(), Some("2026-10-19T10:00:00"));
        assert!(!tasks[3].is_scheduled());
    }

    #[test]
    fn test_every_floating_task_gets_times() {
        let (resources, mut tasks) = sample();
        for i in 0..6 {
            tasks.push(
                Task::new(format!("X{i}"))
                    .with_employee("R1")
                    .with_status("Assigned")
                    .with_duration(120.0),
            );
        }
        let plan = plan_day(&resources, &tasks, day(), &SchedulerConfig::default()).unwrap();
        ScheduleWriter::apply(&mut tasks, &plan);

        assert!(tasks
            .iter()
            .filter(|t| t.task_status.as_deref() == Some("Assigned"))
            .all(Task::is_scheduled));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (resources, mut tasks) = sample();
        let config = SchedulerConfig::default();

        let plan = plan_day(&resources, &tasks, day(), &config).unwrap();
        ScheduleWriter::apply(&mut tasks, &plan);
        let once = tasks.clone();

        let plan = plan_day(&resources, &tasks, day(), &config).unwrap();
        ScheduleWriter::apply(&mut tasks, &plan);
        assert_eq!(tasks, once);
    }

    #[test]
    fn test_apply_skips_mismatched_index() {
        let (resources, mut tasks) = sample();
        let plan = plan_day(&resources, &tasks, day(), &SchedulerConfig::default()).unwrap();
        tasks.swap(0, 1);

        let written = ScheduleWriter::apply(&mut tasks, &plan);
        assert_eq!(written, 1); // only F2 still sits at its planned index
    }
}
