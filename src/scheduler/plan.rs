//! Day planning across all resources.
//!
//! Tasks are partitioned by owner once, then every resource is scheduled
//! independently on the rayon pool. Results are joined in resource input
//! order before anything is written back.

use std::collections::HashMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ResourceScheduler;
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::{Resource, ResourceSchedule, Task};

/// Schedules for every resource with eligible work on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Scheduling day.
    pub day: NaiveDate,
    /// One schedule per resource with eligible tasks, in resource input order.
    pub schedules: Vec<ResourceSchedule>,
}

impl DayPlan {
    /// Finds the schedule for a resource.
    pub fn schedule_for(&self, resource_id: &str) -> Option<&ResourceSchedule> {
        self.schedules.iter().find(|s| s.resource_id == resource_id)
    }

    /// Total assignments across resources.
    pub fn assignment_count(&self) -> usize {
        self.schedules.iter().map(|s| s.assignment_count()).sum()
    }

    /// Resources whose day runs past shift end.
    pub fn overloaded_resources(&self) -> Vec<&str> {
        self.schedules
            .iter()
            .filter(|s| s.is_overloaded())
            .map(|s| s.resource_id.as_str())
            .collect()
    }
}

/// Groups eligible task indices by owning resource, preserving input order.
pub fn partition_by_owner<'t>(
    tasks: &'t [Task],
    eligible_status: &str,
) -> HashMap<&'t str, Vec<usize>> {
    let mut owned: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, task) in tasks.iter().enumerate() {
        if task.task_status.as_deref() != Some(eligible_status) {
            continue;
        }
        if let Some(owner) = task.employee_id.as_deref() {
            owned.entry(owner).or_default().push(i);
        }
    }
    owned
}

/// Plans one day for all resources.
///
/// Resources without eligible tasks are skipped. Fails on the first
/// resource with a malformed shift (see [`crate::validation`]).
pub fn plan_day(
    resources: &[Resource],
    tasks: &[Task],
    day: NaiveDate,
    config: &SchedulerConfig,
) -> Result<DayPlan, ScheduleError> {
    let owned = partition_by_owner(tasks, &config.eligible_status);
    let scheduler = ResourceScheduler::new(config, day);

    info!(
        "Planning {} for {} resources ({} with eligible work)",
        day,
        resources.len(),
        resources
            .iter()
            .filter(|r| owned.contains_key(r.resource_id.as_str()))
            .count()
    );

    let results: Vec<Option<ResourceSchedule>> = resources
        .par_iter()
        .map(|resource| match owned.get(resource.resource_id.as_str()) {
            Some(indices) => scheduler.schedule_partition(resource, tasks, indices),
            None => Ok(None),
        })
        .collect::<Result<_, _>>()?;

    let plan = DayPlan {
        day,
        schedules: results.into_iter().flatten().collect(),
    };
    info!(
        "Planned {} assignments across {} resources",
        plan.assignment_count(),
        plan.schedules.len()
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Placement;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn task(id: &str, owner: &str, minutes: f64) -> Task {
        Task::new(id)
            .with_employee(owner)
            .with_status("Assigned")
            .with_duration(minutes)
    }

    fn resources() -> Vec<Resource> {
        vec![
            Resource::new("R1", "08:00 AM", "05:00 PM"),
            Resource::new("R2", "09:00 AM", "01:00 PM"),
            Resource::new("idle", "08:00 AM", "05:00 PM"),
        ]
    }

    #[test]
    fn test_partition_by_owner() {
        let tasks = vec![
            task("a", "R1", 10.0),
            task("b", "R2", 10.0),
            task("c", "R1", 10.0),
            task("d", "R1", 10.0).with_status("Completed"),
            Task::new("e").with_status("Assigned"),
        ];
        let owned = partition_by_owner(&tasks, "Assigned");
        assert_eq!(owned["R1"], vec![0, 2]);
        assert_eq!(owned["R2"], vec![1]);
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_plan_day_independent_resources() {
        let tasks = vec![
            task("a", "R1", 60.0),
            task("b", "R2", 60.0),
            task("c", "R1", 30.0),
        ];
        let plan = plan_day(&resources(), &tasks, day(), &SchedulerConfig::default()).unwrap();

        // "idle" has no work and produces no schedule
        assert_eq!(plan.schedules.len(), 2);
        assert_eq!(plan.schedules[0].resource_id, "R1");
        assert_eq!(plan.schedules[1].resource_id, "R2");
        assert!(plan.schedule_for("idle").is_none());
        assert_eq!(plan.assignment_count(), 3);

        let r2 = plan.schedule_for("R2").unwrap();
        let b = r2.assignment_for_task("b").unwrap();
        assert_eq!(b.start, day().and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(b.placement, Placement::Window(0));

        let r1 = plan.schedule_for("R1").unwrap();
        let c = r1.assignment_for_task("c").unwrap();
        assert_eq!(c.start, day().and_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_plan_day_reports_overload() {
        let tasks = vec![task("long", "R2", 300.0)]; // 4h shift
        let plan = plan_day(&resources(), &tasks, day(), &SchedulerConfig::default()).unwrap();
        assert_eq!(plan.overloaded_resources(), vec!["R2"]);
    }

    #[test]
    fn test_plan_day_is_idempotent() {
        let tasks = vec![
            task("a", "R1", 45.0).with_location(48.85, 2.35),
            task("b", "R1", 30.0).with_location(48.87, 2.30),
            task("c", "R2", 200.0),
            task("d", "R2", 90.0),
        ];
        let config = SchedulerConfig::default();
        let first = plan_day(&resources(), &tasks, day(), &config).unwrap();
        let second = plan_day(&resources(), &tasks, day(), &config).unwrap();

        for (x, y) in first.schedules.iter().zip(&second.schedules) {
            assert_eq!(x.assignments, y.assignments);
        }
    }

    #[test]
    fn test_plan_day_malformed_shift() {
        let resources = vec![Resource::new("R1", "8", "17")];
        let tasks = vec![task("a", "R1", 30.0)];
        let err = plan_day(&resources, &tasks, day(), &SchedulerConfig::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidClockTime { .. }));
    }
}
