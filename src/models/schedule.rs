//! Per-resource schedule (solution) model.
//!
//! A schedule lists where every eligible task of one resource landed on
//! the scheduling day, plus the soft problems found while building it.
//! Soft problems never abort a run; they are reported so callers can
//! surface overloaded resources or demoted appointments.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How a task received its times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Fixed appointment, pinned to its original bounds.
    Appointment,
    /// Floating task committed inside the free-time window at this index.
    Window(usize),
    /// Floating task appended after the last window, without an upper bound.
    Overflow,
}

/// A task-resource-time assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task ID.
    pub task_id: String,
    /// Position of the task in the input task list.
    pub task_index: usize,
    /// Assigned resource ID.
    pub resource_id: String,
    /// Start timestamp.
    pub start: NaiveDateTime,
    /// Finish timestamp.
    pub end: NaiveDateTime,
    /// Travel leg preceding this task (minutes). Zero for appointments.
    pub travel_minutes: f64,
    /// How the task was placed.
    pub placement: Placement,
}

impl Assignment {
    /// Duration (minutes).
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 60.0
    }

    /// Whether this is a floating task placed inside a window.
    pub fn is_windowed(&self) -> bool {
        matches!(self.placement, Placement::Window(_))
    }
}

/// A soft problem detected while scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (task or resource).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of soft problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A floating task was sequenced past shift end.
    ShiftOverrun,
    /// An appointment-typed task had no usable start and was scheduled as floating.
    DemotedAppointment,
    /// An appointment starts before the previous one ends.
    OverlappingAppointments,
}

impl Violation {
    /// Creates a shift overrun violation.
    pub fn shift_overrun(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::ShiftOverrun,
            entity_id: task_id.into(),
            message: message.into(),
            severity: 60,
        }
    }

    /// Creates a demoted appointment violation.
    pub fn demoted_appointment(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::DemotedAppointment,
            entity_id: task_id.into(),
            message: message.into(),
            severity: 70,
        }
    }

    /// Creates an overlapping appointments violation.
    pub fn overlapping_appointments(
        task_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type: ViolationType::OverlappingAppointments,
            entity_id: task_id.into(),
            message: message.into(),
            severity: 50,
        }
    }
}

/// The computed day for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSchedule {
    /// Scheduled resource.
    pub resource_id: String,
    /// Scheduling day.
    pub day: NaiveDate,
    /// Assignments in commit order.
    pub assignments: Vec<Assignment>,
    /// Soft problems detected during the run.
    pub violations: Vec<Violation>,
}

impl ResourceSchedule {
    /// Creates an empty schedule.
    pub fn new(resource_id: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            resource_id: resource_id.into(),
            day,
            assignments: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the schedule has no violations.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any task runs past shift end.
    pub fn is_overloaded(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.violation_type == ViolationType::ShiftOverrun)
    }

    /// Finds the assignment for a task.
    pub fn assignment_for_task(&self, task_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task_id == task_id)
    }

    /// Floating tasks committed inside windows, in commit order.
    pub fn windowed(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| a.is_windowed())
    }

    /// Floating tasks placed by overflow sequencing, in commit order.
    pub fn overflowed(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.placement == Placement::Overflow)
    }

    /// Latest finish across all assignments.
    pub fn last_finish(&self) -> Option<NaiveDateTime> {
        self.assignments.iter().map(|a| a.end).max()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
