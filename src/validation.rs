//! Input validation for a scheduling run.
//!
//! The scheduler itself treats malformed shift times as a caller error.
//! Run these checks upstream to report every problem at once instead of
//! failing on the first bad resource. Detects:
//! - Duplicate resource and task IDs
//! - Shift boundaries not in `"H:MM AM/PM"` form
//! - Shifts that end at or before their start
//! - Tasks owned by an unknown resource
//! - Durations longer than [`MAX_DURATION_MINUTES`]

use crate::models::{lenient_number, Resource, Task, MAX_DURATION_MINUTES};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A shift boundary does not parse.
    InvalidShiftTime,
    /// A shift ends at or before its start.
    EmptyShift,
    /// A task's `employeeId` matches no resource.
    UnknownResource,
    /// A task declares a duration no shift could hold.
    ExcessiveDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the run cannot proceed. Excessive durations fall back to
    /// the configured default and only warrant a warning.
    pub fn is_blocking(&self) -> bool {
        self.kind != ValidationErrorKind::ExcessiveDuration
    }
}

/// Validates the input data for a scheduling run.
///
/// Only tasks with `eligible_status` are checked for ownership; other
/// tasks are never read by the scheduler.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    resources: &[Resource],
    tasks: &[Task],
    eligible_status: &str,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.resource_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.resource_id),
            ));
        }

        match r.shift() {
            Ok(shift) if shift.length() <= 0.0 => errors.push(ValidationError::new(
                ValidationErrorKind::EmptyShift,
                format!(
                    "Resource '{}' shift {} - {} has no working time",
                    r.resource_id, r.shift_start, r.shift_end
                ),
            )),
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShiftTime,
                format!("Resource '{}': {e}", r.resource_id),
            )),
        }
    }

    let mut task_ids = HashSet::new();
    for t in tasks {
        if !task_ids.insert(t.task_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", t.task_id),
            ));
        }

        if t.task_status.as_deref() != Some(eligible_status) {
            continue;
        }
        if let Some(owner) = t.employee_id.as_deref() {
            if !resource_ids.contains(owner) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownResource,
                    format!("Task '{}' references unknown resource '{owner}'", t.task_id),
                ));
            }
        }
        if let Some(minutes) = t
            .estimated_duration
            .as_ref()
            .and_then(lenient_number)
            .filter(|d| *d > MAX_DURATION_MINUTES)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcessiveDuration,
                format!(
                    "Task '{}' duration {minutes} exceeds {MAX_DURATION_MINUTES} minutes",
                    t.task_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
