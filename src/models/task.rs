//! Task (work order) record.
//!
//! Mirrors the store's task record. Only the fields the scheduler reads
//! or writes are typed; everything else rides along in [`Task::extra`]
//! so a load/save cycle never drops dashboard data.
//!
//! Numeric fields arrive loosely typed (numbers, numeric strings, junk)
//! and are kept as raw JSON; the accessors apply the fallback rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Coordinates;
use crate::clock::MINUTES_PER_DAY;

/// Longest duration a task may declare; anything longer is treated as junk.
pub const MAX_DURATION_MINUTES: f64 = 7.0 * MINUTES_PER_DAY;

/// A task record.
///
/// # Output fields
/// `expected_start_date` / `expected_finish_date` are overwritten by the
/// schedule writer with ISO-8601 wall-clock timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub task_id: String,
    /// Owning resource for this scheduling run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Workflow status; only the configured eligible status is scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_status: Option<String>,
    /// `"appointment"` (case-insensitive) marks a fixed appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_type: Option<String>,
    /// Fixed start of an appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_start_date: Option<String>,
    /// Duration in minutes (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<Value>,
    /// Latitude (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Value>,
    /// Longitude (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Value>,
    /// Computed start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_start_date: Option<String>,
    /// Computed finish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_finish_date: Option<String>,
    /// Fields the scheduler does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            task_id: id.into(),
            employee_id: None,
            task_status: None,
            commitment_type: None,
            appointment_start_date: None,
            estimated_duration: None,
            lat: None,
            lng: None,
            expected_start_date: None,
            expected_finish_date: None,
            extra: Map::new(),
        }
    }

    /// Sets the owning resource.
    pub fn with_employee(mut self, resource_id: impl Into<String>) -> Self {
        self.employee_id = Some(resource_id.into());
        self
    }

    /// Sets the workflow status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.task_status = Some(status.into());
        self
    }

    /// Sets the commitment type.
    pub fn with_commitment_type(mut self, commitment: impl Into<String>) -> Self {
        self.commitment_type = Some(commitment.into());
        self
    }

    /// Sets the appointment start timestamp.
    pub fn with_appointment_start(mut self, start: impl Into<String>) -> Self {
        self.appointment_start_date = Some(start.into());
        self
    }

    /// Sets the estimated duration (minutes).
    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.estimated_duration = Some(Value::from(minutes));
        self
    }

    /// Sets the task location.
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(Value::from(lat));
        self.lng = Some(Value::from(lng));
        self
    }

    /// Adds an uninterpreted field.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Duration in minutes, or `default` when absent, non-numeric, not
    /// positive or above [`MAX_DURATION_MINUTES`].
    pub fn duration_minutes(&self, default: f64) -> f64 {
        self.estimated_duration
            .as_ref()
            .and_then(lenient_number)
            .filter(|d| *d > 0.0 && *d <= MAX_DURATION_MINUTES)
            .unwrap_or(default)
    }

    /// Task location, if both parts are usable.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat.as_ref(), self.lng.as_ref())
    }

    /// Whether this task belongs to `resource_id` and has the eligible status.
    pub fn is_eligible_for(&self, resource_id: &str, eligible_status: &str) -> bool {
        self.employee_id.as_deref() == Some(resource_id)
            && self.task_status.as_deref() == Some(eligible_status)
    }

    /// Whether the task has computed output timestamps.
    pub fn is_scheduled(&self) -> bool {
        self.expected_start_date.is_some() && self.expected_finish_date.is_some()
    }
}

/// Reads a JSON number or numeric string as a finite `f64`.
pub(crate) fn lenient_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}
