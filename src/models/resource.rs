//! Resource (field technician) record.
//!
//! A resource owns one shift per scheduling day and starts the day at
//! its home location. Read-only input to the scheduler.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::task::lenient_number;
use super::Shift;
use crate::error::ScheduleError;

/// A geographic position (decimal degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a position from loosely typed record fields.
    ///
    /// Both parts must be numeric and non-zero; a zero (or missing) part
    /// means "location unknown" in the store.
    pub fn from_parts(lat: Option<&Value>, lng: Option<&Value>) -> Option<Self> {
        let lat = lat.and_then(lenient_number).filter(|v| *v != 0.0)?;
        let lng = lng.and_then(lenient_number).filter(|v| *v != 0.0)?;
        Some(Self::new(lat, lng))
    }
}

/// A schedulable resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique resource identifier.
    pub resource_id: String,
    /// Shift start, `"H:MM AM/PM"`.
    pub shift_start: String,
    /// Shift end, `"H:MM AM/PM"`.
    pub shift_end: String,
    /// Home latitude (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_lat: Option<Value>,
    /// Home longitude (number or numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_lng: Option<Value>,
    /// Fields the scheduler does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// Creates a resource with the given shift.
    pub fn new(
        id: impl Into<String>,
        shift_start: impl Into<String>,
        shift_end: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: id.into(),
            shift_start: shift_start.into(),
            shift_end: shift_end.into(),
            home_lat: None,
            home_lng: None,
            extra: Map::new(),
        }
    }

    /// Sets the home location.
    pub fn with_home(mut self, lat: f64, lng: f64) -> Self {
        self.home_lat = Some(Value::from(lat));
        self.home_lng = Some(Value::from(lng));
        self
    }

    /// Adds an uninterpreted field.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Starting position for the first travel leg.
    pub fn home(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.home_lat.as_ref(), self.home_lng.as_ref())
    }

    /// Parses the shift boundaries.
    pub fn shift(&self) -> Result<Shift, ScheduleError> {
        Shift::parse(&self.shift_start, &self.shift_end)
    }
}
