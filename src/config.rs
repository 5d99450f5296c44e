//! Scheduler configuration.
//!
//! Every field has a default so an empty TOML document (or no file at all)
//! yields a usable configuration.
//!
//! ```
//! use u_field_schedule::SchedulerConfig;
//!
//! let config = SchedulerConfig::from_toml_str("eligible_status = \"Dispatched\"").unwrap();
//! assert_eq!(config.eligible_status, "Dispatched");
//! assert_eq!(config.default_duration_minutes, 60.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Scheduler configuration, typically parsed from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// The single `taskStatus` value that makes a task schedulable.
    #[serde(default = "default_eligible_status")]
    pub eligible_status: String,
    /// Duration used when `estimatedDuration` is absent or not a positive number.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: f64,
    /// Average travel speed used to turn distance into minutes.
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,
    /// `commitmentType` value (case-insensitive) marking a fixed appointment.
    #[serde(default = "default_appointment_commitment")]
    pub appointment_commitment: String,
}

fn default_eligible_status() -> String { "Assigned".to_string() }
fn default_duration_minutes() -> f64 { 60.0 }
fn default_average_speed_kmh() -> f64 { 40.0 }
fn default_appointment_commitment() -> String { "appointment".to_string() }

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            eligible_status: default_eligible_status(),
            default_duration_minutes: default_duration_minutes(),
            average_speed_kmh: default_average_speed_kmh(),
            appointment_commitment: default_appointment_commitment(),
        }
    }
}

impl SchedulerConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ScheduleError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets the eligible task status.
    pub fn with_eligible_status(mut self, status: impl Into<String>) -> Self {
        self.eligible_status = status.into();
        self
    }

    /// Sets the average travel speed.
    pub fn with_average_speed(mut self, speed_kmh: f64) -> Self {
        self.average_speed_kmh = speed_kmh;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(config.eligible_status, "Assigned");
        assert!((config.average_speed_kmh - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_override() {
        let config = SchedulerConfig::from_toml_str(
            "average_speed_kmh = 30.0\ndefault_duration_minutes = 45.0",
        )
        .unwrap();
        assert!((config.average_speed_kmh - 30.0).abs() < 1e-10);
        assert!((config.default_duration_minutes - 45.0).abs() < 1e-10);
        assert_eq!(config.appointment_commitment, "appointment");
    }

    #[test]
    fn test_malformed_toml() {
        let err = SchedulerConfig::from_toml_str("average_speed_kmh = \"fast\"").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }
}
