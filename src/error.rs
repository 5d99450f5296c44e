//! Error types.
//!
//! Only caller-side faults are errors. Missing coordinates, bad durations,
//! unparseable appointment dates and shift overruns degrade silently
//! (see [`crate::models::ViolationType`]) and never surface here.

use thiserror::Error;

/// Errors produced by parsing, configuration and the dataset store.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A shift boundary is not in `"H:MM AM/PM"` form.
    #[error("invalid clock time '{value}': expected \"H:MM AM/PM\"")]
    InvalidClockTime { value: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ScheduleError {
    pub(crate) fn invalid_clock_time(value: impl Into<String>) -> Self {
        Self::InvalidClockTime {
            value: value.into(),
        }
    }
}
