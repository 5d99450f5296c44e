//! Flat JSON dataset store.
//!
//! The dispatch board keeps resources and tasks in one JSON document:
//!
//! ```json
//! { "resources": [ ... ], "tasks": [ ... ], "...": "other keys kept as-is" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ScheduleError;
use crate::models::{Resource, Task};

/// Contents of the dataset file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Top-level keys the scheduler does not use.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Writes the dataset as pretty-printed JSON, replacing the file
    /// atomically via a sibling temp file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScheduleError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
