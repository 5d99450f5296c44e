//! Field task scheduling for the U-Engine dispatch board.
//!
//! Given each resource's fixed appointments and a backlog of floating
//! tasks, places the floating tasks into the free time between
//! appointments, respecting shift start and travel time between sites.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Resource`, `Shift`, `TimeWindow`,
//!   `ResourceSchedule`, `Assignment`, `Violation`
//! - **`scheduler`**: Classification, window building, greedy filling,
//!   overflow sequencing, day planning and write-back
//! - **`geo`**: Haversine travel-time estimation
//! - **`clock`**: The scheduling day and time-of-day parsing
//! - **`validation`**: Input integrity checks (duplicate IDs, shifts, owners)
//! - **`store`**: Flat JSON dataset load/save
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_field_schedule::models::{Resource, Task};
//! use u_field_schedule::scheduler::{plan_day, ScheduleWriter};
//! use u_field_schedule::SchedulerConfig;
//!
//! let resources = vec![Resource::new("R1", "08:00 AM", "05:00 PM")];
//! let mut tasks = vec![
//!     Task::new("A")
//!         .with_employee("R1")
//!         .with_status("Assigned")
//!         .with_appointment_start("2026-10-19T09:00:00")
//!         .with_duration(30.0),
//!     Task::new("F1").with_employee("R1").with_status("Assigned").with_duration(60.0),
//! ];
//!
//! let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let plan = plan_day(&resources, &tasks, day, &SchedulerConfig::default()).unwrap();
//! ScheduleWriter::apply(&mut tasks, &plan);
//!
//! assert_eq!(tasks[1].expected_start_date.as_deref(), Some("2026-10-19T08:00:00"));
//! assert_eq!(tasks[0].expected_start_date.as_deref(), Some("2026-10-19T09:00:00"));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
