//! Per-resource task scheduling.
//!
//! Places a resource's floating tasks into the free time between its fixed
//! appointments, respecting the shift start and travel time between sites.
//!
//! # Algorithm
//!
//! Greedy and FIFO: floating tasks are never reordered. Each window takes
//! tasks from the head of the queue until the head no longer fits; the
//! remainder is sequenced after the last window without an upper bound.
//! It is not an optimizer: total travel and lateness are not minimized.
//!
//! # Pipeline
//!
//! `classify_task` → `build_windows` → `fill_window` (per window) →
//! `drain_overflow` → `ScheduleWriter`. `ResourceScheduler` runs that
//! pipeline for one resource; `plan_day` runs it for all resources in
//! parallel.
//!
//! # References
//!
//! - Solomon (1987), "Algorithms for the Vehicle Routing and Scheduling
//!   Problems with Time Window Constraints"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod classify;
mod filler;
mod kpi;
mod overflow;
mod plan;
mod resource;
mod windows;
mod writer;

pub use classify::{classify_task, AppointmentEvent, FloatingReason, FloatingStop, TaskClass};
pub use filler::{fill_window, FillContext, RouteCursor};
pub use kpi::ScheduleKpi;
pub use overflow::drain_overflow;
pub use plan::{partition_by_owner, plan_day, DayPlan};
pub use resource::ResourceScheduler;
pub use windows::{build_windows, sort_appointments};
pub use writer::ScheduleWriter;
