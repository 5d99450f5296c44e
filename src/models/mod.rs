//! Scheduling domain models.
//!
//! Records mirror the task store (camelCase JSON, unknown fields kept);
//! derived types exist only for the duration of a run.
//!
//! # Domain Mappings
//!
//! | u-field-schedule | Field service | Home care | Delivery |
//! |------------------|---------------|-----------|----------|
//! | Task | Work order | Visit | Drop |
//! | Resource | Technician | Carer | Driver |
//! | TimeWindow | Gap between jobs | Gap between visits | Slot |
//! | ResourceSchedule | Daily route | Rota | Run sheet |

mod calendar;
mod resource;
mod schedule;
mod task;

pub use calendar::{Shift, TimeWindow};
pub use resource::{Coordinates, Resource};
pub use schedule::{Assignment, Placement, ResourceSchedule, Violation, ViolationType};
pub use task::{Task, MAX_DURATION_MINUTES};

pub(crate) use task::lenient_number;
