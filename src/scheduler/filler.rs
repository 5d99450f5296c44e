//! Greedy window filling.
//!
//! # Algorithm
//!
//! For one window, repeatedly take the task at the head of the FIFO queue:
//! 1. travel = leg from the cursor location to the task location
//! 2. start = max(cursor + travel, shift start); finish = start + duration
//! 3. If finish <= window end, commit: advance cursor and location, pop.
//! 4. Otherwise stop. The head task blocks everything behind it until the
//!    next window (strict head-of-line blocking, no reordering).
//!
//! # Complexity
//! O(k) per window, where k = tasks committed in it.

use std::collections::VecDeque;

use tracing::debug;

use super::FloatingStop;
use crate::clock::DayClock;
use crate::geo::travel_minutes;
use crate::models::{Assignment, Coordinates, Placement, Shift, TimeWindow};

/// Sequential state carried through one resource's day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteCursor {
    /// Next available time (minutes from midnight).
    pub minute: f64,
    /// Last known location.
    pub location: Option<Coordinates>,
}

impl RouteCursor {
    /// Cursor at shift start, at home.
    pub fn start_of_shift(shift: &Shift, home: Option<Coordinates>) -> Self {
        Self {
            minute: shift.start_minute,
            location: home,
        }
    }

    /// Moves the cursor to `minute`, and to `location` when it is known.
    pub fn advance(&mut self, minute: f64, location: Option<Coordinates>) {
        self.minute = minute;
        if location.is_some() {
            self.location = location;
        }
    }
}

/// Per-resource constants shared by the filler and the overflow sequencer.
#[derive(Debug, Clone, Copy)]
pub struct FillContext<'a> {
    /// Resource being scheduled.
    pub resource_id: &'a str,
    /// Resource shift.
    pub shift: Shift,
    /// Scheduling day.
    pub clock: DayClock,
    /// Average travel speed (km/h).
    pub speed_kmh: f64,
}

/// A tentative placement for the task at the head of the queue.
#[derive(Debug, Clone, Copy)]
pub(super) struct Leg {
    pub travel: f64,
    pub start: f64,
    pub finish: f64,
}

impl FillContext<'_> {
    pub(super) fn leg(&self, cursor: &RouteCursor, stop: &FloatingStop) -> Leg {
        let travel = travel_minutes(cursor.location, stop.location, self.speed_kmh);
        let start = (cursor.minute + travel).max(self.shift.start_minute);
        Leg {
            travel,
            start,
            finish: start + stop.duration_minutes,
        }
    }

    pub(super) fn commit(
        &self,
        cursor: &mut RouteCursor,
        stop: &FloatingStop,
        leg: Leg,
        placement: Placement,
    ) -> Assignment {
        cursor.advance(leg.finish, stop.location);
        Assignment {
            task_id: stop.task_id.clone(),
            task_index: stop.task_index,
            resource_id: self.resource_id.to_string(),
            start: self.clock.at_minutes(leg.start),
            end: self.clock.at_minutes(leg.finish),
            travel_minutes: leg.travel,
            placement,
        }
    }
}

/// Fills one window from the head of `queue`.
///
/// Returns the committed assignments in commit order. Tasks that do not
/// fit stay queued, in order, for the next window.
pub fn fill_window(
    window: &TimeWindow,
    window_index: usize,
    queue: &mut VecDeque<FloatingStop>,
    cursor: &mut RouteCursor,
    ctx: &FillContext<'_>,
) -> Vec<Assignment> {
    let mut committed = Vec::new();
    if window.is_exhausted() {
        return committed;
    }

    while let Some(stop) = queue.front() {
        let leg = ctx.leg(cursor, stop);
        if !window.admits(leg.start, leg.finish) {
            debug!(
                "{}: task {} blocked in window {} ({:.1} > {:.1})",
                ctx.resource_id, stop.task_id, window_index, leg.finish, window.end
            );
            break;
        }
        let assignment = ctx.commit(cursor, stop, leg, Placement::Window(window_index));
        debug!(
            "{}: task {} placed {}..{} (travel {:.1} min)",
            ctx.resource_id, assignment.task_id, assignment.start, assignment.end, leg.travel
        );
        committed.push(assignment);
        queue.pop_front();
    }

    committed
}
