//! Overflow sequencing.
//!
//! Whatever is still queued after the last window is appended back to back,
//! with travel, in original order and with no upper bound. Every floating
//! task therefore gets times, even if the day runs past shift end.

use std::collections::VecDeque;

use tracing::debug;

use super::{FillContext, FloatingStop, RouteCursor};
use crate::models::{Assignment, Placement};

/// Drains `queue`, committing every task unconditionally.
pub fn drain_overflow(
    queue: &mut VecDeque<FloatingStop>,
    cursor: &mut RouteCursor,
    ctx: &FillContext<'_>,
) -> Vec<Assignment> {
    let mut committed = Vec::with_capacity(queue.len());

    while let Some(stop) = queue.pop_front() {
        let leg = ctx.leg(cursor, &stop);
        let assignment = ctx.commit(cursor, &stop, leg, Placement::Overflow);
        debug!(
            "{}: task {} overflowed to {}..{}",
            ctx.resource_id, assignment.task_id, assignment.start, assignment.end
        );
        committed.push(assignment);
    }

    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DayClock;
    use crate::models::{Coordinates, Shift};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn ctx() -> FillContext<'static> {
        FillContext {
            resource_id: "R1",
            shift: Shift::new(480.0, 1020.0),
            clock: DayClock::new(day()),
            speed_kmh: 40.0,
        }
    }

    fn stop(id: &str, duration: f64, location: Option<Coordinates>) -> FloatingStop {
        FloatingStop {
            task_id: id.to_string(),
            task_index: 0,
            duration_minutes: duration,
            location,
        }
    }

    #[test]
    fn test_overflow_past_shift_end() {
        let ctx = ctx();
        let mut queue: VecDeque<_> = vec![stop("F3", 120.0, None)].into();
        let mut cursor = RouteCursor {
            minute: 990.0, // 16:30
            location: None,
        };

        let placed = drain_overflow(&mut queue, &mut cursor, &ctx);

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].start, day().and_hms_opt(16, 30, 0).unwrap());
        assert_eq!(placed[0].end, day().and_hms_opt(18, 30, 0).unwrap());
        assert_eq!(placed[0].placement, Placement::Overflow);
        assert!(queue.is_empty());
        assert_eq!(cursor.minute, 1110.0);
    }

    #[test]
    fn test_overflow_keeps_order_and_travel() {
        let ctx = ctx();
        let a = Coordinates::new(10.0, 20.0);
        let b = Coordinates::new(10.1, 20.0);
        let mut queue: VecDeque<_> = vec![
            stop("X", 30.0, Some(b)),
            stop("Y", 30.0, Some(a)),
            stop("Z", 30.0, None),
        ]
        .into();
        let mut cursor = RouteCursor {
            minute: 1000.0,
            location: Some(a),
        };

        let placed = drain_overflow(&mut queue, &mut cursor, &ctx);

        let order: Vec<_> = placed.iter().map(|p| p.task_id.as_str()).collect();
        assert_eq!(order, ["X", "Y", "Z"]);
        assert!(placed[0].travel_minutes > 16.0);
        assert!((placed[1].travel_minutes - placed[0].travel_minutes).abs() < 1e-9);
        assert_eq!(placed[2].travel_minutes, 0.0);
        assert!(placed.windows(2).all(|w| w[0].end <= w[1].start));
        assert_eq!(cursor.location, Some(a));
    }

    #[test]
    fn test_overflow_empty_queue() {
        let ctx = ctx();
        let mut queue = VecDeque::new();
        let mut cursor = RouteCursor::start_of_shift(&ctx.shift, None);
        assert!(drain_overflow(&mut queue, &mut cursor, &ctx).is_empty());
        assert_eq!(cursor.minute, 480.0);
    }
}
