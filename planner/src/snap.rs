//! Grid rounding and magnetic room-to-room edge snapping.
//!
//! A dragged room's candidate top-left corner is first rounded to the coarse
//! half-unit grid, then pulled onto nearby edges of every other room. Each
//! axis is handled independently with four rules per neighbor, checked in a
//! fixed order:
//!
//! | Rule | Condition | Result |
//! |------|-----------|--------|
//! | near edge to near edge | `|x - o.x| < T` | `x = o.x` |
//! | near edge to far edge | `|x - (o.x + o.w)| < T` | `x = o.x + o.w` |
//! | far edge to near edge | `|(x + w) - o.x| < T` | `x = o.x - w` |
//! | far edge to far edge | `|(x + w) - (o.x + o.w)| < T` | `x = o.x + o.w - w` |
//!
//! The first matching rule for a neighbor wins, and neighbors are visited in
//! document order, each one testing against the position left by the previous
//! one. When several neighbors are in range the last one to match decides.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::camera::Point;
use crate::consts::GRID_STEP;
use crate::doc::Room;

/// Round to the nearest [`GRID_STEP`]. Halves round toward positive infinity.
#[must_use]
pub fn round_to_grid(value: f64) -> f64 {
    (value / GRID_STEP + 0.5).floor() * GRID_STEP
}

/// Snap one axis of a span `[pos, pos + size]` against a neighbor span
/// `[other_pos, other_pos + other_size]`.
fn snap_axis(pos: f64, size: f64, other_pos: f64, other_size: f64, threshold: f64) -> f64 {
    let other_end = other_pos + other_size;
    if (pos - other_pos).abs() < threshold {
        other_pos
    } else if (pos - other_end).abs() < threshold {
        other_end
    } else if (pos + size - other_pos).abs() < threshold {
        other_pos - size
    } else if (pos + size - other_end).abs() < threshold {
        other_end - size
    } else {
        pos
    }
}

/// Pull a room's candidate top-left corner onto neighboring room edges.
///
/// `candidate` should already be grid-rounded. `moving_id` is skipped so a
/// room never snaps to itself. `size` is the moving room's `(w, h)`.
#[must_use]
pub fn snap_room_position(candidate: Point, size: (f64, f64), moving_id: &str, rooms: &[Room], threshold: f64) -> Point {
    let (w, h) = size;
    let mut x = candidate.x;
    let mut y = candidate.y;

    for other in rooms.iter().filter(|r| r.id != moving_id) {
        x = snap_axis(x, w, other.x, other.w, threshold);
        y = snap_axis(y, h, other.y, other.h, threshold);
    }

    Point::new(x, y)
}
