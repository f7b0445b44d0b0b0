#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{DOOR_HIT_SLOP_FT, WALL_THICKNESS_FT};
use crate::doc::{Document, Door, DoorOrientation, EntityKind, Furniture, Selection};
use crate::geometry::CanvasExtent;
use crate::input::EditorMode;

/// Find the topmost pickable entity under `pt` (canvas percent).
///
/// Furniture is drawn above doors, and doors above rooms; within a
/// collection later entries are drawn on top. Entities the current `mode`
/// cannot pick are skipped entirely, so a click "falls through" them.
#[must_use]
pub fn hit_test(doc: &Document, pt: Point, mode: EditorMode, extent: &CanvasExtent) -> Option<Selection> {
    if mode.allows(EntityKind::Furniture) {
        if let Some(f) = doc.furniture.iter().rev().find(|f| furniture_contains(f, pt, extent)) {
            return Some(Selection::new(EntityKind::Furniture, f.id.clone()));
        }
    }
    if mode.allows(EntityKind::Door) {
        if let Some(d) = doc.doors.iter().rev().find(|d| door_contains(d, pt, extent)) {
            return Some(Selection::new(EntityKind::Door, d.id.clone()));
        }
    }
    if mode.allows(EntityKind::Room) {
        if let Some(r) = doc.rooms.iter().rev().find(|r| r.contains(pt.x, pt.y)) {
            return Some(Selection::new(EntityKind::Room, r.id.clone()));
        }
    }
    None
}

/// Point-in-rotated-rectangle test done in feet so rotation is not skewed by
/// a non-square canvas.
fn furniture_contains(f: &Furniture, pt: Point, extent: &CanvasExtent) -> bool {
    let dx = extent.percent_to_feet_x(pt.x - f.x);
    let dy = extent.percent_to_feet_y(pt.y - f.y);
    let (sin, cos) = (-f.rotation).to_radians().sin_cos();
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= f.width / 2.0 && local_y.abs() <= f.depth / 2.0
}

fn door_contains(d: &Door, pt: Point, extent: &CanvasExtent) -> bool {
    let half_long = d.effective_width() / 2.0;
    let half_short = WALL_THICKNESS_FT / 2.0 + DOOR_HIT_SLOP_FT;
    let (half_x, half_y) = match d.orientation {
        DoorOrientation::Horizontal => (half_long, half_short),
        DoorOrientation::Vertical => (half_short, half_long),
    };
    let dx = extent.percent_to_feet_x(pt.x - d.x).abs();
    let dy = extent.percent_to_feet_y(pt.y - d.y).abs();
    dx <= half_x && dy <= half_y
}
