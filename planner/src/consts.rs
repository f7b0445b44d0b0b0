//! Shared numeric constants for the planner crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default physical width of the canvas in feet.
pub const CANVAS_WIDTH_FT: f64 = 50.0;

/// Default physical height of the canvas in feet.
pub const CANVAS_HEIGHT_FT: f64 = 50.0;

// ── Snapping ────────────────────────────────────────────────────

/// Distance in percent units at which a dragged room edge pulls onto a neighbor's edge.
pub const SNAP_THRESHOLD: f64 = 1.0;

/// Coarse grid step in percent units applied to every dragged position.
pub const GRID_STEP: f64 = 0.5;

// ── Rooms ───────────────────────────────────────────────────────

/// Smallest width/height in percent accepted by `resize_room`.
pub const ROOM_SIZE_MIN: f64 = 4.0;

/// Largest width/height in percent accepted by `resize_room`.
pub const ROOM_SIZE_MAX: f64 = 50.0;

/// Top-left corner of a freshly added room, in percent.
pub const NEW_ROOM_POS: f64 = 40.0;

/// Width and height of a freshly added room, in percent.
pub const NEW_ROOM_SIZE: f64 = 15.0;

/// Offset in percent applied to duplicated and pasted entities.
pub const PASTE_OFFSET: f64 = 2.0;

// ── Doors ───────────────────────────────────────────────────────

/// Rendered width of a standard, sliding or open door in feet.
pub const DOOR_WIDTH_FT: f64 = 3.0;

/// Rendered width of a double door in feet.
pub const DOUBLE_DOOR_WIDTH_FT: f64 = 6.0;

/// Wall thickness in feet; the short side of a door's footprint.
pub const WALL_THICKNESS_FT: f64 = 0.5;

/// Extra pick tolerance in feet on each side of a door's wall-thickness footprint.
pub const DOOR_HIT_SLOP_FT: f64 = 0.5;

/// Center of a freshly added door or furniture item, in percent.
pub const NEW_ITEM_POS: f64 = 50.0;

// ── Furniture ───────────────────────────────────────────────────

/// Rotation applied per furniture rotate step, in degrees.
pub const ROTATION_STEP_DEG: f64 = 45.0;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.25;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 4.0;

/// Zoom multiplier per 100 px of wheel delta.
pub const ZOOM_WHEEL_FACTOR: f64 = 1.1;
