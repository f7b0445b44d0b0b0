//! Tool definitions for floor-plan generation.

use planner::doc::RoomKind;
use serde_json::json;

use super::types::Tool;

/// Name of the single tool the generator forces the model to call.
pub const EMIT_FLOOR_PLAN: &str = "emit_floor_plan";

/// The `emit_floor_plan` tool. Its input schema is the saved-plan shape
/// restricted to rooms and doors.
#[must_use]
pub fn floor_plan_tool() -> Tool {
    let room_kinds: Vec<&str> = RoomKind::ALL.iter().map(|k| k.tag()).collect();

    Tool {
        name: EMIT_FLOOR_PLAN.into(),
        description: "Emit the complete floor plan layout. Coordinates and sizes are percentages of the canvas."
            .into(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "rooms": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique identifier, e.g. 'room_1'" },
                            "name": { "type": "string", "description": "Display name, e.g. 'Master Bedroom'" },
                            "dimensions": { "type": "string", "description": "Size label, e.g. \"15' x 12'\"" },
                            "details": { "type": "string", "description": "Brief description of the room's purpose" },
                            "x": { "type": "number", "description": "Left edge, percent of canvas width" },
                            "y": { "type": "number", "description": "Top edge, percent of canvas height" },
                            "w": { "type": "number", "description": "Width, percent of canvas width" },
                            "h": { "type": "number", "description": "Height, percent of canvas height" },
                            "type": { "type": "string", "enum": room_kinds, "description": "Room category" }
                        },
                        "required": ["id", "name", "x", "y", "w", "h", "type"]
                    }
                },
                "doors": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique identifier, e.g. 'door_1'" },
                            "x": { "type": "number", "description": "Center, percent of canvas width" },
                            "y": { "type": "number", "description": "Center, percent of canvas height" },
                            "orientation": { "type": "string", "enum": ["horizontal", "vertical"] },
                            "swing": { "type": "string", "enum": ["left", "right"] },
                            "type": { "type": "string", "enum": ["standard", "double", "sliding", "open"] }
                        },
                        "required": ["id", "x", "y", "orientation", "swing"]
                    }
                }
            },
            "required": ["rooms", "doors"]
        }),
    }
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
