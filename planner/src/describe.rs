//! Plain-language summary of a plan, used to seed image and layout prompts.

#[cfg(test)]
#[path = "describe_test.rs"]
mod describe_test;

use crate::doc::{Document, DoorKind};

/// Describe the rooms and door styles of `doc` in prose.
///
/// Rooms are listed in document order with their kind tag, cached size
/// label and rounded grid position. Doors are summarized by kind only.
#[must_use]
pub fn describe_plan(doc: &Document) -> String {
    if doc.rooms.is_empty() {
        return "An empty floor plan.".to_owned();
    }

    let mut out = String::from("A floor plan layout consisting of the following rooms:\n");
    for (index, room) in doc.rooms.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}): Size approx {}. Located at grid position ({}, {}). \n",
            index + 1,
            room.name,
            room.kind.tag(),
            room.dimensions,
            round_half_up(room.x),
            round_half_up(room.y),
        ));
    }

    out.push_str("\nKey Connections (Doors):\n");
    let count = |kind: DoorKind| doc.doors.iter().filter(|d| d.kind == kind).count();
    let lines = [
        (count(DoorKind::Standard), "standard hinged doors connecting rooms."),
        (count(DoorKind::Sliding), "sliding doors (modern style)."),
        (count(DoorKind::Double), "double doors (grand entrances)."),
        (count(DoorKind::Open), "open archways for flow between areas."),
    ];
    for (n, text) in lines {
        if n > 0 {
            out.push_str(&format!("- {n} {text}\n"));
        }
    }

    out.push_str("\nThe overall layout should be cohesive, with logical flow between these defined spaces.");
    out
}

/// Nearest integer with halves rounding up, printed without a fraction.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}
