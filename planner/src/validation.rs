//! Minimum room size rules.
//!
//! Each rule is keyed by [`RoomKind`] and names a minimum footprint in feet.
//! Because "width" and "height" are just canvas axes, a room passes when its
//! footprint meets the rule in either orientation. Kinds without a rule are
//! always valid. Validation is advisory: it never blocks an edit.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::doc::{Document, EntityId, Room, RoomKind};
use crate::geometry::CanvasExtent;

/// Minimum footprint for one room kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomRule {
    pub min_width_ft: f64,
    pub min_height_ft: f64,
    /// Human label used in failure messages.
    pub label: &'static str,
}

/// Outcome of validating one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self { is_valid: true, message: None }
    }
}

/// Look up the size rule for a room kind, if it has one.
#[must_use]
pub fn rule_for(kind: RoomKind) -> Option<RoomRule> {
    let (min_width_ft, min_height_ft, label) = match kind {
        RoomKind::MasterBedroom => (10.0, 10.0, "Master Bedroom"),
        RoomKind::Bedroom => (8.0, 8.0, "Bedroom"),
        RoomKind::Kitchen => (5.0, 5.0, "Kitchen"),
        RoomKind::Dining => (8.0, 8.0, "Dining Room"),
        RoomKind::Living => (10.0, 10.0, "Living Room"),
        RoomKind::Bathroom => (5.0, 5.0, "Bathroom"),
        RoomKind::Study => (7.0, 7.0, "Study"),
        RoomKind::Utility => (4.0, 4.0, "Utility"),
        RoomKind::Garage => (10.0, 18.0, "Garage"),
        RoomKind::Outdoor => (3.0, 3.0, "Outdoor"),
        RoomKind::Corridor => (3.0, 3.0, "Corridor"),
        RoomKind::Storage => (3.0, 3.0, "Storage"),
        RoomKind::Entrance => (4.0, 4.0, "Entrance"),
        _ => return None,
    };
    Some(RoomRule { min_width_ft, min_height_ft, label })
}

/// Check one room against its kind's minimum size.
#[must_use]
pub fn validate_room(room: &Room, extent: &CanvasExtent) -> ValidationResult {
    let Some(rule) = rule_for(room.kind) else {
        return ValidationResult::valid();
    };

    let width_ft = extent.percent_to_feet_x(room.w);
    let height_ft = extent.percent_to_feet_y(room.h);

    let passes_standard = width_ft >= rule.min_width_ft && height_ft >= rule.min_height_ft;
    let passes_rotated = width_ft >= rule.min_height_ft && height_ft >= rule.min_width_ft;

    if passes_standard || passes_rotated {
        return ValidationResult::valid();
    }

    ValidationResult {
        is_valid: false,
        message: Some(format!(
            "{} must be at least {}' x {}'",
            rule.label, rule.min_width_ft, rule.min_height_ft
        )),
    }
}

/// Every invalid room in the document with its failure message, in room order.
#[must_use]
pub fn validate_document(doc: &Document, extent: &CanvasExtent) -> Vec<(EntityId, String)> {
    doc.rooms
        .iter()
        .filter_map(|room| {
            let result = validate_room(room, extent);
            match (result.is_valid, result.message) {
                (false, Some(message)) => Some((room.id.clone(), message)),
                _ => None,
            }
        })
        .collect()
}
