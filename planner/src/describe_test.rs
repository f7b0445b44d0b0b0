use super::*;
use crate::doc::{Borders, Door, DoorOrientation, DoorSwing, Room, RoomKind};

fn room(name: &str, kind: RoomKind, x: f64, y: f64) -> Room {
    Room {
        id: name.to_lowercase(),
        name: name.into(),
        dimensions: "10' x 12'".into(),
        details: String::new(),
        x,
        y,
        w: 20.0,
        h: 24.0,
        kind,
        borders: Borders::default(),
    }
}

fn door(kind: DoorKind) -> Door {
    Door {
        id: format!("{kind:?}"),
        x: 0.0,
        y: 0.0,
        orientation: DoorOrientation::Horizontal,
        swing: DoorSwing::Left,
        kind,
        width: None,
    }
}

#[test]
fn empty_plan() {
    assert_eq!(describe_plan(&Document::new()), "An empty floor plan.");
}

#[test]
fn doors_without_rooms_is_still_empty() {
    let doc = Document { doors: vec![door(DoorKind::Standard)], ..Document::default() };
    assert_eq!(describe_plan(&doc), "An empty floor plan.");
}

#[test]
fn lists_rooms_and_door_counts() {
    let doc = Document {
        rooms: vec![room("Kitchen", RoomKind::Kitchen, 10.4, 20.5), room("Den", RoomKind::LivingFamily, 0.0, 0.0)],
        doors: vec![door(DoorKind::Standard), door(DoorKind::Standard), door(DoorKind::Open)],
        furniture: Vec::new(),
    };
    let text = describe_plan(&doc);
    let expected = "A floor plan layout consisting of the following rooms:\n\
        1. Kitchen (kitchen): Size approx 10' x 12'. Located at grid position (10, 21). \n\
        2. Den (living_family): Size approx 10' x 12'. Located at grid position (0, 0). \n\
        \nKey Connections (Doors):\n\
        - 2 standard hinged doors connecting rooms.\n\
        - 1 open archways for flow between areas.\n\
        \nThe overall layout should be cohesive, with logical flow between these defined spaces.";
    assert_eq!(text, expected);
}
