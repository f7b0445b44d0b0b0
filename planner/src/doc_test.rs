#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_room(id: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
    Room {
        id: id.into(),
        name: "Room".into(),
        dimensions: String::new(),
        details: String::new(),
        x,
        y,
        w,
        h,
        kind: RoomKind::Bedroom,
        borders: Borders::default(),
    }
}

fn make_door(id: &str, kind: DoorKind) -> Door {
    Door {
        id: id.into(),
        x: 50.0,
        y: 50.0,
        orientation: DoorOrientation::Horizontal,
        swing: DoorSwing::Left,
        kind,
        width: None,
    }
}

fn make_furniture(id: &str) -> Furniture {
    Furniture { id: id.into(), kind: "sofa_3".into(), x: 30.0, y: 30.0, rotation: 0.0, width: 7.0, depth: 3.0 }
}

// =============================================================
// RoomKind serde
// =============================================================

#[test]
fn room_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&RoomKind::MasterBedroom).unwrap(), "\"master_bedroom\"");
    assert_eq!(serde_json::to_string(&RoomKind::BathroomThreeQuarter).unwrap(), "\"bathroom_three_quarter\"");
}

#[test]
fn room_kind_garage_sizes_keep_digit_tags() {
    assert_eq!(serde_json::to_string(&RoomKind::Garage2Car).unwrap(), "\"garage_2car\"");
    let back: RoomKind = serde_json::from_str("\"garage_3car\"").unwrap();
    assert_eq!(back, RoomKind::Garage3Car);
}

#[test]
fn room_kind_tag_matches_serde_for_all_variants() {
    for kind in RoomKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.tag()));
    }
}

#[test]
fn room_kind_rejects_unknown_tag() {
    assert!(serde_json::from_str::<RoomKind>("\"ballroom\"").is_err());
}

// =============================================================
// Room
// =============================================================

#[test]
fn room_deserializes_original_shape() {
    let room: Room = serde_json::from_value(json!({
        "id": "ms1",
        "name": "Master Suite",
        "dimensions": "18' x 17'",
        "details": "Spacious master bedroom.",
        "x": 5, "y": 10, "w": 20, "h": 25,
        "type": "bedroom",
        "borders": { "top": true, "bottom": true, "left": true, "right": false }
    }))
    .unwrap();
    assert_eq!(room.id, "ms1");
    assert_eq!(room.kind, RoomKind::Bedroom);
    assert!(!room.borders.right);
    assert_eq!(room.w, 20.0);
}

#[test]
fn room_missing_borders_defaults_to_all_walls() {
    let room: Room = serde_json::from_value(json!({
        "id": "r", "name": "R", "x": 0, "y": 0, "w": 10, "h": 10, "type": "study"
    }))
    .unwrap();
    assert_eq!(room.borders, Borders::default());
    assert!(room.dimensions.is_empty());
}

#[test]
fn room_refresh_dimensions_overwrites_stale_label() {
    let mut room = make_room("r", 0.0, 0.0, 20.0, 10.0);
    room.dimensions = "Gallery".into();
    room.refresh_dimensions(&CanvasExtent::default());
    assert_eq!(room.dimensions, "10' x 5'");
}

#[test]
fn room_edges_and_contains() {
    let room = make_room("r", 10.0, 20.0, 30.0, 40.0);
    assert_eq!(room.right(), 40.0);
    assert_eq!(room.bottom(), 60.0);
    assert!(room.contains(10.0, 20.0));
    assert!(room.contains(25.0, 50.0));
    assert!(!room.contains(41.0, 50.0));
}

#[test]
fn borders_toggle_flips_one_side() {
    let mut b = Borders::default();
    b.toggle(Wall::Left);
    assert!(!b.left);
    assert!(b.top && b.bottom && b.right);
    b.toggle(Wall::Left);
    assert!(b.left);
}

// =============================================================
// Door
// =============================================================

#[test]
fn door_effective_width_defaults_by_kind() {
    assert_eq!(make_door("d", DoorKind::Standard).effective_width(), 3.0);
    assert_eq!(make_door("d", DoorKind::Double).effective_width(), 6.0);
    assert_eq!(make_door("d", DoorKind::Sliding).effective_width(), 3.0);
    assert_eq!(make_door("d", DoorKind::Open).effective_width(), 3.0);
}

#[test]
fn door_effective_width_prefers_override() {
    let mut door = make_door("d", DoorKind::Double);
    door.width = Some(4.5);
    assert_eq!(door.effective_width(), 4.5);
}

#[test]
fn door_without_type_defaults_to_standard() {
    let door: Door = serde_json::from_value(json!({
        "id": "d1", "x": 23, "y": 35, "orientation": "horizontal", "swing": "left"
    }))
    .unwrap();
    assert_eq!(door.kind, DoorKind::Standard);
    assert!(door.width.is_none());
}

#[test]
fn door_without_width_omits_it_on_the_wire() {
    let value = serde_json::to_value(make_door("d", DoorKind::Sliding)).unwrap();
    assert!(value.get("width").is_none());
    assert_eq!(value["type"], "sliding");
}

// =============================================================
// Document
// =============================================================

#[test]
fn new_document_is_empty() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn new_id_is_prefixed_and_unique() {
    let a = new_id("room");
    let b = new_id("room");
    assert!(a.starts_with("room_"));
    assert_ne!(a, b);
}

#[test]
fn lookup_by_id_per_collection() {
    let mut doc = Document::new();
    doc.rooms.push(make_room("r1", 0.0, 0.0, 10.0, 10.0));
    doc.doors.push(make_door("d1", DoorKind::Standard));
    doc.furniture.push(make_furniture("f1"));
    assert!(doc.room("r1").is_some());
    assert!(doc.door("d1").is_some());
    assert!(doc.furniture_item("f1").is_some());
    assert!(doc.room("d1").is_none());
    assert_eq!(doc.len(), 3);
}

#[test]
fn position_of_and_set_position() {
    let mut doc = Document::new();
    doc.doors.push(make_door("d1", DoorKind::Standard));
    let sel = Selection::new(EntityKind::Door, "d1");
    assert_eq!(doc.position_of(&sel), Some((50.0, 50.0)));
    assert!(doc.set_position(&sel, 12.0, 34.0));
    assert_eq!(doc.position_of(&sel), Some((12.0, 34.0)));
}

#[test]
fn set_position_on_missing_entity_is_false() {
    let mut doc = Document::new();
    let sel = Selection::new(EntityKind::Room, "gone");
    assert!(!doc.set_position(&sel, 1.0, 1.0));
}

#[test]
fn remove_deletes_only_the_selected_collection() {
    let mut doc = Document::new();
    doc.rooms.push(make_room("x", 0.0, 0.0, 10.0, 10.0));
    doc.doors.push(make_door("x", DoorKind::Standard));
    assert!(doc.remove(&Selection::new(EntityKind::Door, "x")));
    assert!(doc.doors.is_empty());
    assert_eq!(doc.rooms.len(), 1);
    assert!(!doc.remove(&Selection::new(EntityKind::Door, "x")));
}

#[test]
fn contains_tracks_removal() {
    let mut doc = Document::new();
    doc.furniture.push(make_furniture("f1"));
    let sel = Selection::new(EntityKind::Furniture, "f1");
    assert!(doc.contains(&sel));
    doc.remove(&sel);
    assert!(!doc.contains(&sel));
}

#[test]
fn document_refresh_dimensions_covers_all_rooms() {
    let mut doc = Document::new();
    doc.rooms.push(make_room("a", 0.0, 0.0, 20.0, 20.0));
    doc.rooms.push(make_room("b", 0.0, 0.0, 30.0, 10.0));
    doc.refresh_dimensions(&CanvasExtent::default());
    assert_eq!(doc.rooms[0].dimensions, "10' x 10'");
    assert_eq!(doc.rooms[1].dimensions, "15' x 5'");
}

// =============================================================
// GeneratedPlan
// =============================================================

#[test]
fn generated_plan_becomes_furniture_free_document() {
    let plan: GeneratedPlan = serde_json::from_value(json!({
        "rooms": [{
            "id": "room_1", "name": "Kitchen", "dimensions": "wrong", "details": "",
            "x": 0, "y": 0, "w": 20, "h": 24, "type": "kitchen"
        }],
        "doors": [{ "id": "door_1", "x": 20, "y": 10, "orientation": "vertical", "swing": "right" }]
    }))
    .unwrap();

    let doc = plan.into_document(&CanvasExtent::default());
    assert_eq!(doc.rooms.len(), 1);
    assert_eq!(doc.doors.len(), 1);
    assert!(doc.furniture.is_empty());
    assert_eq!(doc.rooms[0].dimensions, "10' x 12'");
    assert_eq!(doc.doors[0].kind, DoorKind::Standard);
}
