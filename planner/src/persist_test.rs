#![allow(clippy::float_cmp)]

use serde_json::{Value, json};

use super::*;
use crate::doc::{Borders, DoorKind, DoorOrientation, DoorSwing, RoomKind};

fn sample_doc() -> Document {
    Document {
        rooms: vec![Room {
            id: "room_1".into(),
            name: "Kitchen".into(),
            dimensions: "10' x 10'".into(),
            details: "Galley".into(),
            x: 0.0,
            y: 0.0,
            w: 20.0,
            h: 20.0,
            kind: RoomKind::Kitchen,
            borders: Borders::default(),
        }],
        doors: vec![Door {
            id: "door_1".into(),
            x: 20.0,
            y: 10.0,
            orientation: DoorOrientation::Vertical,
            swing: DoorSwing::Right,
            kind: DoorKind::Double,
            width: None,
        }],
        furniture: vec![Furniture {
            id: "furniture_1".into(),
            kind: "table_4".into(),
            x: 10.0,
            y: 10.0,
            rotation: 90.0,
            width: 4.0,
            depth: 3.0,
        }],
    }
}

fn extent() -> CanvasExtent {
    CanvasExtent::default()
}

// =============================================================
// export
// =============================================================

#[test]
fn export_writes_header_and_collections() {
    let text = export_json(&sample_doc(), 1_700_000_000_123).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["timestamp"], 1_700_000_000_123_u64);
    assert_eq!(value["rooms"][0]["type"], "kitchen");
    assert_eq!(value["doors"][0]["type"], "double");
    assert!(value["doors"][0].get("width").is_none());
    assert_eq!(value["furniture"][0]["type"], "table_4");
}

#[test]
fn export_is_pretty_printed() {
    let text = export_json(&Document::new(), 0).unwrap();
    assert!(text.contains('\n'));
}

#[test]
fn read_header_returns_version_and_timestamp() {
    let text = export_json(&Document::new(), 42).unwrap();
    let header = read_header(&text).unwrap();
    assert_eq!(header.version.as_deref(), Some("1.0"));
    assert_eq!(header.timestamp, Some(42));
}

// =============================================================
// import: partial replacement
// =============================================================

#[test]
fn import_round_trips_export() {
    let doc = sample_doc();
    let text = export_json(&doc, 0).unwrap();
    let imported = import_json(&Document::new(), &text, &extent()).unwrap();
    assert_eq!(imported, doc);
}

#[test]
fn doors_only_import_keeps_rooms_and_furniture() {
    let current = sample_doc();
    let text = json!({ "doors": [] }).to_string();
    let imported = import_json(&current, &text, &extent()).unwrap();
    assert!(imported.doors.is_empty());
    assert_eq!(imported.rooms, current.rooms);
    assert_eq!(imported.furniture, current.furniture);
}

#[test]
fn non_array_collection_is_ignored() {
    let current = sample_doc();
    let text = json!({ "rooms": "nope", "furniture": null, "extra": 1 }).to_string();
    let imported = import_json(&current, &text, &extent()).unwrap();
    assert_eq!(imported, current);
}

#[test]
fn import_recomputes_room_dimensions() {
    let text = json!({
        "rooms": [{
            "id": "r", "name": "Study", "dimensions": "99' x 99'",
            "x": 0, "y": 0, "w": 15, "h": 16, "type": "study"
        }]
    })
    .to_string();
    let imported = import_json(&Document::new(), &text, &extent()).unwrap();
    assert_eq!(imported.rooms[0].dimensions, "7.5' x 8'");
    assert_eq!(imported.rooms[0].details, "");
    assert_eq!(imported.rooms[0].borders, Borders::default());
}

#[test]
fn import_uses_given_extent() {
    let text = json!({
        "rooms": [{ "id": "r", "name": "Hall", "x": 0, "y": 0, "w": 10, "h": 10, "type": "corridor" }]
    })
    .to_string();
    let imported = import_json(&Document::new(), &text, &CanvasExtent::new(100.0, 40.0)).unwrap();
    assert_eq!(imported.rooms[0].dimensions, "10' x 4'");
}

// =============================================================
// import: rejection
// =============================================================

#[test]
fn malformed_json_is_a_parse_error() {
    let err = import_json(&sample_doc(), "{\"rooms\": [", &extent()).unwrap_err();
    assert!(matches!(err, PersistError::Parse(_)));
    assert_eq!(err.error_code(), "E_PARSE");
}

#[test]
fn top_level_array_is_rejected() {
    let err = import_json(&Document::new(), "[]", &extent()).unwrap_err();
    assert!(matches!(err, PersistError::NotAnObject));
}

#[test]
fn unknown_room_type_fails_whole_import() {
    let text = json!({
        "doors": [],
        "rooms": [{ "id": "r", "name": "Pool", "x": 0, "y": 0, "w": 10, "h": 10, "type": "swimming_pool" }]
    })
    .to_string();
    let err = import_json(&sample_doc(), &text, &extent()).unwrap_err();
    match err {
        PersistError::InvalidEntry { collection, .. } => assert_eq!(collection, "rooms"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_furniture_entry_is_rejected() {
    let text = json!({ "furniture": [{ "id": "f", "type": "bed", "x": "left" }] }).to_string();
    let err = import_json(&Document::new(), &text, &extent()).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_ENTRY");
}

#[test]
fn duplicate_ids_are_rejected() {
    let door = json!({ "id": "d", "x": 1, "y": 1, "orientation": "horizontal", "swing": "left" });
    let text = json!({ "doors": [door.clone(), door] }).to_string();
    let err = import_json(&Document::new(), &text, &extent()).unwrap_err();
    match err {
        PersistError::DuplicateId { collection, id } => {
            assert_eq!(collection, "doors");
            assert_eq!(id, "d");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn same_id_across_collections_is_allowed() {
    let text = json!({
        "doors": [{ "id": "x", "x": 1, "y": 1, "orientation": "horizontal", "swing": "left" }],
        "furniture": [{ "id": "x", "type": "chair", "x": 1, "y": 1, "rotation": 0, "width": 2, "depth": 2 }]
    })
    .to_string();
    let imported = import_json(&Document::new(), &text, &extent()).unwrap();
    assert_eq!(imported.len(), 2);
}
