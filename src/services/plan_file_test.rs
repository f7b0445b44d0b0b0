use std::path::PathBuf;

use planner::doc::{Borders, Room, RoomKind};

use super::*;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("floorplan_{}_{name}.json", std::process::id()))
}

fn one_room() -> Document {
    let mut doc = Document::new();
    doc.rooms.push(Room {
        id: "room_a".into(),
        name: "Office".into(),
        dimensions: String::new(),
        details: String::new(),
        x: 10.0,
        y: 10.0,
        w: 20.0,
        h: 24.0,
        kind: RoomKind::Study,
        borders: Borders::default(),
    });
    doc
}

#[tokio::test]
async fn write_then_read_restores_document() {
    let path = scratch("roundtrip");
    write_plan(&path, &one_room()).await.unwrap();

    let doc = read_plan(&path, &Document::new(), &CanvasExtent::default()).await.unwrap();
    assert_eq!(doc.rooms.len(), 1);
    assert_eq!(doc.rooms[0].name, "Office");
    assert_eq!(doc.rooms[0].dimensions, "10' x 12'");

    let text = tokio::fs::read_to_string(&path).await.unwrap();
    let header = persist::read_header(&text).unwrap();
    assert_eq!(header.version.as_deref(), Some(persist::FORMAT_VERSION));
    assert!(header.timestamp.unwrap_or(0) > 0);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let path = scratch("missing");
    let err = read_plan(&path, &Document::new(), &CanvasExtent::default()).await.unwrap_err();
    assert!(matches!(err, PlanFileError::Io { .. }));
    assert_eq!(err.error_code(), "E_PLAN_FILE_IO");
    assert!(err.to_string().contains("floorplan_"));
}

#[tokio::test]
async fn bad_content_keeps_persist_code() {
    let path = scratch("bad");
    tokio::fs::write(&path, "not json").await.unwrap();

    let err = read_plan(&path, &one_room(), &CanvasExtent::default()).await.unwrap_err();
    assert_eq!(err.error_code(), "E_PARSE");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}
