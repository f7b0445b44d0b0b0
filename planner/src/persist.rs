//! JSON export and partial import of plan documents.
//!
//! The saved format is
//! `{ "version": "1.0", "timestamp": <epoch-ms>, "rooms": [...], "doors": [...], "furniture": [...] }`.
//!
//! Import is partial: each of `rooms`, `doors` and `furniture` replaces the
//! matching collection only when the key is present and holds an array.
//! Anything else about the file (missing keys, extra keys, a non-array value)
//! leaves that collection alone. Import is also all-or-nothing: if any
//! present array fails to decode, nothing is replaced.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::doc::{Document, Door, EntityId, Furniture, Room};
use crate::geometry::CanvasExtent;

/// Format version written by [`export_json`].
pub const FORMAT_VERSION: &str = "1.0";

/// Errors produced by import and export.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The top-level JSON value is not an object.
    #[error("expected a JSON object at the top level")]
    NotAnObject,

    /// A collection array contains an entry that does not match its schema.
    #[error("invalid {collection} entry: {message}")]
    InvalidEntry { collection: &'static str, message: String },

    /// Two entries in one collection share an id.
    #[error("duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: EntityId },

    /// The document could not be serialized.
    #[error("serialize failed: {0}")]
    Serialize(String),
}

impl PersistError {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_PARSE",
            Self::NotAnObject => "E_NOT_AN_OBJECT",
            Self::InvalidEntry { .. } => "E_INVALID_ENTRY",
            Self::DuplicateId { .. } => "E_DUPLICATE_ID",
            Self::Serialize(_) => "E_SERIALIZE",
        }
    }
}

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    version: &'static str,
    timestamp: u64,
    rooms: &'a [Room],
    doors: &'a [Door],
    furniture: &'a [Furniture],
}

/// Header fields of a saved plan, for callers that want to inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportHeader {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// Serialize `doc` to the pretty-printed saved format.
///
/// # Errors
///
/// Returns [`PersistError::Serialize`] if serialization fails (e.g. a
/// non-finite coordinate).
pub fn export_json(doc: &Document, timestamp_ms: u64) -> Result<String, PersistError> {
    let envelope = ExportEnvelope {
        version: FORMAT_VERSION,
        timestamp: timestamp_ms,
        rooms: &doc.rooms,
        doors: &doc.doors,
        furniture: &doc.furniture,
    };
    serde_json::to_string_pretty(&envelope).map_err(|e| PersistError::Serialize(e.to_string()))
}

/// Read only the header of a saved plan.
///
/// # Errors
///
/// Returns [`PersistError::Parse`] if `text` is not a JSON object.
pub fn read_header(text: &str) -> Result<ExportHeader, PersistError> {
    serde_json::from_str(text).map_err(|e| PersistError::Parse(e.to_string()))
}

/// Apply a saved plan on top of `current`, returning the merged document.
///
/// `current` is never modified; on error the caller keeps using it as is.
/// Imported rooms get their `dimensions` label recomputed for `extent`.
///
/// # Errors
///
/// Returns a [`PersistError`] if the text is not JSON, is not an object, or
/// a present collection array fails to decode or repeats an id.
pub fn import_json(current: &Document, text: &str, extent: &CanvasExtent) -> Result<Document, PersistError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "import: malformed JSON");
        PersistError::Parse(e.to_string())
    })?;
    let Some(obj) = value.as_object() else {
        return Err(PersistError::NotAnObject);
    };

    let rooms: Option<Vec<Room>> = decode_collection(obj, "rooms", |r: &Room| &r.id)?;
    let doors: Option<Vec<Door>> = decode_collection(obj, "doors", |d: &Door| &d.id)?;
    let furniture: Option<Vec<Furniture>> = decode_collection(obj, "furniture", |f: &Furniture| &f.id)?;

    let mut next = current.clone();
    if let Some(mut rooms) = rooms {
        for room in &mut rooms {
            room.refresh_dimensions(extent);
        }
        next.rooms = rooms;
    }
    if let Some(doors) = doors {
        next.doors = doors;
    }
    if let Some(furniture) = furniture {
        next.furniture = furniture;
    }

    debug!(
        rooms = next.rooms.len(),
        doors = next.doors.len(),
        furniture = next.furniture.len(),
        "import: applied"
    );
    Ok(next)
}

/// Decode `obj[key]` when it is an array; `None` when absent or not an array.
fn decode_collection<T, F>(
    obj: &serde_json::Map<String, serde_json::Value>,
    key: &'static str,
    id_of: F,
) -> Result<Option<Vec<T>>, PersistError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> &EntityId,
{
    let Some(serde_json::Value::Array(items)) = obj.get(key) else {
        return Ok(None);
    };

    let mut out = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();
    for item in items {
        let entry: T = serde_json::from_value(item.clone()).map_err(|e| {
            warn!(collection = key, error = %e, "import: invalid entry");
            PersistError::InvalidEntry { collection: key, message: e.to_string() }
        })?;
        if !seen.insert(id_of(&entry).clone()) {
            return Err(PersistError::DuplicateId { collection: key, id: id_of(&entry).clone() });
        }
        out.push(entry);
    }
    Ok(Some(out))
}
