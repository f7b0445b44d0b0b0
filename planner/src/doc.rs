//! Document model: rooms, doors, furniture and the document that owns them.
//!
//! This module defines the data that makes up a floor plan (`Room`, `Door`,
//! `Furniture`), the closed tag sets they are classified by (`RoomKind`,
//! `DoorKind`, ...), the transient `Selection` pointer, and the `Document`
//! aggregate that history snapshots.
//!
//! Data flows into this layer from JSON import and AI generation and from the
//! editing engine. The host renders straight from `Document`'s collections;
//! draw order is collection order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DOOR_WIDTH_FT, DOUBLE_DOOR_WIDTH_FT};
use crate::geometry::CanvasExtent;

/// Unique identifier for an entity within its collection.
pub type EntityId = String;

/// Mint a fresh id such as `room_3f2a...`. Ids are never reused.
#[must_use]
pub fn new_id(prefix: &str) -> EntityId {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// Category of a room. Drives validation rule lookup and presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    MasterBedroom,
    Bedroom,
    Nursery,
    Living,
    LivingFormal,
    LivingFamily,
    Dining,
    BreakfastNook,
    KitchenGalley,
    Kitchen,
    KitchenGourmet,
    Bathroom,
    BathroomMaster,
    BathroomFull,
    BathroomThreeQuarter,
    BathroomHalf,
    Study,
    Laundry,
    Pantry,
    Mudroom,
    ClosetMaster,
    ClosetWalkin,
    ClosetLinen,
    Garage,
    #[serde(rename = "garage_1car")]
    Garage1Car,
    #[serde(rename = "garage_2car")]
    Garage2Car,
    #[serde(rename = "garage_3car")]
    Garage3Car,
    Utility,
    Outdoor,
    Corridor,
    Entrance,
    Storage,
}

impl RoomKind {
    /// Every variant, in declaration order.
    pub const ALL: [RoomKind; 32] = [
        Self::MasterBedroom,
        Self::Bedroom,
        Self::Nursery,
        Self::Living,
        Self::LivingFormal,
        Self::LivingFamily,
        Self::Dining,
        Self::BreakfastNook,
        Self::KitchenGalley,
        Self::Kitchen,
        Self::KitchenGourmet,
        Self::Bathroom,
        Self::BathroomMaster,
        Self::BathroomFull,
        Self::BathroomThreeQuarter,
        Self::BathroomHalf,
        Self::Study,
        Self::Laundry,
        Self::Pantry,
        Self::Mudroom,
        Self::ClosetMaster,
        Self::ClosetWalkin,
        Self::ClosetLinen,
        Self::Garage,
        Self::Garage1Car,
        Self::Garage2Car,
        Self::Garage3Car,
        Self::Utility,
        Self::Outdoor,
        Self::Corridor,
        Self::Entrance,
        Self::Storage,
    ];

    /// The wire tag, e.g. `"master_bedroom"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::MasterBedroom => "master_bedroom",
            Self::Bedroom => "bedroom",
            Self::Nursery => "nursery",
            Self::Living => "living",
            Self::LivingFormal => "living_formal",
            Self::LivingFamily => "living_family",
            Self::Dining => "dining",
            Self::BreakfastNook => "breakfast_nook",
            Self::KitchenGalley => "kitchen_galley",
            Self::Kitchen => "kitchen",
            Self::KitchenGourmet => "kitchen_gourmet",
            Self::Bathroom => "bathroom",
            Self::BathroomMaster => "bathroom_master",
            Self::BathroomFull => "bathroom_full",
            Self::BathroomThreeQuarter => "bathroom_three_quarter",
            Self::BathroomHalf => "bathroom_half",
            Self::Study => "study",
            Self::Laundry => "laundry",
            Self::Pantry => "pantry",
            Self::Mudroom => "mudroom",
            Self::ClosetMaster => "closet_master",
            Self::ClosetWalkin => "closet_walkin",
            Self::ClosetLinen => "closet_linen",
            Self::Garage => "garage",
            Self::Garage1Car => "garage_1car",
            Self::Garage2Car => "garage_2car",
            Self::Garage3Car => "garage_3car",
            Self::Utility => "utility",
            Self::Outdoor => "outdoor",
            Self::Corridor => "corridor",
            Self::Entrance => "entrance",
            Self::Storage => "storage",
        }
    }
}

/// Wall visibility per side. Presentational only.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Borders {
    fn default() -> Self {
        Self { top: true, bottom: true, left: true, right: true }
    }
}

/// One side of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Borders {
    /// Flip visibility of one wall.
    pub fn toggle(&mut self, wall: Wall) {
        let side = match wall {
            Wall::Top => &mut self.top,
            Wall::Bottom => &mut self.bottom,
            Wall::Left => &mut self.left,
            Wall::Right => &mut self.right,
        };
        *side = !*side;
    }
}

/// A rectangular room in canvas percentage space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier within the room collection.
    pub id: EntityId,
    /// Display label.
    pub name: String,
    /// Cached `W' x H'` label. Derived from `w`/`h`; never a source of truth.
    #[serde(default)]
    pub dimensions: String,
    /// Free-text description of the room's purpose.
    #[serde(default)]
    pub details: String,
    /// Left edge in percent.
    pub x: f64,
    /// Top edge in percent.
    pub y: f64,
    /// Width in percent.
    pub w: f64,
    /// Height in percent.
    pub h: f64,
    /// Room category.
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Which walls are drawn.
    #[serde(default)]
    pub borders: Borders,
}

impl Room {
    /// Recompute the cached `dimensions` label from `w`/`h`.
    pub fn refresh_dimensions(&mut self, extent: &CanvasExtent) {
        self.dimensions = extent.dimension_string(self.w, self.h);
    }

    /// Right edge in percent.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge in percent.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Whether a percent-space point lies inside the room (edges inclusive).
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Which axis a door's long edge follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorOrientation {
    Horizontal,
    Vertical,
}

/// Direction the swing arc is drawn. No geometric effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSwing {
    Left,
    Right,
}

/// Door style. Determines the default width and the rendered symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    #[default]
    Standard,
    Double,
    Sliding,
    Open,
}

/// A door symbol, positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Unique identifier within the door collection.
    pub id: EntityId,
    /// Center x in percent.
    pub x: f64,
    /// Center y in percent.
    pub y: f64,
    pub orientation: DoorOrientation,
    pub swing: DoorSwing,
    #[serde(rename = "type", default)]
    pub kind: DoorKind,
    /// Explicit width override in feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Door {
    /// Width in feet: the explicit override if set, otherwise 6ft for a
    /// double door and 3ft for everything else.
    #[must_use]
    pub fn effective_width(&self) -> f64 {
        match (self.width, self.kind) {
            (Some(w), _) => w,
            (None, DoorKind::Double) => DOUBLE_DOOR_WIDTH_FT,
            (None, _) => DOOR_WIDTH_FT,
        }
    }
}

/// A furniture item, positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// Unique identifier within the furniture collection.
    pub id: EntityId,
    /// Visual template tag, e.g. `"bed_queen"`. No geometric meaning.
    #[serde(rename = "type")]
    pub kind: String,
    /// Center x in percent.
    pub x: f64,
    /// Center y in percent.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Width in feet.
    pub width: f64,
    /// Depth in feet.
    pub depth: f64,
}

/// Which collection an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Room,
    Door,
    Furniture,
}

/// The currently selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl Selection {
    #[must_use]
    pub fn new(kind: EntityKind, id: impl Into<EntityId>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// The full editable floor plan. History snapshots whole documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    #[must_use]
    pub fn door(&self, id: &str) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn door_mut(&mut self, id: &str) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    #[must_use]
    pub fn furniture_item(&self, id: &str) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_mut(&mut self, id: &str) -> Option<&mut Furniture> {
        self.furniture.iter_mut().find(|f| f.id == id)
    }

    /// Whether the entity a selection points at still exists.
    #[must_use]
    pub fn contains(&self, selection: &Selection) -> bool {
        self.position_of(selection).is_some()
    }

    /// Position of a selected entity: top-left for rooms, center for doors and furniture.
    #[must_use]
    pub fn position_of(&self, selection: &Selection) -> Option<(f64, f64)> {
        match selection.kind {
            EntityKind::Room => self.room(&selection.id).map(|r| (r.x, r.y)),
            EntityKind::Door => self.door(&selection.id).map(|d| (d.x, d.y)),
            EntityKind::Furniture => self.furniture_item(&selection.id).map(|f| (f.x, f.y)),
        }
    }

    /// Move a selected entity. Returns false if it does not exist.
    pub fn set_position(&mut self, selection: &Selection, x: f64, y: f64) -> bool {
        let slot = match selection.kind {
            EntityKind::Room => self.room_mut(&selection.id).map(|r| (&mut r.x, &mut r.y)),
            EntityKind::Door => self.door_mut(&selection.id).map(|d| (&mut d.x, &mut d.y)),
            EntityKind::Furniture => self.furniture_mut(&selection.id).map(|f| (&mut f.x, &mut f.y)),
        };
        let Some((sx, sy)) = slot else {
            return false;
        };
        *sx = x;
        *sy = y;
        true
    }

    /// Remove a selected entity. Returns false if it was not present.
    pub fn remove(&mut self, selection: &Selection) -> bool {
        let id = selection.id.as_str();
        match selection.kind {
            EntityKind::Room => remove_by_id(&mut self.rooms, id, |r| &r.id),
            EntityKind::Door => remove_by_id(&mut self.doors, id, |d| &d.id),
            EntityKind::Furniture => remove_by_id(&mut self.furniture, id, |f| &f.id),
        }
    }

    /// Recompute every room's cached dimensions label.
    pub fn refresh_dimensions(&mut self, extent: &CanvasExtent) {
        for room in &mut self.rooms {
            room.refresh_dimensions(extent);
        }
    }

    /// Total number of entities across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len() + self.doors.len() + self.furniture.len()
    }

    /// Returns `true` if the document contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, key: impl Fn(&T) -> &EntityId) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

/// A complete layout proposed by the plan generator: rooms and doors only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl GeneratedPlan {
    /// Turn the proposal into a fresh document with no furniture and
    /// recomputed room labels.
    #[must_use]
    pub fn into_document(self, extent: &CanvasExtent) -> Document {
        let mut doc = Document { rooms: self.rooms, doors: self.doors, furniture: Vec::new() };
        doc.refresh_dimensions(extent);
        doc
    }
}
