//! Editor engine: the drag/transform controller plus the editing API.
//!
//! `EngineCore` owns everything the editor needs between events: the
//! document history, the camera and viewport, the UI state and the active
//! gesture. Host input handlers call into it and get back a list of
//! [`Action`]s describing what changed. Nothing here touches a rendering
//! surface, so every behavior is testable headless.
//!
//! Drags write draft frames with `update_without_history` and commit once on
//! pointer-up, so a whole drag is one undo step. Canvas pans only move the
//! camera and never reach the history.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info};

use crate::camera::{Camera, Point, Viewport};
use crate::consts::{
    NEW_ITEM_POS, NEW_ROOM_POS, NEW_ROOM_SIZE, PASTE_OFFSET, ROOM_SIZE_MAX, ROOM_SIZE_MIN, ROTATION_STEP_DEG,
    SNAP_THRESHOLD, ZOOM_WHEEL_FACTOR,
};
use crate::doc::{
    Borders, Document, Door, DoorKind, DoorOrientation, DoorSwing, EntityKind, Furniture, GeneratedPlan,
    Room, RoomKind, Selection, Wall, new_id,
};
use crate::geometry::CanvasExtent;
use crate::history::History;
use crate::hit::hit_test;
use crate::input::{Button, DragSession, DragTarget, EditorMode, InputState, Key, Modifiers, UiState, WheelDelta};
use crate::persist::{self, PersistError};
use crate::snap::{round_to_grid, snap_room_position};
use crate::validation::{ValidationResult, validate_room};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The visible document changed without creating a checkpoint.
    DocumentDrafted,
    /// The document moved to a different checkpoint (commit, undo, redo).
    DocumentCommitted,
    /// The selection changed.
    SelectionChanged(Option<Selection>),
    /// The camera moved or zoomed.
    CameraChanged(Camera),
    /// The host should change the pointer cursor.
    SetCursor(String),
    RenderNeeded,
}

/// Engine tuning that stays fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Physical size of the canvas.
    pub extent: CanvasExtent,
    /// Edge snap distance in percent units.
    pub snap_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { extent: CanvasExtent::default(), snap_threshold: SNAP_THRESHOLD }
    }
}

/// A copied entity waiting to be pasted.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardItem {
    Room(Room),
    Door(Door),
    Furniture(Furniture),
}

/// Core engine state.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub history: History<Document>,
    pub camera: Camera,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub clipboard: Option<ClipboardItem>,
    pub config: EngineConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            history: History::new(Document::new()),
            camera: Camera::default(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            input: InputState::default(),
            clipboard: None,
            config,
        }
    }

    /// Start from an existing document. Its room labels are recomputed and it
    /// becomes the only checkpoint.
    #[must_use]
    pub fn with_document(mut document: Document, config: EngineConfig) -> Self {
        document.refresh_dimensions(&config.extent);
        let mut core = Self::with_config(config);
        core.history = History::new(document);
        core
    }

    /// Update the container rectangle used for screen conversions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Input events ---

    /// Pick the entity under the pointer and start dragging it, or start a
    /// canvas pan when nothing pickable is there.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => {}
            Button::Middle => return self.start_pan(screen_pt),
            Button::Secondary => return Vec::new(),
        }

        let percent = self.camera.screen_to_percent(screen_pt, &self.viewport);
        match hit_test(self.document(), percent, self.ui.mode, &self.config.extent) {
            Some(selection) => self.start_entity_drag(selection, percent),
            None => {
                let mut actions = self.set_selection(None);
                actions.extend(self.start_pan(screen_pt));
                actions
            }
        }
    }

    /// Start dragging an entity the host picked itself.
    ///
    /// Ignored when the entity no longer exists or the current mode cannot
    /// pick its kind.
    pub fn begin_drag(&mut self, selection: Selection, screen_pt: Point) -> Vec<Action> {
        if !self.ui.mode.allows(selection.kind) || !self.document().contains(&selection) {
            return Vec::new();
        }
        let percent = self.camera.screen_to_percent(screen_pt, &self.viewport);
        self.start_entity_drag(selection, percent)
    }

    /// Advance the active drag.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging(session) = &self.input else {
            return Vec::new();
        };
        let session = session.clone();
        match session.target {
            DragTarget::Entity(ref selection) => self.drag_entity(selection, &session, screen_pt),
            DragTarget::Canvas => {
                self.camera.pan_x = session.initial.x + (screen_pt.x - session.start.x);
                self.camera.pan_y = session.initial.y + (screen_pt.y - session.start.y);
                vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
            }
        }
    }

    /// Finish the active gesture. Always returns the engine to idle.
    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = self.on_pointer_move(screen_pt);
        let session = match std::mem::take(&mut self.input) {
            InputState::Idle => return actions,
            InputState::Dragging(session) => session,
        };

        match session.target {
            DragTarget::Entity(selection) => {
                let present = self.history.present().clone();
                if self.history.set_state(present) {
                    debug!(id = %selection.id, "drag committed");
                    actions.push(Action::DocumentCommitted);
                    actions.push(Action::RenderNeeded);
                }
            }
            DragTarget::Canvas => actions.push(Action::SetCursor("default".into())),
        }
        actions
    }

    /// Zoom about the pointer. Positive `dy` zooms out.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let factor = ZOOM_WHEEL_FACTOR.powf(-delta.dy / 100.0);
        self.camera.zoom_about(screen_pt, self.camera.zoom * factor, &self.viewport);
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    /// Handle a keyboard shortcut. Ignored while a text input has focus.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, text_input_focused: bool) -> Vec<Action> {
        if text_input_focused {
            return Vec::new();
        }

        if modifiers.command() {
            if key.is("z") {
                return if modifiers.shift { self.redo() } else { self.undo() };
            }
            if key.is("y") {
                return self.redo();
            }
            if key.is("c") {
                self.copy_selection();
                return Vec::new();
            }
            if key.is("v") {
                return self.paste();
            }
            return Vec::new();
        }

        if key.is("Delete") || key.is("Backspace") {
            return self.delete_selected();
        }
        if key.is("Escape") {
            return self.set_selection(None);
        }
        Vec::new()
    }

    // --- Editing API ---

    /// Add a default bedroom and select it.
    pub fn add_room(&mut self) -> Vec<Action> {
        let mut room = Room {
            id: new_id("room"),
            name: "New Room".into(),
            dimensions: String::new(),
            details: String::new(),
            x: NEW_ROOM_POS,
            y: NEW_ROOM_POS,
            w: NEW_ROOM_SIZE,
            h: NEW_ROOM_SIZE,
            kind: RoomKind::Bedroom,
            borders: Borders::default(),
        };
        room.refresh_dimensions(&self.config.extent);
        self.insert(ClipboardItem::Room(room))
    }

    /// Add a standard door at the canvas center and select it.
    pub fn add_door(&mut self) -> Vec<Action> {
        let door = Door {
            id: new_id("door"),
            x: NEW_ITEM_POS,
            y: NEW_ITEM_POS,
            orientation: DoorOrientation::Horizontal,
            swing: DoorSwing::Left,
            kind: DoorKind::Standard,
            width: None,
        };
        self.insert(ClipboardItem::Door(door))
    }

    /// Add a furniture item at the canvas center.
    pub fn add_furniture(&mut self, kind: &str, width: f64, depth: f64) -> Vec<Action> {
        let item = Furniture {
            id: new_id("furniture"),
            kind: kind.to_owned(),
            x: NEW_ITEM_POS,
            y: NEW_ITEM_POS,
            rotation: 0.0,
            width,
            depth,
        };
        self.insert(ClipboardItem::Furniture(item))
    }

    /// Copy a room next to the original and select the copy.
    pub fn duplicate_room(&mut self, id: &str) -> Vec<Action> {
        let Some(room) = self.document().room(id).cloned() else {
            return Vec::new();
        };
        self.insert(offset_copy(ClipboardItem::Room(room)))
    }

    /// Delete the selected entity.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(selection) = self.ui.selection.clone() else {
            return Vec::new();
        };
        let mut actions = self.commit(|doc| doc.remove(&selection));
        actions.extend(self.set_selection(None));
        actions
    }

    pub fn rename_room(&mut self, id: &str, name: &str) -> Vec<Action> {
        self.edit_room(id, |room| room.name = name.to_owned())
    }

    pub fn set_room_details(&mut self, id: &str, details: &str) -> Vec<Action> {
        self.edit_room(id, |room| room.details = details.to_owned())
    }

    pub fn set_room_kind(&mut self, id: &str, kind: RoomKind) -> Vec<Action> {
        self.edit_room(id, |room| room.kind = kind)
    }

    /// Resize a room, clamping each side to `[ROOM_SIZE_MIN, ROOM_SIZE_MAX]`.
    pub fn resize_room(&mut self, id: &str, w: f64, h: f64) -> Vec<Action> {
        let extent = self.config.extent;
        self.edit_room(id, |room| {
            room.w = w.clamp(ROOM_SIZE_MIN, ROOM_SIZE_MAX);
            room.h = h.clamp(ROOM_SIZE_MIN, ROOM_SIZE_MAX);
            room.refresh_dimensions(&extent);
        })
    }

    pub fn toggle_border(&mut self, id: &str, wall: Wall) -> Vec<Action> {
        self.edit_room(id, |room| room.borders.toggle(wall))
    }

    pub fn set_door_orientation(&mut self, id: &str, orientation: DoorOrientation) -> Vec<Action> {
        self.edit_door(id, |door| door.orientation = orientation)
    }

    pub fn set_door_swing(&mut self, id: &str, swing: DoorSwing) -> Vec<Action> {
        self.edit_door(id, |door| door.swing = swing)
    }

    pub fn set_door_kind(&mut self, id: &str, kind: DoorKind) -> Vec<Action> {
        self.edit_door(id, |door| door.kind = kind)
    }

    /// Set or clear a door's explicit width in feet.
    pub fn set_door_width(&mut self, id: &str, width: Option<f64>) -> Vec<Action> {
        self.edit_door(id, |door| door.width = width)
    }

    /// Rotate furniture by `steps` increments of 45 degrees (negative is
    /// counter-clockwise). The result stays within `[0, 360)`.
    pub fn rotate_furniture(&mut self, id: &str, steps: i32) -> Vec<Action> {
        self.commit(|doc| {
            let Some(item) = doc.furniture_mut(id) else {
                return false;
            };
            item.rotation = (item.rotation + f64::from(steps) * ROTATION_STEP_DEG).rem_euclid(360.0);
            true
        })
    }

    /// Switch the editable layer. A selection the new mode cannot pick is dropped.
    pub fn set_mode(&mut self, mode: EditorMode) -> Vec<Action> {
        self.ui.mode = mode;
        let gated = self.ui.selection.as_ref().is_some_and(|s| !mode.allows(s.kind));
        if gated {
            return self.set_selection(None);
        }
        vec![Action::RenderNeeded]
    }

    // --- Clipboard ---

    /// Copy the selected entity. Returns false when nothing is selected.
    pub fn copy_selection(&mut self) -> bool {
        let Some(selection) = &self.ui.selection else {
            return false;
        };
        let doc = self.history.present();
        let item = match selection.kind {
            EntityKind::Room => doc.room(&selection.id).cloned().map(ClipboardItem::Room),
            EntityKind::Door => doc.door(&selection.id).cloned().map(ClipboardItem::Door),
            EntityKind::Furniture => doc.furniture_item(&selection.id).cloned().map(ClipboardItem::Furniture),
        };
        let copied = item.is_some();
        if copied {
            self.clipboard = item;
        }
        copied
    }

    /// Insert a copy of the clipboard entity and select it.
    pub fn paste(&mut self) -> Vec<Action> {
        let Some(item) = self.clipboard.clone() else {
            return Vec::new();
        };
        self.insert(offset_copy(item))
    }

    // --- History ---

    pub fn undo(&mut self) -> Vec<Action> {
        // A refused step keeps any in-flight drag.
        if !self.history.undo() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.after_document_swap()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if !self.history.redo() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.after_document_swap()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear_history();
    }

    // --- Import / export / generation ---

    /// Apply a saved plan on top of the current document as one checkpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`PersistError`] from decoding; the document is unchanged.
    pub fn import_json(&mut self, text: &str) -> Result<Vec<Action>, PersistError> {
        let next = persist::import_json(self.history.present(), text, &self.config.extent)?;
        if !self.history.set_state(next) {
            return Ok(Vec::new());
        }
        info!(entities = self.document().len(), "plan imported");
        Ok(self.after_document_swap())
    }

    /// Serialize the current document.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Serialize`] if the document cannot be encoded.
    pub fn export_json(&self, timestamp_ms: u64) -> Result<String, PersistError> {
        persist::export_json(self.document(), timestamp_ms)
    }

    /// Replace the document with a generated layout as one checkpoint.
    pub fn apply_generated(&mut self, plan: GeneratedPlan) -> Vec<Action> {
        let next = plan.into_document(&self.config.extent);
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if self.history.set_state(next) {
            info!(rooms = self.document().rooms.len(), doors = self.document().doors.len(), "generated plan applied");
            actions.push(Action::DocumentCommitted);
        }
        actions.extend(self.set_selection(None));
        actions
    }

    // --- Queries ---

    /// The document as currently shown, including any draft drag frame.
    #[must_use]
    pub fn document(&self) -> &Document {
        self.history.present()
    }

    /// The currently selected entity, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.ui.selection.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.ui.mode
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.document().room(id)
    }

    #[must_use]
    pub fn door(&self, id: &str) -> Option<&Door> {
        self.document().door(id)
    }

    #[must_use]
    pub fn furniture(&self, id: &str) -> Option<&Furniture> {
        self.document().furniture_item(id)
    }

    /// Advisory size check for one room.
    #[must_use]
    pub fn room_validation(&self, id: &str) -> Option<ValidationResult> {
        self.room(id).map(|room| validate_room(room, &self.config.extent))
    }

    // --- Internals ---

    fn start_entity_drag(&mut self, selection: Selection, percent: Point) -> Vec<Action> {
        let Some((x, y)) = self.document().position_of(&selection) else {
            return Vec::new();
        };
        self.input = InputState::Dragging(DragSession {
            target: DragTarget::Entity(selection.clone()),
            start: percent,
            initial: Point::new(x, y),
        });
        let mut actions = self.set_selection(Some(selection));
        actions.push(Action::SetCursor("move".into()));
        actions
    }

    fn start_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Dragging(DragSession {
            target: DragTarget::Canvas,
            start: screen_pt,
            initial: Point::new(self.camera.pan_x, self.camera.pan_y),
        });
        vec![Action::SetCursor("grabbing".into())]
    }

    fn drag_entity(&mut self, selection: &Selection, session: &DragSession, screen_pt: Point) -> Vec<Action> {
        let percent = self.camera.screen_to_percent(screen_pt, &self.viewport);
        let candidate = Point::new(
            round_to_grid(session.initial.x + (percent.x - session.start.x)),
            round_to_grid(session.initial.y + (percent.y - session.start.y)),
        );

        let doc = self.history.present();
        let target = match selection.kind {
            EntityKind::Room => {
                let Some(room) = doc.room(&selection.id) else {
                    return Vec::new();
                };
                snap_room_position(candidate, (room.w, room.h), &room.id, &doc.rooms, self.config.snap_threshold)
            }
            EntityKind::Door | EntityKind::Furniture => candidate,
        };

        match doc.position_of(selection) {
            None => return Vec::new(),
            Some((x, y)) if x == target.x && y == target.y => return Vec::new(),
            Some(_) => {}
        }

        self.history.update_without_history_with(|doc| {
            let mut next = doc.clone();
            next.set_position(selection, target.x, target.y);
            next
        });
        vec![Action::DocumentDrafted, Action::RenderNeeded]
    }

    /// Clone `present`, apply `edit`, and commit when `edit` reports a change.
    fn commit<F>(&mut self, edit: F) -> Vec<Action>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let mut next = self.history.present().clone();
        if !edit(&mut next) {
            return Vec::new();
        }
        if self.history.set_state(next) {
            vec![Action::DocumentCommitted, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn edit_room<F>(&mut self, id: &str, edit: F) -> Vec<Action>
    where
        F: FnOnce(&mut Room),
    {
        self.commit(|doc| {
            let Some(room) = doc.room_mut(id) else {
                return false;
            };
            edit(room);
            true
        })
    }

    fn edit_door<F>(&mut self, id: &str, edit: F) -> Vec<Action>
    where
        F: FnOnce(&mut Door),
    {
        self.commit(|doc| {
            let Some(door) = doc.door_mut(id) else {
                return false;
            };
            edit(door);
            true
        })
    }

    /// Commit a new entity and select it when the current mode can pick it.
    fn insert(&mut self, item: ClipboardItem) -> Vec<Action> {
        let extent = self.config.extent;
        let selection = match &item {
            ClipboardItem::Room(room) => Selection::new(EntityKind::Room, room.id.clone()),
            ClipboardItem::Door(door) => Selection::new(EntityKind::Door, door.id.clone()),
            ClipboardItem::Furniture(f) => Selection::new(EntityKind::Furniture, f.id.clone()),
        };
        let mut actions = self.commit(|doc| {
            match item {
                ClipboardItem::Room(mut room) => {
                    room.refresh_dimensions(&extent);
                    doc.rooms.push(room);
                }
                ClipboardItem::Door(door) => doc.doors.push(door),
                ClipboardItem::Furniture(f) => doc.furniture.push(f),
            }
            true
        });
        if self.ui.mode.allows(selection.kind) {
            actions.extend(self.set_selection(Some(selection)));
        }
        actions
    }

    fn set_selection(&mut self, selection: Option<Selection>) -> Vec<Action> {
        if self.ui.selection == selection {
            return Vec::new();
        }
        self.ui.selection.clone_from(&selection);
        vec![Action::SelectionChanged(selection), Action::RenderNeeded]
    }

    /// Bookkeeping after `present` jumped to another checkpoint.
    fn after_document_swap(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::DocumentCommitted, Action::RenderNeeded];
        let stale = self.ui.selection.as_ref().is_some_and(|s| !self.history.present().contains(s));
        if stale {
            actions.extend(self.set_selection(None));
        }
        actions
    }
}

/// A copy of `item` with a fresh id, shifted by the paste offset. Room
/// copies get a `(Copy)` suffix.
fn offset_copy(item: ClipboardItem) -> ClipboardItem {
    match item {
        ClipboardItem::Room(mut room) => {
            room.id = new_id("room");
            room.name = format!("{} (Copy)", room.name);
            room.x += PASTE_OFFSET;
            room.y += PASTE_OFFSET;
            ClipboardItem::Room(room)
        }
        ClipboardItem::Door(mut door) => {
            door.id = new_id("door");
            door.x += PASTE_OFFSET;
            door.y += PASTE_OFFSET;
            ClipboardItem::Door(door)
        }
        ClipboardItem::Furniture(mut item) => {
            item.id = new_id("furniture");
            item.x += PASTE_OFFSET;
            item.y += PASTE_OFFSET;
            ClipboardItem::Furniture(item)
        }
    }
}

