//! Input model: editing modes, modifier keys, mouse buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the input engine. `EditorMode`
//! and `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying all context needed to compute deltas from the gesture
//! start and to commit the result on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{EntityId, EntityKind, Selection};

/// Which layer of the plan is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Rooms and doors are pickable; furniture is not.
    #[default]
    Structure,
    /// Furniture is pickable; rooms and doors are not.
    Interior,
}

impl EditorMode {
    /// Whether entities of `kind` may be picked in this mode.
    #[must_use]
    pub fn allows(self, kind: EntityKind) -> bool {
        match self {
            Self::Structure => matches!(kind, EntityKind::Room | EntityKind::Door),
            Self::Interior => kind == EntityKind::Furniture,
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Case-insensitive comparison against a key name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Current editing layer.
    pub mode: EditorMode,
    /// The currently selected entity, if any.
    pub selection: Option<Selection>,
}

/// What a drag session is moving.
#[derive(Debug, Clone, PartialEq)]
pub enum DragTarget {
    /// A room, door or furniture item.
    Entity(Selection),
    /// The whole view (pan).
    Canvas,
}

/// Context captured at pointer-down for one drag gesture.
///
/// For entity drags `start` is the pointer in canvas percent and `initial`
/// is the entity's position. For canvas pans both are in screen pixels:
/// `start` is the pointer and `initial` is the pan offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    pub start: Point,
    pub initial: Point,
}

impl DragSession {
    /// The id being dragged, for entity drags.
    #[must_use]
    pub fn entity_id(&self) -> Option<&EntityId> {
        match &self.target {
            DragTarget::Entity(sel) => Some(&sel.id),
            DragTarget::Canvas => None,
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A pointer-down started a drag that has not been released yet.
    Dragging(DragSession),
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
