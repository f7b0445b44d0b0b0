//! Geometric editing engine for the floor-plan editor.
//!
//! This crate owns everything about a floor plan that is not pixels: the
//! document model (rooms, doors, furniture), percentage/feet conversion, room
//! size validation, magnetic edge snapping, the undo/redo history with
//! draft/commit semantics, and the pointer/keyboard state machine that turns
//! raw gestures into document edits. The host is responsible only for wiring
//! input events to [`engine::EngineCore`] and drawing the resulting
//! [`doc::Document`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Drag/transform controller and editing API ([`engine::EngineCore`]) |
//! | [`history`] | Generic past/present/future history with uncommitted drafts |
//! | [`doc`] | Document, room, door and furniture types |
//! | [`geometry`] | Canvas extent, percent/feet conversion, dimension strings |
//! | [`validation`] | Per-room minimum size rules |
//! | [`snap`] | Grid rounding and room-to-room edge snapping |
//! | [`camera`] | Pan/zoom camera and screen-to-percent conversion |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Resolving the entity under the pointer |
//! | [`persist`] | JSON export and partial import |
//! | [`standards`] | Reference room-size catalog |
//! | [`describe`] | Plain-text plan description |
//! | [`consts`] | Shared numeric constants (snap threshold, size limits, etc.) |

pub mod camera;
pub mod consts;
pub mod describe;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod persist;
pub mod snap;
pub mod standards;
pub mod validation;
