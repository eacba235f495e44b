//! Pointer, wheel and keyboard input handling for the editor.
//!
//! This module implements all interaction logic: panning, placing positions,
//! building arcs, hovering, selecting, dragging points and deleting objects.
//!
//! ## Architecture
//!
//! Each tool is a `ToolStrategy` owning its own transient state. The editor
//! holds exactly one `ActiveTool` and routes events to it through a
//! `ToolContext` borrowing the store, history, viewport and cursor.
//!
//! ## Modules
//!
//! - `state` - Tool strategy trait, tool context and the active tool enum
//! - `events` - Host-agnostic pointer, wheel and key events
//! - `hand` / `position` / `arc` / `select` - The four tools
//! - `hit_test` - Object hit-testing with R-tree prefiltering
//! - `pointer` - Editor pointer handlers (coordinate conversion, dispatch)
//! - `keyboard` - Editor key handler (undo/redo shortcuts, dispatch)
//! - `transform` - Wheel zoom and coordinate conversion

pub mod coords;
mod arc;
mod events;
mod hand;
mod keyboard;
mod pointer;
mod position;
mod select;
mod state;
mod transform;

pub use arc::ArcTool;
pub use events::{Key, KeyEvent, Modifiers, PointerEvent, WheelEvent};
pub use hand::HandTool;
pub use hit_test::{HitTester, hit_test_linear, hits_object};
pub use position::PositionTool;
pub use select::SelectTool;
pub use state::{ActiveTool, ToolContext, ToolStrategy};
