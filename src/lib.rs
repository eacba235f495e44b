//! topodraw - a sketch-style diagram editor core.
//!
//! Objects (standalone positions and multi-point arcs) share points by index,
//! so moving one point moves every object built on it. The crate provides the
//! topology model and its edit operations, snapshot undo/redo, hand-drawn
//! edge distortion, a tool state machine driven by host input events, and a
//! renderer targeting any `Canvas` backend.

pub mod actions;
pub mod constants;
pub mod data;
pub mod distort;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use editor::Editor;
pub use settings::EditorSettings;
pub use types::{Object, Point, Topology};
