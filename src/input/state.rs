//! Tool state machine - one strategy value per active tool.
//!
//! Each tool owns its transient interaction state. Switching tools replaces
//! the whole value, so state from one tool can never leak into another.
//!
//! ## Tool Transitions
//!
//! ```text
//! Hand:     idle -> grabbing            (pointer down)
//!           grabbing -> idle            (pointer up)
//! Arc:      idle -> building(i)         (pointer up, first click)
//!           building(i) -> idle         (pointer up closes the arc, or Escape)
//! Select:   idle -> dragging(p)         (pointer down near a point of the selection)
//!           dragging(p) -> idle         (pointer up, commits)
//! Position: stateless
//! ```

use crate::history::History;
use crate::settings::EditorSettings;
use crate::store::TopologyStore;
use crate::types::{Cursor, ToolType, Viewport};

use super::arc::ArcTool;
use super::events::{KeyEvent, PointerEvent};
use super::hand::HandTool;
use super::position::PositionTool;
use super::select::SelectTool;

/// Everything a tool may read or mutate while handling one event.
///
/// `cursor.position` already holds the event position in scene space.
pub struct ToolContext<'a> {
    pub store: &'a mut TopologyStore,
    pub history: &'a mut History,
    pub viewport: &'a mut Viewport,
    pub cursor: &'a mut Cursor,
    pub settings: &'a EditorSettings,
}

impl ToolContext<'_> {
    /// Record the current store state as an undo step.
    pub fn commit(&mut self) -> bool {
        self.history.commit(self.store)
    }
}

/// Event handlers for one tool. Every handler defaults to doing nothing.
pub trait ToolStrategy {
    fn on_pointer_down(&mut self, _ctx: &mut ToolContext<'_>, _event: &PointerEvent) {}
    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>, _event: &PointerEvent) {}
    fn on_pointer_move(&mut self, _ctx: &mut ToolContext<'_>, _event: &PointerEvent) {}
    fn on_key_down(&mut self, _ctx: &mut ToolContext<'_>, _event: &KeyEvent) {}
}

/// The active tool together with its transient state.
#[derive(Debug)]
pub enum ActiveTool {
    Select(SelectTool),
    Hand(HandTool),
    Position(PositionTool),
    Arc(ArcTool),
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self::new(ToolType::default())
    }
}

impl ActiveTool {
    /// A fresh tool of the given type with no transient state.
    pub fn new(tool: ToolType) -> Self {
        match tool {
            ToolType::Select => Self::Select(SelectTool::default()),
            ToolType::Hand => Self::Hand(HandTool::default()),
            ToolType::Position => Self::Position(PositionTool),
            ToolType::Arc => Self::Arc(ArcTool::default()),
        }
    }

    pub fn tool_type(&self) -> ToolType {
        match self {
            Self::Select(_) => ToolType::Select,
            Self::Hand(_) => ToolType::Hand,
            Self::Position(_) => ToolType::Position,
            Self::Arc(_) => ToolType::Arc,
        }
    }

    pub fn strategy_mut(&mut self) -> &mut dyn ToolStrategy {
        match self {
            Self::Select(tool) => tool,
            Self::Hand(tool) => tool,
            Self::Position(tool) => tool,
            Self::Arc(tool) => tool,
        }
    }

    /// Drop transient state, keeping the tool type.
    pub fn reset(&mut self) {
        *self = Self::new(self.tool_type());
    }

    /// Object under the cursor, if the select tool is hovering one
    pub fn hovered(&self) -> Option<usize> {
        match self {
            Self::Select(tool) => tool.hovered,
            _ => None,
        }
    }

    /// Currently selected object, if any
    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Select(tool) => tool.selected,
            _ => None,
        }
    }

    /// Point being dragged, if any
    pub fn dragging(&self) -> Option<usize> {
        match self {
            Self::Select(tool) => tool.dragging,
            _ => None,
        }
    }

    /// Arc under construction, if any
    pub fn in_progress_arc(&self) -> Option<usize> {
        match self {
            Self::Arc(tool) => tool.in_progress,
            _ => None,
        }
    }

    /// Returns true while the hand tool is grabbing the canvas
    pub fn is_grabbing(&self) -> bool {
        matches!(self, Self::Hand(tool) if tool.grabbing)
    }

    /// Returns true if no gesture is in flight
    pub fn is_idle(&self) -> bool {
        self.dragging().is_none() && self.in_progress_arc().is_none() && !self.is_grabbing()
    }
}
