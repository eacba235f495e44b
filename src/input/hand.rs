//! Hand tool: pans the viewport while the pointer is held.

use crate::types::CursorType;

use super::events::PointerEvent;
use super::state::{ToolContext, ToolStrategy};

#[derive(Debug, Default)]
pub struct HandTool {
    pub grabbing: bool,
}

impl ToolStrategy for HandTool {
    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        self.grabbing = true;
        ctx.cursor.kind = CursorType::Grabbing;
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        self.grabbing = false;
        ctx.cursor.kind = CursorType::Grab;
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, event: &PointerEvent) {
        if self.grabbing {
            ctx.viewport.offset += event.movement;
        }
    }
}
