//! Position tool: every click drops a standalone point.

use tracing::debug;

use crate::actions::add_position;

use super::events::PointerEvent;
use super::state::{ToolContext, ToolStrategy};

#[derive(Debug, Default)]
pub struct PositionTool;

impl ToolStrategy for PositionTool {
    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        let index = add_position(ctx.store, ctx.cursor.position);
        debug!(object = index, "Placed position");
        ctx.commit();
    }
}
