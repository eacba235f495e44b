//! Arc tool: clicks append points to an arc until it closes on its start.

use tracing::debug;

use crate::actions::{begin_or_continue_arc, delete_object};
use crate::types::Object;

use super::events::{KeyEvent, PointerEvent};
use super::state::{ToolContext, ToolStrategy};

#[derive(Debug, Default)]
pub struct ArcTool {
    /// Index of the arc being built
    pub in_progress: Option<usize>,
}

impl ToolStrategy for ArcTool {
    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        // An index invalidated by undo or import starts a fresh arc
        let current = self
            .in_progress
            .filter(|&i| ctx.store.topology().objects.get(i).is_some_and(Object::is_arc));

        self.in_progress =
            begin_or_continue_arc(ctx.store, current, ctx.cursor.position, ctx.settings.snap_radius);

        if let Some(index) = self.in_progress {
            if ctx.store.topology().objects[index].is_closed_arc() {
                debug!(arc = index, "Closed arc");
                self.in_progress = None;
            }
        }
        ctx.commit();
    }

    fn on_key_down(&mut self, ctx: &mut ToolContext<'_>, event: &KeyEvent) {
        if !event.is_cancel() {
            return;
        }
        if let Some(index) = self.in_progress.take() {
            debug!(arc = index, "Cancelled arc");
            delete_object(ctx.store, index);
        }
    }
}
