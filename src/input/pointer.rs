//! Pointer event handling - convert to scene space, then hand to the tool.

use std::time::Instant;

use crate::editor::Editor;

use super::events::PointerEvent;

impl Editor {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        self.track_cursor(event);
        self.with_tool(|tool, ctx| tool.on_pointer_down(ctx, event));
    }

    pub fn handle_pointer_up(&mut self, event: &PointerEvent) {
        self.track_cursor(event);
        self.with_tool(|tool, ctx| tool.on_pointer_up(ctx, event));
    }

    /// Moves drive hover hit-testing, so they are timed like frames.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        let start = Instant::now();
        self.track_cursor(event);
        self.with_tool(|tool, ctx| tool.on_pointer_move(ctx, event));
        self.perf_monitor
            .record_operation("pointer_move", start.elapsed().as_secs_f64() * 1000.0);
    }

    fn track_cursor(&mut self, event: &PointerEvent) {
        self.cursor.position = self.screen_to_scene(event.position);
    }
}
