//! Key handling - history shortcuts first, then the active tool.

use crate::editor::Editor;

use super::events::KeyEvent;

impl Editor {
    /// Cmd/Ctrl+Z undoes, Cmd/Ctrl+Shift+Z redoes. The event always reaches
    /// the active tool afterwards.
    pub fn handle_key_down(&mut self, event: &KeyEvent) {
        if event.modifiers.command() && event.is_char('z') {
            if event.modifiers.shift {
                self.redo();
            } else {
                self.undo();
            }
        }
        self.with_tool(|tool, ctx| tool.on_key_down(ctx, event));
    }
}
