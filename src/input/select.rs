//! Select tool: hover highlighting, selection, point dragging and deletion.

use tracing::debug;

use crate::actions::{delete_object, move_point};
use crate::geometry::distance;
use crate::types::CursorType;

use super::events::{KeyEvent, PointerEvent};
use super::hit_test::HitTester;
use super::state::{ToolContext, ToolStrategy};

#[derive(Default)]
pub struct SelectTool {
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
    /// Point index being dragged
    pub dragging: Option<usize>,
    hit_tester: HitTester,
}

impl std::fmt::Debug for SelectTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectTool")
            .field("hovered", &self.hovered)
            .field("selected", &self.selected)
            .field("dragging", &self.dragging)
            .finish()
    }
}

impl SelectTool {
    /// First point of the selected object within the drag radius.
    fn grab_point(&self, ctx: &ToolContext<'_>) -> Option<usize> {
        let topology = ctx.store.topology();
        let object = topology.objects.get(self.selected?)?;
        object.point_indices().iter().copied().find(|&i| {
            topology
                .points
                .get(i)
                .is_some_and(|&p| distance(p, ctx.cursor.position) < ctx.settings.drag_radius)
        })
    }
}

impl ToolStrategy for SelectTool {
    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        if self.dragging.is_some() {
            return;
        }
        self.dragging = self.grab_point(ctx);
        if let Some(point) = self.dragging {
            debug!(point, "Started point drag");
        }
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        self.selected = self.hovered;
        if let Some(point) = self.dragging.take() {
            debug!(point, "Finished point drag");
            ctx.commit();
        }
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, _event: &PointerEvent) {
        let cursor = ctx.cursor.position;
        self.hovered = self
            .hit_tester
            .hit_test(ctx.store, cursor, ctx.settings.hit_radius);
        ctx.cursor.kind = if self.hovered.is_some() {
            CursorType::Pointer
        } else {
            CursorType::Auto
        };

        if let Some(point) = self.dragging {
            move_point(ctx.store, point, cursor);
        }
    }

    fn on_key_down(&mut self, ctx: &mut ToolContext<'_>, event: &KeyEvent) {
        if !event.is_delete() {
            return;
        }
        let Some(index) = self.selected.take() else {
            return;
        };
        if delete_object(ctx.store, index).is_some() {
            ctx.commit();
        }
        self.hovered = None;
        self.dragging = None;
    }
}
