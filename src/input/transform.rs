//! Viewport transformations - wheel zoom, coordinate conversion.

use crate::editor::Editor;
use crate::input::coords::CoordinateConverter;
use crate::types::Point;

use super::events::WheelEvent;

impl Editor {
    /// Convert a device position to scene space under the current viewport.
    pub fn screen_to_scene(&self, device: Point) -> Point {
        CoordinateConverter::screen_to_scene(device, &self.viewport)
    }

    /// Step the zoom by one notch per wheel event, keeping the last known
    /// cursor position fixed on screen.
    ///
    /// Returns `false` when the zoom did not change.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        if event.delta_y == 0.0 || !event.delta_y.is_finite() {
            return false;
        }

        let settings = &self.settings;
        let old_zoom = self.viewport.zoom;
        let new_zoom = (old_zoom + event.delta_y.signum() * settings.zoom_step)
            .clamp(settings.min_zoom, settings.max_zoom);
        if new_zoom == old_zoom {
            return false;
        }

        let anchor = self.cursor.position;
        self.viewport.offset += anchor * (old_zoom - new_zoom);
        self.viewport.zoom = new_zoom;
        tracing::debug!(zoom = new_zoom, "Zoomed");
        true
    }
}
