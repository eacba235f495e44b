//! Coordinate conversion utilities for canvas interactions.
//!
//! Centralizes the device ↔ scene formulas so tools, zoom and rendering
//! agree on one transform:
//!
//! ```text
//! scene  = floor((device * surface_scale - offset) / zoom)
//! screen = scene * zoom + offset
//! ```

use crate::types::{Point, Viewport};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Ratio between backing pixels and displayed pixels, per axis.
    ///
    /// A surface with no displayed size yet is treated as unscaled.
    #[inline]
    pub fn surface_scale(viewport: &Viewport) -> Point {
        let axis = |backing: f64, displayed: f64| {
            if displayed > 0.0 { backing / displayed } else { 1.0 }
        };
        Point::new(
            axis(viewport.size.width, viewport.bounds.width),
            axis(viewport.size.height, viewport.bounds.height),
        )
    }

    /// Convert a device position to scene space, floored to whole units.
    #[inline]
    pub fn screen_to_scene(device: Point, viewport: &Viewport) -> Point {
        let scale = Self::surface_scale(viewport);
        let surface = Point::new(device.x * scale.x, device.y * scale.y);
        ((surface - viewport.offset) / viewport.zoom).floor()
    }

    /// Convert a scene position to backing-pixel space.
    #[inline]
    pub fn scene_to_screen(scene: Point, viewport: &Viewport) -> Point {
        scene * viewport.zoom + viewport.offset
    }
}
