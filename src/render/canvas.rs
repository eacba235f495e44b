//! Topology rendering - positions as dots, arcs as jittered polylines.
//!
//! ## Performance Notes
//!
//! This is a hot path - rendering happens every frame. Key optimizations:
//! - Early culling of off-screen objects (viewport culling)
//! - Edge distortion is cached per undirected edge, so static drawings
//!   reuse the same jittered interiors every frame
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::CULLING_MARGIN;
use crate::distort::EdgeDistortion;
use crate::geometry;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::settings::EditorSettings;
use crate::types::{Object, Point, Topology, Viewport};

use super::{Canvas, DrawOptions};

/// Counters from one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub culled: usize,
}

/// One frame's view of the scene: camera, style defaults and highlights.
pub struct Renderer<'a> {
    viewport: &'a Viewport,
    settings: &'a EditorSettings,
    highlighted: Vec<usize>,
}

impl<'a> Renderer<'a> {
    pub fn new(viewport: &'a Viewport, settings: &'a EditorSettings) -> Self {
        Self {
            viewport,
            settings,
            highlighted: Vec::new(),
        }
    }

    /// Draw these objects with the highlight stroke (selection, hover).
    pub fn highlight(mut self, objects: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.highlighted.extend(objects.into_iter().flatten());
        self
    }

    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        topology: &Topology,
        distortion: &mut EdgeDistortion,
    ) -> RenderStats {
        profile_scope!("render");

        distortion.prune(topology.points.len());

        let mut stats = RenderStats::default();
        for (index, object) in topology.objects.iter().enumerate() {
            let options = self.options_for(index, object);
            let drawn = match object {
                Object::Position(position) => {
                    self.draw_position(canvas, topology, position.point, &options)
                }
                Object::Arc(arc) => self.draw_arc(canvas, topology, &arc.points, &options, distortion),
            };
            if drawn {
                stats.drawn += 1;
            } else {
                stats.culled += 1;
            }
        }

        tracing::trace!(drawn = stats.drawn, culled = stats.culled, "Rendered topology");
        stats
    }

    fn options_for(&self, index: usize, object: &Object) -> DrawOptions {
        let mut options = DrawOptions::new(&self.settings.stroke_color, self.settings.stroke_width)
            .with_properties(object.properties());
        if self.highlighted.contains(&index) {
            options.stroke = self.settings.highlight_color.clone();
        }
        options
    }

    fn draw_position(
        &self,
        canvas: &mut dyn Canvas,
        topology: &Topology,
        point: usize,
        options: &DrawOptions,
    ) -> bool {
        let Some(&scene) = topology.points.get(point) else {
            return false;
        };
        let center = self.to_screen(scene);
        let diameter = self.settings.position_diameter * self.viewport.zoom;
        let radius = diameter / 2.0;
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        if !self.is_visible(min, max) {
            return false;
        }
        canvas.circle(center, diameter, options);
        true
    }

    fn draw_arc(
        &self,
        canvas: &mut dyn Canvas,
        topology: &Topology,
        indices: &[usize],
        options: &DrawOptions,
        distortion: &mut EdgeDistortion,
    ) -> bool {
        // Segments can cross the surface with both ends outside it
        let corners: Vec<Point> = indices
            .iter()
            .filter_map(|&i| topology.points.get(i))
            .map(|&p| self.to_screen(p))
            .collect();
        match geometry::bounds(&corners) {
            Some((min, max)) if self.is_visible(min, max) => {}
            _ => return false,
        }

        let path: Vec<Point> = distortion
            .arc_path(&topology.points, indices)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect();
        canvas.linear_path(&path, options);
        true
    }

    #[inline]
    fn to_screen(&self, scene: Point) -> Point {
        CoordinateConverter::scene_to_screen(scene, self.viewport)
    }

    /// Whether a screen-space box overlaps the surface (plus margin).
    /// A surface with no size yet shows everything.
    fn is_visible(&self, min: Point, max: Point) -> bool {
        let size = self.viewport.size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return true;
        }
        max.x >= -CULLING_MARGIN
            && max.y >= -CULLING_MARGIN
            && min.x <= size.width + CULLING_MARGIN
            && min.y <= size.height + CULLING_MARGIN
    }
}
