//! Spatial Index Module
//!
//! R-tree over object bounding boxes (inflated by the hit radius) used to
//! narrow hit-testing to a handful of candidates before the exact
//! point-to-polyline test runs.

use rstar::{AABB, RTree, RTreeObject};

use crate::geometry::bounds;
use crate::types::Topology;

/// Bounding box of one object, keyed by its index in the topology.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub object: usize,
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl SpatialEntry {
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    /// Store revision and margin the tree was built from
    built_for: Option<(u64, f64)>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            built_for: None,
        }
    }

    /// Build entries for every object with at least one valid point.
    pub fn from_topology(topology: &Topology, margin: f64) -> Self {
        let entries: Vec<SpatialEntry> = topology
            .objects
            .iter()
            .enumerate()
            .filter_map(|(object, o)| {
                let (min, max) = bounds(&topology.object_points(o))?;
                Some(SpatialEntry {
                    object,
                    min: [min.x - margin, min.y - margin],
                    max: [max.x + margin, max.y + margin],
                })
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            built_for: None,
        }
    }

    /// Rebuild unless already built for `revision` with the same margin.
    pub fn refresh(&mut self, topology: &Topology, revision: u64, margin: f64) {
        if self.built_for == Some((revision, margin)) {
            return;
        }
        *self = Self::from_topology(topology, margin);
        self.built_for = Some((revision, margin));
    }

    /// Indices of objects whose inflated bounds contain the point, ascending.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<usize> {
        let envelope = AABB::from_point([x, y]);
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.object)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
