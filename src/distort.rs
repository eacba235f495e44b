//! Edge distortion - hand-drawn jitter for arcs.
//!
//! Each logical edge (an undirected pair of point indices) is subdivided and
//! jittered once, and the result is cached. Every arc that walks the same edge,
//! in either direction, therefore draws the exact same wobbly line, so shared
//! borders never visibly diverge.
//!
//! Distortion is rendering-only: it reads point coordinates and never writes to
//! the topology.

use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::constants::{DEFAULT_JITTER, MAX_DISTORT_DEPTH, MIN_DISTORT_SEGMENT};
use crate::geometry::{distance, midpoint};
use crate::profile_scope;
use crate::types::Point;

/// Subdivide `start..end`, jittering each midpoint by up to `jitter` per axis.
///
/// Segments shorter than `min_segment` are returned unchanged. The result
/// always begins with `start` and ends with `end`.
pub fn distort_line<R: Rng + ?Sized>(
    start: Point,
    end: Point,
    min_segment: f64,
    jitter: f64,
    rng: &mut R,
) -> Vec<Point> {
    let mut out = vec![start];
    subdivide(start, end, min_segment, jitter, rng, 0, &mut out);
    out
}

/// Pushes everything after `start` up to and including `end`.
fn subdivide<R: Rng + ?Sized>(
    start: Point,
    end: Point,
    min_segment: f64,
    jitter: f64,
    rng: &mut R,
    depth: u32,
    out: &mut Vec<Point>,
) {
    if depth >= MAX_DISTORT_DEPTH || distance(start, end) < min_segment {
        out.push(end);
        return;
    }

    let offset = if jitter > 0.0 {
        Point::new(rng.gen_range(-jitter..=jitter), rng.gen_range(-jitter..=jitter))
    } else {
        Point::ZERO
    };
    let mid = midpoint(start, end) + offset;

    subdivide(start, mid, min_segment, jitter, rng, depth + 1, out);
    subdivide(mid, end, min_segment, jitter, rng, depth + 1, out);
}

/// Undirected edge identity: `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    low: usize,
    high: usize,
}

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

#[derive(Debug)]
struct CachedEdge {
    /// Coordinates of `low` and `high` the interior was computed for
    endpoints: (Point, Point),
    /// Interior points ordered from `low` to `high`
    interior: Rc<[Point]>,
}

/// Jittered interior of one edge, oriented for the requested traversal.
#[derive(Clone, Debug)]
pub struct EdgePath {
    pub interior: Rc<[Point]>,
    /// Set when the edge is walked from its high index to its low one
    pub reversed: bool,
}

impl EdgePath {
    /// Interior points in traversal order.
    pub fn points(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        if self.reversed {
            Box::new(self.interior.iter().rev().copied())
        } else {
            Box::new(self.interior.iter().copied())
        }
    }
}

/// Cache of jittered edges shared by all arcs of a topology.
pub struct EdgeDistortion {
    cache: HashMap<EdgeKey, CachedEdge>,
    /// One past the highest point index any cached key may name
    reach: usize,
    rng: StdRng,
    min_segment: f64,
    jitter: f64,
}

impl EdgeDistortion {
    pub fn new(min_segment: f64, jitter: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), min_segment, jitter)
    }

    /// Deterministic jitter, for tests and reproducible exports.
    pub fn with_seed(seed: u64, min_segment: f64, jitter: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min_segment, jitter)
    }

    fn with_rng(rng: StdRng, min_segment: f64, jitter: f64) -> Self {
        Self {
            cache: HashMap::new(),
            reach: 0,
            rng,
            min_segment,
            jitter,
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.reach = 0;
    }

    /// Drop edges naming points past the end of a topology with
    /// `point_count` points. Only scans when the topology has shrunk.
    pub fn prune(&mut self, point_count: usize) {
        if point_count >= self.reach {
            return;
        }
        let before = self.cache.len();
        self.cache.retain(|key, _| key.high < point_count);
        self.reach = point_count;
        trace!(dropped = before - self.cache.len(), "Pruned edge cache");
    }

    /// Jittered interior for the edge `a -> b`.
    ///
    /// Returns `None` when either index is out of range. The cached entry is
    /// reused as long as both endpoints still sit where they were when it was
    /// computed; a moved endpoint (drag, reindexing after delete, undo)
    /// regenerates it.
    pub fn edge(&mut self, points: &[Point], a: usize, b: usize) -> Option<EdgePath> {
        let key = EdgeKey::new(a, b);
        let endpoints = (*points.get(key.low)?, *points.get(key.high)?);

        let stale = self
            .cache
            .get(&key)
            .is_none_or(|cached| cached.endpoints != endpoints);
        if stale {
            let line = distort_line(endpoints.0, endpoints.1, self.min_segment, self.jitter, &mut self.rng);
            let interior: Rc<[Point]> = line[1..line.len() - 1].into();
            trace!(low = key.low, high = key.high, interior = interior.len(), "Distorted edge");
            self.cache.insert(key, CachedEdge { endpoints, interior });
            self.reach = self.reach.max(key.high + 1);
        }

        let cached = self.cache.get(&key)?;
        Some(EdgePath {
            interior: Rc::clone(&cached.interior),
            reversed: a > b,
        })
    }

    /// Full jittered path of an arc given its point indices.
    ///
    /// Dangling indices are skipped. Arcs with fewer than two points yield
    /// their raw coordinates.
    pub fn arc_path(&mut self, points: &[Point], indices: &[usize]) -> Vec<Point> {
        profile_scope!("arc_path");

        let mut path = Vec::new();
        let Some(&first) = indices.first() else {
            return path;
        };
        if let Some(p) = points.get(first) {
            path.push(*p);
        }

        for pair in indices.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let Some(&end) = points.get(b) else {
                continue;
            };
            if let Some(edge) = self.edge(points, a, b) {
                path.extend(edge.points());
            }
            path.push(end);
        }
        path
    }
}

impl Default for EdgeDistortion {
    fn default() -> Self {
        Self::new(MIN_DISTORT_SEGMENT, DEFAULT_JITTER)
    }
}
