//! Core types for the topodraw editor.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: points, the shared-point topology and its objects, and the small
//! pieces of view state (viewport, cursor, active tool) the editor tracks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::constants::DEFAULT_ZOOM;

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A 2-D coordinate. Points have no identity beyond their index in
/// [`Topology::points`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates down to whole units.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Topology
// ============================================================================

/// Arbitrary user-visible tags attached to an object.
pub type Properties = BTreeMap<String, String>;

/// Discriminant of an [`Object`], as written in the `type` field of documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Arc,
    Position,
}

/// A single marker referencing exactly one point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub point: usize,
    pub properties: Properties,
}

/// An ordered polyline through shared points. Closed and self-intersecting
/// paths are valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arc {
    pub points: Vec<usize>,
    pub properties: Properties,
}

/// A drawable entity referencing points of the topology by index.
///
/// Serialized through [`ObjectRecord`] so documents keep the flat
/// `{type, points, properties}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ObjectRecord", try_from = "ObjectRecord")]
pub enum Object {
    Position(Position),
    Arc(Arc),
}

impl Object {
    pub fn position(point: usize) -> Self {
        Self::Position(Position {
            point,
            properties: Properties::new(),
        })
    }

    pub fn empty_arc() -> Self {
        Self::Arc(Arc::default())
    }

    pub fn arc(points: Vec<usize>) -> Self {
        Self::Arc(Arc {
            points,
            properties: Properties::new(),
        })
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Position(_) => ObjectKind::Position,
            Self::Arc(_) => ObjectKind::Arc,
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc(_))
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Self::Position(p) => &p.properties,
            Self::Arc(a) => &a.properties,
        }
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        match self {
            Self::Position(p) => &mut p.properties,
            Self::Arc(a) => &mut a.properties,
        }
    }

    /// All point indices referenced by this object, in order.
    pub fn point_indices(&self) -> &[usize] {
        match self {
            Self::Position(p) => std::slice::from_ref(&p.point),
            Self::Arc(a) => &a.points,
        }
    }

    pub fn point_indices_mut(&mut self) -> &mut [usize] {
        match self {
            Self::Position(p) => std::slice::from_mut(&mut p.point),
            Self::Arc(a) => &mut a.points,
        }
    }

    /// An arc is closed once it has more than two indices and returns to its
    /// first point.
    pub fn is_closed_arc(&self) -> bool {
        match self {
            Self::Arc(a) => a.points.len() > 2 && a.points.first() == a.points.last(),
            Self::Position(_) => false,
        }
    }
}

/// Wire form of an [`Object`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub points: Vec<usize>,
    #[serde(default)]
    pub properties: Properties,
}

impl From<Object> for ObjectRecord {
    fn from(object: Object) -> Self {
        match object {
            Object::Position(p) => Self {
                kind: ObjectKind::Position,
                points: vec![p.point],
                properties: p.properties,
            },
            Object::Arc(a) => Self {
                kind: ObjectKind::Arc,
                points: a.points,
                properties: a.properties,
            },
        }
    }
}

impl TryFrom<ObjectRecord> for Object {
    type Error = String;

    fn try_from(record: ObjectRecord) -> Result<Self, Self::Error> {
        match record.kind {
            ObjectKind::Arc => Ok(Self::Arc(Arc {
                points: record.points,
                properties: record.properties,
            })),
            ObjectKind::Position => match record.points.as_slice() {
                [point] => Ok(Self::Position(Position {
                    point: *point,
                    properties: record.properties,
                })),
                other => Err(format!(
                    "position must reference exactly one point, found {}",
                    other.len()
                )),
            },
        }
    }
}

/// The complete diagram: a shared point set and the objects referencing it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub points: Vec<Point>,
    pub objects: Vec<Object>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.objects.is_empty()
    }

    /// Resolve an object's indices to coordinates, skipping dangling ones.
    pub fn object_points(&self, object: &Object) -> Vec<Point> {
        object
            .point_indices()
            .iter()
            .filter_map(|&i| self.points.get(i).copied())
            .collect()
    }

    /// Returns the first reference that does not name a point, as
    /// `(object index, point index)`.
    pub fn first_dangling_reference(&self) -> Option<(usize, usize)> {
        self.objects.iter().enumerate().find_map(|(obj_idx, object)| {
            object
                .point_indices()
                .iter()
                .find(|&&i| i >= self.points.len())
                .map(|&i| (obj_idx, i))
        })
    }
}

// ============================================================================
// View State
// ============================================================================

/// Available editing tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Select,
    Hand,
    Position,
    Arc,
}

impl ToolType {
    /// The cursor shown while this tool is active and idle.
    pub fn default_cursor(self) -> CursorType {
        match self {
            Self::Select => CursorType::Auto,
            Self::Hand => CursorType::Grab,
            Self::Position | Self::Arc => CursorType::Crosshair,
        }
    }
}

/// Visual cursor state requested from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorType {
    #[default]
    Auto,
    Pointer,
    Grab,
    Grabbing,
    Crosshair,
}

impl CursorType {
    /// CSS-style cursor name.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Pointer => "pointer",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Crosshair => "crosshair",
        }
    }
}

/// Cursor visual plus its last known scene-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub kind: CursorType,
    pub position: Point,
}

/// Camera over the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Translation applied after zoom, in device pixels
    pub offset: Point,
    pub zoom: f64,
    /// Backing surface size in device pixels
    pub size: Size,
    /// Displayed size of the surface; differs from `size` on scaled displays
    pub bounds: Size,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            offset: Point::ZERO,
            zoom: DEFAULT_ZOOM,
            size,
            bounds: size,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::default())
    }
}
