//! Plane geometry helpers used by hit-testing, snapping and distortion.

use crate::types::Point;

#[inline]
pub fn distance(from: Point, to: Point) -> f64 {
    (to.x - from.x).hypot(to.y - from.y)
}

/// Angle of the vector `from -> to` in radians, in `(-PI, PI]`.
#[inline]
pub fn angle(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// Closest point to `p` on the segment `a..b`.
///
/// The perpendicular foot is clamped to the segment, so feet outside it fall
/// back to the nearer endpoint. Degenerate segments return `a`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let line = b - a;
    let len_sq = line.length_squared();
    if len_sq <= f64::EPSILON {
        return a;
    }
    let t = ((p - a).dot(line) / len_sq).clamp(0.0, 1.0);
    a + line * t
}

pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    distance(p, closest_point_on_segment(p, a, b))
}

/// Smallest distance from `p` to any segment of the polyline.
///
/// A single-point polyline measures to that point; an empty one is infinitely
/// far away.
pub fn distance_to_polyline(p: Point, polyline: &[Point]) -> f64 {
    match polyline {
        [] => f64::INFINITY,
        [only] => distance(p, *only),
        _ => polyline
            .windows(2)
            .map(|seg| distance_to_segment(p, seg[0], seg[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

#[inline]
pub fn is_close_to_polyline(p: Point, polyline: &[Point], radius: f64) -> bool {
    distance_to_polyline(p, polyline) < radius
}

/// Axis-aligned bounds of a point set as `(min, max)`.
pub fn bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(points.iter().skip(1).fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
