use nalgebra::{Point2, Vector2};
use ordered_float::OrderedFloat;

use super::segment::LineSegment;

/// Hashable identity of a point; `-0.0` and `0.0` map to the same key.
pub(crate) type PointKey = (OrderedFloat<f64>, OrderedFloat<f64>);

#[inline]
pub(crate) fn point_key(p: Point2<f64>) -> PointKey {
    // adding +0.0 folds -0.0 onto +0.0
    (OrderedFloat(p.x + 0.0), OrderedFloat(p.y + 0.0))
}

/// z-component of `a × b`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Lexicographic (x, then y) comparison of points.
#[inline]
pub(crate) fn lex_cmp(a: &Point2<f64>, b: &Point2<f64>) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Shoelace sum over a closed chain of segments (twice the signed area).
pub fn shoelace_sum(segments: &[LineSegment]) -> f64 {
    segments.iter().map(LineSegment::shoelace_term).sum()
}

/// True when the closed chain winds clockwise (negative shoelace sum).
pub fn is_clockwise(segments: &[LineSegment]) -> bool {
    shoelace_sum(segments) < 0.0
}

/// First pair of non-adjacent segments that cross, if any.
///
/// Segments are treated as a closed chain: `i` and `i + 1` (and the last and
/// first) share an end point and are never compared.
pub fn first_self_intersection(segments: &[LineSegment]) -> Option<(usize, usize)> {
    let n = segments.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments[i].intersect(&segments[j]).is_some() {
                return Some((i, j));
            }
        }
    }
    None
}

/// True if any two non-adjacent segments of the closed chain cross.
pub fn line_segments_intersect_themselves(segments: &[LineSegment]) -> bool {
    first_self_intersection(segments).is_some()
}

/// Closed chain of segments through `points` in order.
pub(crate) fn chain(points: &[Point2<f64>]) -> Vec<LineSegment> {
    let n = points.len();
    (0..n)
        .map(|i| LineSegment::new(points[i], points[(i + 1) % n]))
        .collect()
}
