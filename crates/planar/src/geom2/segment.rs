//! Directed line segments and the segment-level predicates polygons are built on.
//!
//! Conventions
//! - Predicates are exact: no epsilon. A crossing (`intersect`) needs both
//!   parameters strictly inside (0, 1); touching at an end point and collinear
//!   overlap are not crossings.
//! - `contacts` is the closed-segment counterpart used to split boundaries.
//!   Contacts at an end point are returned as that end point's exact value.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Point2, Vector2};

use super::util::{cross, point_key};

/// Directed segment from `p1` to `p2`.
///
/// Two segments joining the same points in opposite directions are distinct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p1: Point2<f64>,
    pub p2: Point2<f64>,
}

impl Eq for LineSegment {}

impl Hash for LineSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        point_key(self.p1).hash(state);
        point_key(self.p2).hash(state);
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

impl LineSegment {
    #[inline]
    pub fn new(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_values(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.p1, &self.p2)
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    #[inline]
    pub fn translated(&self, v: Vector2<f64>) -> Self {
        Self::new(self.p1 + v, self.p2 + v)
    }

    /// Contribution `p1.x * p2.y - p2.x * p1.y` to a shoelace sum.
    #[inline]
    pub fn shoelace_term(&self) -> f64 {
        self.p1.x * self.p2.y - self.p2.x * self.p1.y
    }

    /// Crossing point of two segments, if they properly cross.
    ///
    /// Solves `p1 + t·r = q1 + u·s` and accepts only `0 < t < 1` and `0 < u < 1`.
    /// Parallel and collinear pairs never cross.
    pub fn intersect(&self, other: &LineSegment) -> Option<Point2<f64>> {
        let r = self.direction();
        let s = other.direction();
        let denom = cross(r, s);
        if denom == 0.0 {
            return None;
        }
        let qp = other.p1 - self.p1;
        let t = cross(qp, s) / denom;
        let u = cross(qp, r) / denom;
        if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
            Some(self.p1 + r * t)
        } else {
            None
        }
    }

    /// All points where the closed segments meet.
    ///
    /// - Non-parallel: at most one point, end-point touches included.
    /// - Collinear: the end points of the shared stretch (zero, one, or two points).
    /// - Parallel, not collinear: none.
    pub fn contacts(&self, other: &LineSegment) -> Vec<Point2<f64>> {
        let r = self.direction();
        let s = other.direction();
        let qp = other.p1 - self.p1;
        let denom = cross(r, s);
        if denom != 0.0 {
            let t = cross(qp, s) / denom;
            let u = cross(qp, r) / denom;
            if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
                return Vec::new();
            }
            let p = if t == 0.0 {
                self.p1
            } else if t == 1.0 {
                self.p2
            } else if u == 0.0 {
                other.p1
            } else if u == 1.0 {
                other.p2
            } else {
                self.p1 + r * t
            };
            return vec![p];
        }
        if cross(qp, r) != 0.0 {
            return Vec::new();
        }
        // Collinear: keep every end point that lies on the other segment.
        let mut out: Vec<Point2<f64>> = Vec::with_capacity(2);
        for q in [other.p1, other.p2] {
            if self.contains_collinear(q) && !out.contains(&q) {
                out.push(q);
            }
        }
        for p in [self.p1, self.p2] {
            if other.contains_collinear(p) && !out.contains(&p) {
                out.push(p);
            }
        }
        out
    }

    /// True if `p` lies exactly on the closed segment.
    pub fn contains_point(&self, p: Point2<f64>) -> bool {
        cross(self.direction(), p - self.p1) == 0.0 && self.contains_collinear(p)
    }

    /// Bounding-range test for a point already known to be on the carrier line.
    #[inline]
    fn contains_collinear(&self, p: Point2<f64>) -> bool {
        p.x >= self.p1.x.min(self.p2.x)
            && p.x <= self.p1.x.max(self.p2.x)
            && p.y >= self.p1.y.min(self.p2.y)
            && p.y <= self.p1.y.max(self.p2.y)
    }

    /// Point of the segment closest to `p` (projection clamped to the segment).
    pub fn closest_point(&self, p: Point2<f64>) -> Point2<f64> {
        let r = self.direction();
        let len2 = r.norm_squared();
        if len2 == 0.0 {
            return self.p1;
        }
        let t = ((p - self.p1).dot(&r) / len2).clamp(0.0, 1.0);
        self.p1 + r * t
    }

    #[inline]
    pub fn distance_to(&self, p: Point2<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// Distance along the ray `origin + t·dir` (`t >= 0`, `dir` unit length)
    /// to this closed segment. Segments parallel to the ray are ignored.
    pub fn ray_distance(&self, origin: Point2<f64>, dir: Vector2<f64>) -> Option<f64> {
        let e = self.direction();
        let denom = cross(dir, e);
        if denom == 0.0 {
            return None;
        }
        let w = self.p1 - origin;
        let t = cross(w, e) / denom;
        let u = cross(w, dir) / denom;
        if t >= 0.0 && (0.0..=1.0).contains(&u) {
            Some(t)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{point, vector};
    use std::collections::HashSet;

    #[test]
    fn crossing_segments_intersect() {
        let a = LineSegment::from_values(0.0, 0.0, 2.0, 2.0);
        let b = LineSegment::from_values(0.0, 2.0, 2.0, 0.0);
        assert_eq!(a.intersect(&b), Some(point![1.0, 1.0]));
        assert_eq!(b.intersect(&a), Some(point![1.0, 1.0]));
    }

    #[test]
    fn touching_and_collinear_are_not_crossings() {
        let a = LineSegment::from_values(0.0, 0.0, 1.0, 0.0);
        // shares an end point
        let b = LineSegment::from_values(1.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersect(&b), None);
        // T-junction: b's end point lies inside a
        let t = LineSegment::from_values(0.5, 0.0, 0.5, 1.0);
        assert_eq!(a.intersect(&t), None);
        // collinear overlap
        let c = LineSegment::from_values(0.5, 0.0, 2.0, 0.0);
        assert_eq!(a.intersect(&c), None);
        // parallel
        let d = LineSegment::from_values(0.0, 1.0, 1.0, 1.0);
        assert_eq!(a.intersect(&d), None);
    }

    #[test]
    fn contacts_report_touches_and_overlaps() {
        let a = LineSegment::from_values(0.0, 0.0, 1.0, 0.0);
        let t = LineSegment::from_values(0.5, 0.0, 0.5, 1.0);
        assert_eq!(a.contacts(&t), vec![point![0.5, 0.0]]);

        let c = LineSegment::from_values(2.0, 0.0, 0.5, 0.0);
        assert_eq!(a.contacts(&c), vec![point![0.5, 0.0], point![1.0, 0.0]]);

        let far = LineSegment::from_values(3.0, 0.0, 4.0, 0.0);
        assert!(a.contacts(&far).is_empty());
    }

    #[test]
    fn closest_point_clamps_to_segment() {
        let ls = LineSegment::from_values(0.0, 0.0, 0.0, 10.0);
        assert_eq!(ls.closest_point(point![-5.0, 5.0]), point![0.0, 5.0]);
        assert_eq!(ls.closest_point(point![1.0, -3.0]), point![0.0, 0.0]);
        assert_eq!(ls.closest_point(point![1.0, 13.0]), point![0.0, 10.0]);
        assert_eq!(ls.distance_to(point![-5.0, 5.0]), 5.0);
    }

    #[test]
    fn ray_hits_closed_segment() {
        let ls = LineSegment::from_values(2.0, 2.0, 2.0, 0.0);
        assert_eq!(ls.ray_distance(point![0.0, 1.0], vector![1.0, 0.0]), Some(2.0));
        // end point counts
        assert_eq!(ls.ray_distance(point![1.0, 0.0], vector![1.0, 0.0]), Some(1.0));
        // behind the origin
        assert_eq!(ls.ray_distance(point![3.0, 1.0], vector![1.0, 0.0]), None);
        // parallel
        assert_eq!(ls.ray_distance(point![2.0, -1.0], vector![0.0, 1.0]), None);
    }

    #[test]
    fn direction_matters_for_equality() {
        let a = LineSegment::from_values(0.0, 0.0, 1.0, 1.0);
        assert_ne!(a, a.reversed());
        let set: HashSet<_> = [a, a.reversed(), a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn shoelace_term_matches_cross() {
        let ls = LineSegment::from_values(1.0, 2.0, 3.0, 5.0);
        assert_eq!(ls.shoelace_term(), 1.0 * 5.0 - 3.0 * 2.0);
    }
}
