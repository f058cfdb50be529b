//! Simple, clockwise, closed polygons (`Polygon`).
//!
//! Invariants (checked once in `from_points`, preserved by every method):
//! - Consecutive segments share an end point, cyclically.
//! - No two non-adjacent segments cross.
//! - The boundary winds clockwise (negative shoelace sum); counter-clockwise
//!   input is reversed on construction.
//!
//! Limitation: only proper crossings are rejected, so a zero-width spike
//! (consecutive edges folding back along the same line, e.g.
//! `[[0,0],[2,0],[1,0],[1,1]]`) is accepted as long as the area is non-zero.
//!
//! Polygons are immutable values. Transformations (`transpose`, `swell`,
//! `merge`, `separate_from`) return new polygons.
//!
//! Boundary handling
//! - `contains_point` excludes the boundary.
//! - Segment queries report proper crossings only (see `LineSegment::intersect`).
//! - `distance_to_perimeter` counts corners and ignores edges parallel to the ray.

use std::collections::HashSet;

use nalgebra::{Point2, Vector2};

use super::error::{GeomError, InvalidPolygon, Lookup};
use super::segment::LineSegment;
use super::types::Rectangle;
use super::util::{chain, cross, first_self_intersection, shoelace_sum};

/// Outward nudges `separate_from` tries before giving up on rounding.
const MAX_SEPARATION_NUDGES: usize = 64;

/// Ordered cyclic sequence of boundary segments.
#[derive(Clone, Debug)]
pub struct Polygon {
    segments: Vec<LineSegment>,
}

impl Polygon {
    /// Validate `points` as a boundary walk and normalize it to clockwise.
    ///
    /// The first vertex stays first when the winding is flipped.
    pub fn from_points(points: Vec<Point2<f64>>) -> Result<Self, GeomError> {
        let n = points.len();
        if n < 3 {
            return Err(InvalidPolygon::TooFewPoints(n).into());
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(InvalidPolygon::NonFinite.into());
        }
        if let Some(i) = (0..n).find(|&i| points[i] == points[(i + 1) % n]) {
            return Err(InvalidPolygon::DegenerateEdge(i).into());
        }
        let segments = chain(&points);
        if let Some((i, j)) = first_self_intersection(&segments) {
            return Err(InvalidPolygon::SelfIntersecting(i, j).into());
        }
        let sum = shoelace_sum(&segments);
        if sum == 0.0 {
            return Err(InvalidPolygon::ZeroArea.into());
        }
        if sum < 0.0 {
            return Ok(Self { segments });
        }
        let mut points = points;
        points[1..].reverse();
        Ok(Self {
            segments: chain(&points),
        })
    }

    /// Build from literal `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, GeomError> {
        Self::from_points(coords.iter().map(|c| Point2::new(c[0], c[1])).collect())
    }

    /// Boundary segments in clockwise order.
    #[inline]
    pub fn line_segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Boundary segments as an unordered set.
    pub fn line_segments_as_set(&self) -> HashSet<LineSegment> {
        self.segments.iter().copied().collect()
    }

    /// Vertices in boundary order (start point of each segment).
    pub fn vertices(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        self.segments.iter().map(|ls| ls.p1)
    }

    /// Number of boundary segments (equal to the vertex count).
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Half the shoelace sum; negative because the boundary is clockwise.
    pub fn signed_area(&self) -> f64 {
        shoelace_sum(&self.segments) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Same boundary segments, ignoring start vertex. Translation matters.
    pub fn equals(&self, other: &Polygon) -> bool {
        self.segments.len() == other.segments.len()
            && self.line_segments_as_set() == other.line_segments_as_set()
    }

    /// Cyclic successor of `ls` in boundary order.
    pub fn next_line_segment(&self, ls: &LineSegment) -> Result<&LineSegment, GeomError> {
        let i = self
            .segments
            .iter()
            .position(|s| s == ls)
            .ok_or(GeomError::SegmentNotFound(Lookup::Segment(*ls)))?;
        Ok(&self.segments[(i + 1) % self.segments.len()])
    }

    /// The boundary segment starting at `p`.
    pub fn line_segment_from(&self, p: Point2<f64>) -> Result<&LineSegment, GeomError> {
        self.segments
            .iter()
            .find(|ls| ls.p1 == p)
            .ok_or(GeomError::SegmentNotFound(Lookup::StartPoint(p)))
    }

    #[inline]
    pub fn transpose(&self, dx: f64, dy: f64) -> Polygon {
        self.transpose_vector(Vector2::new(dx, dy))
    }

    /// Translate every vertex by `v`; segment order and winding are kept.
    pub fn transpose_vector(&self, v: Vector2<f64>) -> Polygon {
        Polygon {
            segments: self.segments.iter().map(|ls| ls.translated(v)).collect(),
        }
    }

    /// True if `p` lies on some boundary segment.
    pub fn on_boundary(&self, p: Point2<f64>) -> bool {
        self.segments.iter().any(|ls| ls.contains_point(p))
    }

    /// Strict interior test (crossing number). Boundary points are outside.
    pub fn contains_point(&self, p: Point2<f64>) -> bool {
        if self.on_boundary(p) {
            return false;
        }
        let mut inside = false;
        for ls in &self.segments {
            let (a, b) = (ls.p1, ls.p2);
            // half-open in y, so a ray through a vertex is counted once
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn extent(&self) -> (Point2<f64>, Point2<f64>) {
        let first = self.segments[0].p1;
        self.vertices().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        })
    }

    /// Axis-aligned bounding box over all vertices.
    pub fn get_bounds(&self) -> Rectangle {
        let (lo, hi) = self.extent();
        Rectangle::new(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y)
    }

    /// Center of the bounding box (not the vertex centroid).
    pub fn middle(&self) -> Point2<f64> {
        let (lo, hi) = self.extent();
        Point2::new((lo.x + hi.x) / 2.0, (lo.y + hi.y) / 2.0)
    }

    /// Boundary segments properly crossed by `ls`, with the crossing points.
    pub fn intersection_segment_and_points(
        &self,
        ls: &LineSegment,
    ) -> Vec<(LineSegment, Point2<f64>)> {
        self.segments
            .iter()
            .filter_map(|edge| edge.intersect(ls).map(|p| (*edge, p)))
            .collect()
    }

    pub fn intersect(&self, ls: &LineSegment) -> Vec<Point2<f64>> {
        self.intersection_segment_and_points(ls)
            .into_iter()
            .map(|(_, p)| p)
            .collect()
    }

    /// The crossing closest to `ls.p1`.
    pub fn first_intersection_segment_and_point(
        &self,
        ls: &LineSegment,
    ) -> Option<(LineSegment, Point2<f64>)> {
        self.intersection_segment_and_points(ls)
            .into_iter()
            .min_by(|(_, a), (_, b)| {
                let da = (*a - ls.p1).norm_squared();
                let db = (*b - ls.p1).norm_squared();
                da.total_cmp(&db)
            })
    }

    pub fn first_intersection(&self, ls: &LineSegment) -> Option<Point2<f64>> {
        self.first_intersection_segment_and_point(ls)
            .map(|(_, p)| p)
    }

    /// Distance from `origin` along `direction` to the first boundary contact.
    ///
    /// `None` if the ray misses the boundary or `direction` is zero.
    pub fn distance_to_perimeter(
        &self,
        origin: Point2<f64>,
        direction: Vector2<f64>,
    ) -> Option<f64> {
        let dir = direction.try_normalize(0.0)?;
        self.segments
            .iter()
            .filter_map(|ls| ls.ray_distance(origin, dir))
            .min_by(f64::total_cmp)
    }

    /// Closest boundary point to `p`; ties go to the earlier segment.
    pub fn closest_point(&self, p: Point2<f64>) -> Point2<f64> {
        let mut best = self.segments[0].closest_point(p);
        let mut best_d = (p - best).norm_squared();
        for ls in &self.segments[1..] {
            let c = ls.closest_point(p);
            let d = (p - c).norm_squared();
            if d < best_d {
                best = c;
                best_d = d;
            }
        }
        best
    }

    /// Largest `(v - middle)·unit` over the vertices.
    fn support(&self, unit: Vector2<f64>) -> f64 {
        let m = self.middle();
        self.vertices()
            .map(|v| (v - m).dot(&unit))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Half-extent along `direction`, measured from `middle()`, as a vector
    /// along `unit(direction)`. Zero for a zero direction.
    pub fn furthest_projection(&self, direction: Vector2<f64>) -> Vector2<f64> {
        match direction.try_normalize(0.0) {
            Some(unit) => unit * self.support(unit),
            None => Vector2::zeros(),
        }
    }

    /// `(min, max)` of `v·d` over the vertices, for an arbitrary-length `d`.
    fn axis_extent(&self, d: Vector2<f64>) -> (f64, f64) {
        self.vertices()
            .map(|v| v.coords.dot(&d))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            })
    }

    /// Translate along the axis of `direction` until `self` no longer overlaps
    /// `other`; the shorter of the two pushes wins, ties go along `direction`.
    ///
    /// Returns `self` unchanged when there is no overlap. Only the orientation
    /// of `direction` matters, not its length: the push is `direction * s`
    /// with `s` measured in units of `direction·direction`, so axis-aligned
    /// and diagonal integer directions land on exact coordinates. If rounding
    /// still leaves the result overlapping, `s` is nudged outward.
    pub fn separate_from(
        &self,
        other: &Polygon,
        direction: Vector2<f64>,
    ) -> Result<Polygon, GeomError> {
        if !self.overlap(other) {
            return Ok(self.clone());
        }
        let len2 = direction.norm_squared();
        if len2 == 0.0 || !len2.is_finite() {
            return Err(GeomError::ZeroDirection);
        }
        let (self_lo, self_hi) = self.axis_extent(direction);
        let (other_lo, other_hi) = other.axis_extent(direction);
        let forward = (other_hi - self_lo) / len2;
        let backward = (self_hi - other_lo) / len2;
        let mut s = if backward < forward { -backward } else { forward };
        let mut moved = self.transpose_vector(direction * s);
        let mut step = s.abs().max(1.0) * f64::EPSILON;
        let mut nudges = 0;
        while nudges < MAX_SEPARATION_NUDGES && moved.overlap(other) {
            s += step.copysign(s);
            step *= 2.0;
            nudges += 1;
            moved = self.transpose_vector(direction * s);
        }
        tracing::debug!(forward, backward, s, nudges, "separate_from");
        Ok(moved)
    }

    /// Offset every edge outward by `amount` and rebuild the vertices as the
    /// intersections of consecutive offset edges.
    ///
    /// Folded-over offsets (possible for concave input) are rejected by the
    /// constructor.
    pub fn swell(&self, amount: f64) -> Result<Polygon, GeomError> {
        let n = self.segments.len();
        // (offset start point, direction, outward unit normal) per edge
        let lines: Vec<(Point2<f64>, Vector2<f64>, Vector2<f64>)> = self
            .segments
            .iter()
            .map(|ls| {
                let d = ls.direction();
                // clockwise boundary: outside is to the left
                let normal = Vector2::new(-d.y, d.x) / d.norm();
                (ls.p1 + normal * amount, d, normal)
            })
            .collect();
        let points = (0..n)
            .map(|i| {
                let (a1, d1, _) = lines[(i + n - 1) % n];
                let (a2, d2, n2) = lines[i];
                let denom = cross(d1, d2);
                if denom == 0.0 {
                    self.segments[i].p1 + n2 * amount
                } else {
                    a1 + d1 * (cross(a2 - a1, d2) / denom)
                }
            })
            .collect();
        tracing::debug!(amount, edges = n, "swell");
        Polygon::from_points(points)
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
