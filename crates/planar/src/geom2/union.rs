//! Overlap tests and the two-polygon union (`Polygon::merge`).
//!
//! Both operations cut each boundary at every contact with the other boundary
//! (`LineSegment::contacts`), so each resulting piece lies entirely inside,
//! entirely outside, or along the other polygon.
//!
//! Union walk
//! - Keep pieces that are not strictly inside the other polygon.
//! - Pieces shared in the same direction are kept once; pieces shared in
//!   opposite directions are an interior seam and are dropped.
//! - Walk from the lexicographically smallest vertex, which is always on the
//!   outer contour, taking the left-most piece at junctions.
//!
//! Limitations: only the outer contour is returned (holes of the union are
//! dropped), and results of multiply-touching concave pairs are only as good
//! as the exact contact points allow.

use std::collections::{HashMap, HashSet};

use nalgebra::{Point2, Vector2};

use super::error::GeomError;
use super::polygon::Polygon;
use super::segment::LineSegment;
use super::types::MergeCfg;
use super::util::{cross, lex_cmp, point_key, PointKey};

/// Where a boundary piece lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Inside,
    Boundary,
    Outside,
}

/// Split both boundaries at their mutual contacts.
fn split_pieces(a: &Polygon, b: &Polygon) -> (Vec<LineSegment>, Vec<LineSegment>) {
    let ea = a.line_segments();
    let eb = b.line_segments();
    let mut cuts_a: Vec<Vec<Point2<f64>>> = vec![Vec::new(); ea.len()];
    let mut cuts_b: Vec<Vec<Point2<f64>>> = vec![Vec::new(); eb.len()];
    for (i, sa) in ea.iter().enumerate() {
        for (j, sb) in eb.iter().enumerate() {
            for p in sa.contacts(sb) {
                cuts_a[i].push(p);
                cuts_b[j].push(p);
            }
        }
    }
    (cut_edges(ea, cuts_a), cut_edges(eb, cuts_b))
}

fn cut_edges(edges: &[LineSegment], cuts: Vec<Vec<Point2<f64>>>) -> Vec<LineSegment> {
    let mut out = Vec::with_capacity(edges.len());
    for (edge, mut pts) in edges.iter().zip(cuts) {
        let d = edge.direction();
        pts.retain(|p| *p != edge.p1 && *p != edge.p2);
        pts.sort_by(|p, q| (*p - edge.p1).dot(&d).total_cmp(&(*q - edge.p1).dot(&d)));
        pts.dedup();
        let mut start = edge.p1;
        for p in pts {
            out.push(LineSegment::new(start, p));
            start = p;
        }
        out.push(LineSegment::new(start, edge.p2));
    }
    out
}

fn classify(piece: &LineSegment, poly: &Polygon) -> Side {
    let along_edge = poly
        .line_segments()
        .iter()
        .any(|e| e.contains_point(piece.p1) && e.contains_point(piece.p2));
    if along_edge {
        Side::Boundary
    } else if poly.contains_point(piece.midpoint()) {
        Side::Inside
    } else {
        Side::Outside
    }
}

impl Polygon {
    /// True if the interiors of the two polygons intersect.
    ///
    /// Touching boundaries (shared edges or vertices) alone do not overlap.
    pub fn overlap(&self, other: &Polygon) -> bool {
        if self.equals(other) {
            return true;
        }
        if self.vertices().any(|v| other.contains_point(v))
            || other.vertices().any(|v| self.contains_point(v))
        {
            return true;
        }
        let crossing = self.line_segments().iter().any(|a| {
            other
                .line_segments()
                .iter()
                .any(|b| a.intersect(b).is_some())
        });
        if crossing {
            return true;
        }
        // T-junctions and collinear stretches: look at the pieces in between.
        let (pa, pb) = split_pieces(self, other);
        pa.iter().any(|p| classify(p, other) == Side::Inside)
            || pb.iter().any(|p| classify(p, self) == Side::Inside)
    }

    /// True if `other` lies inside `self` or on its boundary.
    pub fn covers(&self, other: &Polygon) -> bool {
        let (_, pb) = split_pieces(self, other);
        pb.iter().all(|p| classify(p, self) != Side::Outside)
    }

    /// Union contour of two overlapping polygons, with `MergeCfg::default()`.
    pub fn merge(&self, other: &Polygon) -> Result<Polygon, GeomError> {
        self.merge_with(other, MergeCfg::default())
    }

    /// Union contour of two overlapping polygons.
    ///
    /// Returns the containing polygon when one covers the other, and
    /// `DisjointMerge` when the interiors do not intersect.
    pub fn merge_with(&self, other: &Polygon, cfg: MergeCfg) -> Result<Polygon, GeomError> {
        let (pa, pb) = split_pieces(self, other);
        let side_a: Vec<Side> = pa.iter().map(|p| classify(p, other)).collect();
        let side_b: Vec<Side> = pb.iter().map(|p| classify(p, self)).collect();
        if !side_b.contains(&Side::Outside) {
            return Ok(self.clone());
        }
        if !side_a.contains(&Side::Outside) {
            return Ok(other.clone());
        }
        if !self.overlap(other) {
            return Err(GeomError::DisjointMerge);
        }

        let candidates = pa
            .into_iter()
            .zip(side_a)
            .chain(pb.into_iter().zip(side_b))
            .filter(|(_, side)| *side != Side::Inside)
            .map(|(piece, _)| piece);
        let pieces = outer_pieces(candidates);
        let budget = cfg.max_walk_steps.unwrap_or(pieces.len() + 1);
        let mut contour = walk(&pieces, budget)?;
        if cfg.simplify_collinear {
            contour = drop_collinear(contour);
        }
        tracing::debug!(
            pieces = pieces.len(),
            vertices = contour.len(),
            "merge walk closed"
        );
        Polygon::from_points(contour)
    }
}

/// Dedup same-direction twins and drop opposite-direction twins.
fn outer_pieces(candidates: impl Iterator<Item = LineSegment>) -> Vec<LineSegment> {
    let mut seen: HashSet<LineSegment> = HashSet::new();
    let mut unique = Vec::new();
    for piece in candidates {
        if seen.insert(piece) {
            unique.push(piece);
        }
    }
    unique
        .into_iter()
        .filter(|p| !seen.contains(&p.reversed()))
        .collect()
}

fn walk(pieces: &[LineSegment], budget: usize) -> Result<Vec<Point2<f64>>, GeomError> {
    let mut outgoing: HashMap<PointKey, Vec<usize>> = HashMap::new();
    for (i, p) in pieces.iter().enumerate() {
        outgoing.entry(point_key(p.p1)).or_default().push(i);
    }
    let Some(first) = (0..pieces.len()).min_by(|&i, &j| lex_cmp(&pieces[i].p1, &pieces[j].p1))
    else {
        return Err(GeomError::MergeWalk { steps: 0 });
    };
    let start = pieces[first].p1;
    let mut used = vec![false; pieces.len()];
    let mut contour = Vec::new();
    let mut cur = first;
    let mut steps = 0usize;
    loop {
        used[cur] = true;
        contour.push(pieces[cur].p1);
        steps += 1;
        let end = pieces[cur].p2;
        if end == start {
            break;
        }
        if steps >= budget {
            return Err(GeomError::MergeWalk { steps });
        }
        let incoming = pieces[cur].direction();
        let next = outgoing
            .get(&point_key(end))
            .into_iter()
            .flatten()
            .copied()
            .filter(|&k| !used[k])
            .max_by(|&i, &j| {
                let ti = turn(incoming, pieces[i].direction());
                let tj = turn(incoming, pieces[j].direction());
                ti.total_cmp(&tj)
            });
        match next {
            Some(k) => cur = k,
            None => return Err(GeomError::MergeWalk { steps }),
        }
    }
    let unused = used.iter().filter(|u| !**u).count();
    if unused > 0 {
        tracing::debug!(unused, "union has pieces off the outer contour (holes dropped)");
    }
    Ok(contour)
}

/// Signed turn angle from `a` to `b`; positive turns left.
#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    cross(a, b).atan2(a.dot(&b))
}

/// Remove vertices lying exactly on the straight line through their neighbours.
fn drop_collinear(mut pts: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    loop {
        let before = pts.len();
        let mut i = 0;
        while pts.len() > 3 && i < pts.len() {
            let n = pts.len();
            let a = pts[i] - pts[(i + n - 1) % n];
            let b = pts[(i + 1) % n] - pts[i];
            if cross(a, b) == 0.0 && a.dot(&b) > 0.0 {
                pts.remove(i);
            } else {
                i += 1;
            }
        }
        if pts.len() == before {
            return pts;
        }
    }
}
