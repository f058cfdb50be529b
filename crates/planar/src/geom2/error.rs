//! Error types for polygon construction and boundary queries.

use std::fmt;

use nalgebra::Point2;
use thiserror::Error;

use super::segment::LineSegment;

/// Why a vertex sequence was rejected as a polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidPolygon {
    /// Fewer than three vertices.
    #[error("need at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate")]
    NonFinite,

    /// Edge `i` has zero length (repeated consecutive vertex).
    #[error("edge {0} has zero length")]
    DegenerateEdge(usize),

    /// All vertices are collinear.
    #[error("polygon has zero area")]
    ZeroArea,

    /// Non-adjacent edges `i` and `j` cross.
    #[error("edges {0} and {1} intersect")]
    SelfIntersecting(usize, usize),
}

/// What a failed boundary lookup was looking for.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Segment(LineSegment),
    StartPoint(Point2<f64>),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Segment(ls) => write!(f, "segment {ls}"),
            Lookup::StartPoint(p) => write!(f, "segment starting at {p}"),
        }
    }
}

/// Errors raised by polygon operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Construction rejected the input.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] InvalidPolygon),

    /// The segment or start point is not on this polygon's boundary.
    #[error("not on the polygon boundary: {0}")]
    SegmentNotFound(Lookup),

    /// `merge` was called on polygons that do not overlap.
    #[error("cannot merge polygons that do not overlap")]
    DisjointMerge,

    /// The union walk did not close within its step budget.
    #[error("union walk did not close after {steps} steps")]
    MergeWalk { steps: usize },

    /// A separation axis of zero length.
    #[error("separation direction has zero length")]
    ZeroDirection,
}
