//! Planar polygon geometry (simple, clockwise, closed contours).
//!
//! Purpose
//! - `LineSegment`: directed segment with exact crossing, contact, projection
//!   and ray predicates.
//! - `Polygon`: validated, clockwise, non-self-intersecting contour with
//!   containment, bounds, boundary queries, overlap, union, offsetting and
//!   axis separation.
//!
//! Conventions
//! - Points and vectors are nalgebra `Point2<f64>` / `Vector2<f64>`.
//! - Predicates are epsilon-free; touching is never crossing.
//! - Absent answers are `Option`, precondition failures are `GeomError`.
//!
//! Code cross-refs: `segment::LineSegment`, `polygon::Polygon`, `union`
//! (overlap + merge), `util::{is_clockwise, line_segments_intersect_themselves}`.

mod error;
mod polygon;
pub mod rand;
mod segment;
mod types;
mod union;
mod util;

pub use error::{GeomError, InvalidPolygon, Lookup};
pub use polygon::Polygon;
pub use segment::LineSegment;
pub use types::{MergeCfg, Rectangle};
pub use util::{
    first_self_intersection, is_clockwise, line_segments_intersect_themselves, shoelace_sum,
};
