//! 2D polygon kernel for overlap testing and resolution.
//!
//! Layers
//! - `geom2::LineSegment`: segment crossing, contact and distance primitives.
//! - `geom2::Polygon`: containment, bounds, ray and segment queries, overlap,
//!   union (`merge`), outward offset (`swell`) and axis separation.
//! - `geom2::rand`: reproducible random convex polygons for tests and benches.
//!
//! All types are immutable values; the crate does no I/O and installs no
//! tracing subscriber.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point2, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        is_clockwise, line_segments_intersect_themselves, GeomError, InvalidPolygon, LineSegment,
        MergeCfg, Polygon, Rectangle,
    };
    pub use nalgebra::{point, vector, Point2, Vector2};
}
