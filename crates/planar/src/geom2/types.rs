//! Small value types shared by polygon queries.
//!
//! - `Rectangle`: axis-aligned box, the result type of `Polygon::get_bounds`.
//! - `MergeCfg`: knobs for the union walk in `Polygon::merge_with`.

use nalgebra::Point2;

use super::error::GeomError;
use super::polygon::Polygon;

/// Axis-aligned rectangle with lower-left corner `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Point2<f64> {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The same box as a clockwise polygon, starting at the lower-left corner.
    ///
    /// Fails when either extent is zero.
    pub fn to_polygon(&self) -> Result<Polygon, GeomError> {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        Polygon::from_points(vec![
            Point2::new(x0, y0),
            Point2::new(x0, y1),
            Point2::new(x1, y1),
            Point2::new(x1, y0),
        ])
    }
}

/// Union walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct MergeCfg {
    /// Drop vertices lying exactly on the line through their neighbours.
    pub simplify_collinear: bool,
    /// Step budget for the walk; `None` uses the number of boundary pieces + 1.
    pub max_walk_steps: Option<usize>,
}

impl Default for MergeCfg {
    fn default() -> Self {
        Self {
            simplify_collinear: true,
            max_walk_steps: None,
        }
    }
}
