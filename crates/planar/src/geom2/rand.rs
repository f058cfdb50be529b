//! Random convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for test fixtures, benchmarks and the `random` CLI
//!   command. Every draw is a validated, clockwise `Polygon`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the convex hull of the jittered points, and shift by
//!   `center`.
//! - A `ReplayToken` seeds its own `StdRng`, so any draw can be reproduced on
//!   its own without replaying the ones before it.

use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::util::{cross, lex_cmp};

/// How many jittered points to draw before taking the hull.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range; both ends are raised to at least 3.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        rng.gen_range(lo..=hi.max(lo))
    }
}

/// Shape of the random polygons: a jittered ring of points around `center`.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angle noise per point, in units of the even spacing; capped at 0.49 so
    /// neighbours never swap.
    pub angle_jitter_frac: f64,
    /// Relative radius noise: each radius is `base_radius * (1 + u)` with
    /// `|u| <= radial_jitter`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point2<f64>,
    /// Rotate the whole ring by a random angle; otherwise the first point
    /// starts near angle zero.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point2::origin(),
            random_phase: true,
        }
    }
}

/// `(seed, index)` address of one draw; the same token always gives the same
/// polygon, and neighbouring indices give unrelated ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        key[16..24].copy_from_slice(b"planar2d");
        StdRng::from_seed(key)
    }
}

/// Draw a random convex polygon via radial jitter + convex hull.
///
/// `None` only if the hull degenerates (fewer than three distinct points).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Point2<f64>> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let th = base + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let hull = convex_hull(&pts)?;
    Polygon::from_points(hull).ok()
}

/// Andrew’s monotone chain convex hull (CCW order, collinear points dropped).
fn convex_hull(points: &[Point2<f64>]) -> Option<Vec<Point2<f64>>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let turn = |a: Point2<f64>, b: Point2<f64>, c: Point2<f64>| cross(b - a, c - a);
    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::is_clockwise;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_are_clockwise_and_centered() {
        let cfg = RadialCfg {
            center: Point2::new(10.0, -4.0),
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 3, index }).unwrap();
            assert!(is_clockwise(p.line_segments()));
            assert!(p.contains_point(cfg.center));
        }
    }

    #[test]
    fn hull_drops_interior_points() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point2::new(1.0, 1.0)));
    }
}
