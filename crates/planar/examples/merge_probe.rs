//! Merge timing probe for pairs of random convex polygons.
//!
//! Usage:
//!   cargo run -p planar --example merge_probe -- 16
//!
//! Draws ten overlapping pairs with the given vertex count (default 12),
//! merges them, and prints vertex counts, areas and wall time per merge.

use std::time::Instant;

use planar::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    for index in 0..10 {
        let Some(p) = draw_polygon_radial(cfg, ReplayToken { seed: 2025, index }) else {
            println!("pair {index}: sampler degenerated");
            continue;
        };
        let q = p.transpose(0.6, 0.2);
        let start = Instant::now();
        let merged = p.merge(&q);
        let ms = start.elapsed().as_secs_f64() * 1e3;
        match merged {
            Ok(m) => println!(
                "pair {index}: n={} merged={} area {:.4} -> {:.4} ({ms:.3} ms)",
                p.line_segments().len(),
                m.line_segments().len(),
                p.area(),
                m.area()
            ),
            Err(e) => println!("pair {index}: {e}"),
        }
    }
}
