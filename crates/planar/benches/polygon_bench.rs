//! Criterion benchmarks for polygon queries on random convex polygons.
//! Focus sizes: n in {4, 8, 16, 32, 64} vertices.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planar

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{Point2, Vector2};
use planar::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::geom2::{LineSegment, Polygon};

fn random_polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.2,
        radial_jitter: 0.1,
        ..RadialCfg::default()
    };
    (0..)
        .find_map(|index| draw_polygon_radial(cfg, ReplayToken { seed, index }))
        .expect("sampler draws a polygon eventually")
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    for &n in &[4usize, 8, 16, 32, 64] {
        let p = random_polygon(n, 41);
        group.bench_with_input(BenchmarkId::new("contains_point", n), &p, |b, p| {
            b.iter(|| p.contains_point(Point2::new(0.1, -0.2)))
        });
        group.bench_with_input(BenchmarkId::new("distance_to_perimeter", n), &p, |b, p| {
            b.iter(|| p.distance_to_perimeter(Point2::new(-3.0, 0.1), Vector2::new(1.0, 0.0)))
        });
        group.bench_with_input(BenchmarkId::new("intersect", n), &p, |b, p| {
            let ls = LineSegment::from_values(-3.0, -0.3, 3.0, 0.4);
            b.iter(|| p.intersect(&ls))
        });
    }
    group.finish();
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs");
    for &n in &[4usize, 8, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("overlap", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let p = random_polygon(n, 42);
                    let q = p.transpose(0.5, 0.25);
                    (p, q)
                },
                |(p, q)| p.overlap(&q),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("merge", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let p = random_polygon(n, 43);
                    let q = p.transpose(0.5, 0.25);
                    (p, q)
                },
                |(p, q)| {
                    let _merged = p.merge(&q);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("separate_from", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let p = random_polygon(n, 44);
                    let q = random_polygon(n, 45);
                    (p, q)
                },
                |(p, q)| {
                    let _moved = p.separate_from(&q, Vector2::new(1.0, 0.3));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("swell", n), &n, |b, &n| {
            b.iter_batched(
                || random_polygon(n, 46),
                |p| {
                    let _big = p.swell(0.1);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queries, bench_pairs);
criterion_main!(benches);
