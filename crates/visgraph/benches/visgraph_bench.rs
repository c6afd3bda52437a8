//! Criterion benches for the visibility sweep.
//!
//! - sweep vs. brute force on random star-shaped polygons (n = 16, 64, 256),
//! - convex input (every pair visible), both kernels.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use visgraph::api::{
    brute_force_edges, draw_star_polygon, polygon_to_f64, F64Kernel, I64Kernel, PolygonReplay,
    RandomPolygonCfg, VertexCount, VisibilityGraph,
};

fn star(n: usize) -> Vec<[i64; 2]> {
    let cfg = RandomPolygonCfg {
        vertex_count: VertexCount::Fixed(n),
        grid: 10_000,
        max_attempts: 256,
    };
    (0..)
        .find_map(|index| draw_star_polygon(cfg, PolygonReplay { seed: 42, index }))
        .unwrap()
}

fn convex(n: usize) -> Vec<[i64; 2]> {
    (0..n as i64).map(|x| [x, x * x]).collect()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for n in [16usize, 64, 256] {
        let poly = star(n);
        group.bench_with_input(BenchmarkId::new("star_i64", n), &poly, |b, poly| {
            b.iter(|| VisibilityGraph::from_polygon(I64Kernel, poly).len())
        });
        let fpoly = polygon_to_f64(&poly);
        group.bench_with_input(BenchmarkId::new("star_f64", n), &fpoly, |b, poly| {
            b.iter(|| VisibilityGraph::from_polygon(F64Kernel::default(), poly).len())
        });
        let cpoly = convex(n);
        group.bench_with_input(BenchmarkId::new("convex_i64", n), &cpoly, |b, poly| {
            b.iter(|| VisibilityGraph::from_polygon(I64Kernel, poly).len())
        });
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);
    for n in [16usize, 64] {
        let poly = star(n);
        let g = VisibilityGraph::from_polygon(I64Kernel, &poly);
        group.bench_with_input(BenchmarkId::new("star_i64", n), &poly, |b, poly| {
            b.iter(|| brute_force_edges(&I64Kernel, poly, g.edges()).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_brute_force);
criterion_main!(benches);
