//! Criterion benches for the divide-and-conquer hull and its cubic base case.
//!
//! - `dc`: n in {100, 1k, 10k, 100k}, square and circle inputs.
//! - `brute`: n in {20, 50, 100}; cubic, so sizes stay small.
//! - `dc_parallel`: rayon split above a cutoff, largest sizes only.
//!
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dchull::hull2::rand::{draw_points, PointDist, ReplayToken, SampleCfg};
use dchull::{brute_force_hull, compute_hull, compute_hull_with, HullCfg};

fn points(n: usize, dist: PointDist, seed: u64) -> Vec<nalgebra::Vector2<f64>> {
    draw_points(
        SampleCfg {
            n,
            dist,
            half_width: 1000.0,
        },
        ReplayToken::new(seed, n as u64),
    )
}

fn bench_dc(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc");
    group.sample_size(20);
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("square", n), &n, |b, &n| {
            b.iter_batched(
                || points(n, PointDist::Square, 41),
                |pts| compute_hull(&pts).unwrap(),
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || points(n, PointDist::Circle, 42),
                |pts| compute_hull(&pts).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_brute(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute");
    for &n in &[20usize, 50, 100] {
        group.bench_with_input(BenchmarkId::new("square", n), &n, |b, &n| {
            b.iter_batched(
                || points(n, PointDist::Square, 43),
                |pts| brute_force_hull(&pts, f64::EPSILON),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("dc_parallel");
    group.sample_size(10);
    let cfg = HullCfg::default().with_parallel_cutoff(4096);
    for &n in &[10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("square", n), &n, |b, &n| {
            b.iter_batched(
                || points(n, PointDist::Square, 44),
                |pts| compute_hull_with(&pts, cfg).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dc, bench_brute, bench_parallel);
criterion_main!(benches);
