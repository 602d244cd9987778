//! Criterion benchmarks for u-skyline queries and indicators.
//!
//! Uses uniform random points in the unit hypercube, generated from a
//! fixed seed, so runs are comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_skyline::indicators::{IndicatorConfig, IndicatorRunner};
use u_skyline::point::{Point, PointSet};
use u_skyline::ranking::{directional_top_k, top_k, Weights, DEFAULT_BETA};
use u_skyline::skyline::{skyline, SkylineRunner};

// ===========================================================================
// Synthetic data
// ===========================================================================

fn uniform(n: usize, d: usize, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..n)
        .map(|i| {
            let values = (0..d).map(|_| rng.random::<f64>()).collect();
            Point::new(i as u64 + 1, values)
        })
        .collect();
    PointSet::new(points).unwrap()
}

fn weights(d: usize) -> Weights {
    let mut rng = StdRng::seed_from_u64(7);
    Weights::random(d, &mut rng).unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_skyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline");
    group.sample_size(10);

    for &(n, d) in &[(1_000, 2), (10_000, 2), (10_000, 4), (10_000, 6)] {
        let points = uniform(n, d, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_d{}", n, d), n),
            &points,
            |b, p| {
                b.iter(|| {
                    let result = SkylineRunner::run(black_box(p));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let points = uniform(50_000, 4, 42);
    let w = weights(4);

    for &k in &[10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("linear", k), &k, |b, &k| {
            b.iter(|| black_box(top_k(black_box(&points), k, &w).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("directional", k), &k, |b, &k| {
            b.iter(|| {
                black_box(directional_top_k(black_box(&points), k, &w, DEFAULT_BETA).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");
    group.sample_size(10);

    for &d in &[2, 3] {
        let sky = skyline(&uniform(5_000, d, 42));
        let config = IndicatorConfig::default()
            .with_samples(20_000)
            .with_max_resolution(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(d),
            &(sky, config),
            |b, (s, c)| {
                b.iter(|| {
                    let result = IndicatorRunner::run(black_box(s), black_box(c)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_skyline, bench_top_k, bench_indicators);
criterion_main!(benches);
