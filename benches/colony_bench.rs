//! Criterion benchmarks for u-beecolony.
//!
//! Uses standard continuous test functions (Sphere, Rastrigin, Ackley) to
//! measure per-iteration overhead of each mutation operator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::{E, PI};
use u_beecolony::abc::{AbcConfig, Colony, Initialization, Mutation};

// ===========================================================================
// Test functions
// ===========================================================================

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum::<f64>()
}

fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sq = x.iter().map(|v| v * v).sum::<f64>() / n;
    let cos = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;
    -20.0 * (-0.2 * sq.sqrt()).exp() - cos.exp() + 20.0 + E
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sphere_dims(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_sphere");
    group.sample_size(10);

    for &dim in &[2, 10, 30] {
        let bounds = vec![(-5.12, 5.12); dim];
        let config = AbcConfig::default()
            .with_max_iterations(200)
            .with_record_history(false)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &bounds, |b, bounds| {
            b.iter(|| {
                let mut colony = Colony::new(40, sphere, bounds, None, None).unwrap();
                black_box(colony.optimize(black_box(&config)).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_mutations_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_rastrigin_mutation");
    group.sample_size(10);

    let bounds = vec![(-5.12, 5.12); 10];
    let mutations = [
        ("standard", Mutation::Standard),
        ("modified", Mutation::Modified { mutation_rate: 0.8 }),
        ("best1", Mutation::BestOne),
        ("best2", Mutation::BestTwo),
        ("directed", Mutation::Directed),
    ];
    for (name, mutation) in mutations {
        let config = AbcConfig::default()
            .with_max_iterations(200)
            .with_mutation(mutation)
            .with_record_history(false)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| {
                let mut colony = Colony::new(40, rastrigin, &bounds, None, None).unwrap();
                black_box(colony.optimize(black_box(config)).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_initialization_ackley(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_ackley_init");
    group.sample_size(10);

    let bounds = vec![(-32.768, 32.768); 10];
    for (name, init) in [("random", Initialization::Random), ("chaotic", Initialization::Chaotic)] {
        let config = AbcConfig::default()
            .with_max_iterations(100)
            .with_initialization(init)
            .with_record_history(false)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| {
                let mut colony = Colony::new(40, ackley, &bounds, None, None).unwrap();
                black_box(colony.optimize(black_box(config)).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sphere_dims,
    bench_mutations_rastrigin,
    bench_initialization_ackley
);
criterion_main!(benches);
