//! Criterion benchmarks comparing the two heuristics.
//!
//! Runs hill climbing and simulated annealing on the built-in benchmark
//! objectives to measure per-run overhead at a fixed iteration budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uphill::hill::{HillClimbConfig, HillClimbRunner};
use uphill::objective::{schaffer4, sphere};
use uphill::sa::{GaussianStep, SaConfig, SaRunner};
use uphill::schedule::Reciprocal;

fn bench_hill_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb_sphere");

    for dim in [2, 8, 32] {
        let start = vec![3.0; dim];
        let config = HillClimbConfig::default().with_iterations(10_000);

        group.bench_with_input(BenchmarkId::from_parameter(dim), &start, |b, start| {
            b.iter(|| {
                let result = HillClimbRunner::run(&sphere, black_box(start), &config).unwrap();
                black_box(result.best_score)
            })
        });
    }

    group.finish();
}

fn bench_simulated_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");

    for dim in [2, 8, 32] {
        let start = vec![3.0; dim];
        let config = SaConfig::default().with_iterations(10_000).with_seed(42);
        let schedule = Reciprocal::new(1.0);

        group.bench_with_input(BenchmarkId::from_parameter(dim), &start, |b, start| {
            b.iter(|| {
                let mut neighbor = GaussianStep::new(1.0).with_decay(0.999);
                let result = SaRunner::run(
                    &sphere,
                    black_box(start),
                    &mut neighbor,
                    &schedule,
                    &config,
                )
                .unwrap();
                black_box(result.best_score)
            })
        });
    }

    group.finish();
}

fn bench_head_to_head_schaffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("schaffer4");
    let start = [1.5, -1.5];

    group.bench_function("hill_climb", |b| {
        let config = HillClimbConfig::default().with_iterations(10_000);
        b.iter(|| {
            let result = HillClimbRunner::run(&schaffer4, black_box(&start), &config).unwrap();
            black_box(result.best_score)
        })
    });

    group.bench_function("simulated_annealing", |b| {
        let config = SaConfig::default().with_iterations(10_000).with_seed(42);
        let schedule = Reciprocal::new(1.0);
        b.iter(|| {
            let mut neighbor = GaussianStep::new(1.0).with_decay(0.999);
            let result = SaRunner::run(
                &schaffer4,
                black_box(&start[..]),
                &mut neighbor,
                &schedule,
                &config,
            )
            .unwrap();
            black_box(result.best_score)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hill_climb,
    bench_simulated_annealing,
    bench_head_to_head_schaffer
);
criterion_main!(benches);
