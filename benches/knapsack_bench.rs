//! Criterion benchmarks for the knapsack GA.
//!
//! Measures a full run on the reference catalog and on larger synthetic
//! catalogs, plus the evaluation pass alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::{GaConfig, GaRunner, Population};
use knapsack_ga::knapsack::{catalog, Item, KnapsackProblem};
use knapsack_ga::random::create_rng;
use rand::Rng;

fn synthetic_problem(n: usize) -> KnapsackProblem {
    let mut rng = create_rng(7);
    let items: Vec<Item> = (0..n)
        .map(|i| {
            Item::new(
                format!("item-{i}"),
                rng.random_range(1..50),
                rng.random_range(1.0..100.0),
            )
        })
        .collect();
    let capacity = items.iter().map(|i| i.weight).sum::<u64>() / 2;
    KnapsackProblem::new(items, capacity).expect("non-empty catalog")
}

fn bench_reference(c: &mut Criterion) {
    let problem =
        KnapsackProblem::new(catalog::reference_items(), catalog::REFERENCE_CAPACITY)
            .expect("reference catalog is valid");
    let config = GaConfig::default().with_seed(42);

    c.bench_function("ga_reference_100_generations", |b| {
        b.iter(|| GaRunner::run(black_box(&problem), black_box(&config)))
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_synthetic");
    for n in [50, 200, 1000] {
        let problem = synthetic_problem(n);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generation_count(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, p| {
            b.iter(|| GaRunner::run(black_box(p), black_box(&config)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let problem = synthetic_problem(1000);
    let mut rng = create_rng(42);
    let mut population =
        Population::random(&problem, 100, &mut rng).expect("population size is positive");

    c.bench_function("evaluate_100x1000", |b| {
        b.iter(|| black_box(population.evaluate()))
    });
}

criterion_group!(benches, bench_reference, bench_scaling, bench_evaluate);
criterion_main!(benches);
