//! Property tests for the knapsack operators and evaluator.

use knapsack_ga::ga::{GaConfig, GaProblem, Individual, Population};
use knapsack_ga::knapsack::{Item, KnapsackProblem, INFEASIBLE};
use knapsack_ga::random::create_rng;
use proptest::prelude::*;

fn arb_problem() -> impl Strategy<Value = KnapsackProblem> {
    (
        prop::collection::vec((0u64..50, 0.0f64..100.0), 1..24),
        0u64..150,
    )
        .prop_map(|(raw, capacity)| {
            let items = raw
                .into_iter()
                .enumerate()
                .map(|(i, (w, p))| Item::new(format!("i{i}"), w, p))
                .collect();
            KnapsackProblem::new(items, capacity).unwrap()
        })
}

proptest! {
    #[test]
    fn evaluation_matches_definition(problem in arb_problem(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let candidate = problem.create_individual(&mut rng);
        prop_assert_eq!(candidate.len(), problem.len());

        let weight: u64 = candidate.selected_indices().map(|i| problem.items()[i].weight).sum();
        let price: f64 = candidate.selected_indices().map(|i| problem.items()[i].price).sum();
        let fitness = problem.evaluate(&candidate);

        if weight > problem.capacity() {
            prop_assert_eq!(fitness, INFEASIBLE);
        } else {
            prop_assert!(fitness >= 0.0);
            prop_assert!((fitness - price).abs() < 1e-9);
        }
        prop_assert_eq!(fitness, problem.evaluate(&candidate));
    }

    #[test]
    fn crossover_takes_prefix_and_suffix(
        problem in arb_problem(),
        seed in any::<u64>(),
        split in 0.0f64..=1.0,
    ) {
        let mut rng = create_rng(seed);
        let a = problem.create_individual(&mut rng);
        let b = problem.create_individual(&mut rng);
        let child = problem.crossover(&a, &b, split).unwrap();

        let cut = ((a.len() as f64 * split).floor() as usize).min(a.len());
        prop_assert_eq!(child.len(), a.len());
        prop_assert_eq!(&child.genes()[..cut], &a.genes()[..cut]);
        prop_assert_eq!(&child.genes()[cut..], &b.genes()[cut..]);
        prop_assert!(child.fitness().is_none());
    }

    #[test]
    fn population_size_is_invariant(
        problem in arb_problem(),
        size in 1usize..30,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let config = GaConfig::default();
        let mut population = Population::random(&problem, size, &mut rng).unwrap();
        for _ in 0..5 {
            population.evaluate();
            population.advance(&config, &mut rng).unwrap();
            prop_assert_eq!(population.len(), size);
            prop_assert!(population.individuals().iter().all(|c| c.len() == problem.len()));
        }
    }
}
