//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → repeat.

use super::config::GaConfig;
use super::population::Population;
use super::types::{GaProblem, Individual};
use crate::error::GaError;
use crate::random::rng_from_option;
use rand::Rng;
use tracing::instrument;

/// Summary statistics of one generation, taken right after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// 1-based generation number.
    pub generation: usize,

    /// Highest fitness in the generation.
    pub best_fitness: f64,

    /// Mean fitness of the generation.
    pub average_fitness: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The fittest individual of the final population.
    ///
    /// There is no elitism, so this can be worse than the best individual
    /// seen in an earlier generation.
    pub best: I,

    /// Fitness of `best`, from a fresh evaluation of the final population.
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Records for generation 1 and every `log_interval`-th generation.
    pub log: Vec<GenerationRecord>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner};
/// use knapsack_ga::knapsack::{catalog, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(catalog::reference_items(), 30).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.log.len(), 11);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from a random initial population.
    ///
    /// Validates `config`, seeds the generator from `config.seed`, runs
    /// [`run_generations`](Self::run_generations), then re-evaluates the
    /// final population and returns its fittest individual.
    ///
    /// # Errors
    /// Returns the first configuration or operator precondition failure.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population = config.population_size,
            generations = config.generation_count,
            seed = ?config.seed,
        )
    )]
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, GaError> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let mut population = Population::random(problem, config.population_size, &mut rng)?;

        let log = Self::run_generations(&mut population, config, &mut rng)?;

        // The loop leaves an unevaluated population behind.
        let summary = population.evaluate();
        let best = population.individuals()[summary.best_index].clone();
        let best_fitness = best.fitness_or_worst();

        tracing::info!(
            best_fitness = summary.best,
            average_fitness = summary.average,
            "evolution finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.generation_count,
            log,
        })
    }

    /// Runs `config.generation_count` generations over an existing
    /// population.
    ///
    /// Each generation evaluates every individual, logs a
    /// [`GenerationRecord`] for generation 1 and every
    /// `config.log_interval`-th generation, then replaces the population
    /// with an offspring set of the same size. The population size is the
    /// one `population` already has; `config.population_size` only applies
    /// to [`run`](Self::run).
    ///
    /// On return the population holds freshly bred, **unevaluated**
    /// individuals.
    ///
    /// # Errors
    /// Returns the first configuration or operator precondition failure.
    pub fn run_generations<P: GaProblem, R: Rng>(
        population: &mut Population<'_, P>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<Vec<GenerationRecord>, GaError> {
        config.validate()?;

        let problem = population.problem();
        let mut log = Vec::with_capacity(config.generation_count / config.log_interval + 1);

        for gen in 0..config.generation_count {
            // Evaluate
            let summary = population.evaluate();
            tracing::debug!(
                generation = gen + 1,
                best = summary.best,
                average = summary.average,
                "generation evaluated"
            );

            // Log
            if gen == 0 || (gen + 1) % config.log_interval == 0 {
                let record = GenerationRecord {
                    generation: gen + 1,
                    best_fitness: summary.best,
                    average_fitness: summary.average,
                };
                problem.on_generation(&record);
                log.push(record);
            }

            // Reproduce and replace
            population.advance(config, rng)?;
        }

        Ok(log)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::{bit_flip_mutation, fixed_point_crossover, random_bits};
    use crate::random::create_rng;
    use std::cell::RefCell;

    // ---- OneMax problem: maximize the number of set bits ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: Option<f64>,
    }

    impl Individual for BitString {
        type Fitness = f64;
        fn fitness(&self) -> Option<f64> {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = Some(f);
        }
    }

    struct OneMaxProblem {
        n: usize,
        seen: RefCell<Vec<usize>>,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: random_bits(self.n, rng),
                fitness: None,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            ind.bits.iter().filter(|&&b| b).count() as f64
        }

        fn crossover(
            &self,
            p1: &BitString,
            p2: &BitString,
            split: f64,
        ) -> Result<BitString, GaError> {
            Ok(BitString {
                bits: fixed_point_crossover(&p1.bits, &p2.bits, split)?,
                fitness: None,
            })
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rate: f64, rng: &mut R) {
            bit_flip_mutation(&mut ind.bits, rate, rng);
            ind.fitness = None;
        }

        fn on_generation(&self, record: &GenerationRecord) {
            self.seen.borrow_mut().push(record.generation);
        }
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMaxProblem::new(20);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generation_count(100)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        let first = result.log.first().unwrap();
        let last = result.log.last().unwrap();
        assert!(
            last.average_fitness > first.average_fitness,
            "average fitness should rise: {} -> {}",
            first.average_fitness,
            last.average_fitness
        );
        assert!(
            result.best_fitness >= 15.0,
            "expected fitness >= 15 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_log_schedule() {
        let problem = OneMaxProblem::new(8);
        let config = GaConfig::default().with_generation_count(100).with_seed(1);

        let result = GaRunner::run(&problem, &config).unwrap();

        let generations: Vec<usize> = result.log.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![1, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(*problem.seen.borrow(), generations);
        assert_eq!(result.generations, 100);
    }

    #[test]
    fn test_log_schedule_custom_interval() {
        let problem = OneMaxProblem::new(8);
        let config = GaConfig::default()
            .with_generation_count(7)
            .with_log_interval(3)
            .with_seed(1);

        let result = GaRunner::run(&problem, &config).unwrap();
        let generations: Vec<usize> = result.log.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![1, 3, 6]);
    }

    #[test]
    fn test_single_generation() {
        let problem = OneMaxProblem::new(8);
        let config = GaConfig::default().with_generation_count(1).with_seed(1);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.log.len(), 1);
        assert_eq!(result.log[0].generation, 1);
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generation_count(30)
            .with_seed(99);

        let a = GaRunner::run(&OneMaxProblem::new(16), &config).unwrap();
        let b = GaRunner::run(&OneMaxProblem::new(16), &config).unwrap();

        assert_eq!(a.log, b.log);
        assert_eq!(a.best.bits, b.best.bits);
        assert_eq!(a.best_fitness, b.best_fitness);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMaxProblem::new(8);
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(
            GaRunner::run(&problem, &config).err().map(|e| e.to_string()),
            Some("population_size must be at least 1, got 0".to_string())
        );
    }

    #[test]
    fn test_run_generations_preserves_size_and_leaves_unevaluated() {
        let problem = OneMaxProblem::new(10);
        let config = GaConfig::default().with_generation_count(25);
        let mut rng = create_rng(42);
        let mut population = Population::random(&problem, 13, &mut rng).unwrap();

        let log = GaRunner::run_generations(&mut population, &config, &mut rng).unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(population.len(), 13);
        assert!(population.individuals().iter().all(|i| i.fitness().is_none()));
        assert!(population.best().is_none());

        population.evaluate();
        assert!(population.best().is_some());
    }

    #[test]
    fn test_result_best_matches_fresh_evaluation() {
        let problem = OneMaxProblem::new(12);
        let config = GaConfig::default().with_seed(5);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.best_fitness, problem.evaluate(&result.best));
        assert_eq!(result.best.fitness(), Some(result.best_fitness));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_generation_record_json_round_trip() {
        let problem = OneMaxProblem::new(6);
        let config = GaConfig::default().with_generation_count(20).with_seed(3);
        let result = GaRunner::run(&problem, &config).unwrap();

        let json = serde_json::to_string(&result.log).unwrap();
        let back: Vec<GenerationRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result.log);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["generation"], 10);
        assert!(value[0]["best_fitness"].is_number());
        assert!(value[0]["average_fitness"].is_number());
    }
}
