//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::GaError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, generation count, selection strategy, operator
/// rates, logging cadence, and the random seed.
///
/// # Defaults
///
/// The default is the reference configuration used for the bundled
/// catalog:
///
/// ```
/// use knapsack_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generation_count, 100);
/// assert_eq!(config.selection, Selection::Tournament(5));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::RandomSeededTournament(3))
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub generation_count: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of genes the child takes from the first parent (0.0–1.0).
    ///
    /// The cut point is `floor(len * crossover_split)`.
    pub crossover_split: f64,

    /// Independent per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// A generation record is logged for generation 1 and for every
    /// generation whose 1-based index is a multiple of this value.
    pub log_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl GaConfig {
    /// The reference configuration: 10 individuals, 100 generations,
    /// tournament of 5, half/half crossover, 5% mutation, a record every
    /// 10 generations.
    pub fn reference() -> Self {
        Self {
            population_size: 10,
            generation_count: 100,
            selection: Selection::default(),
            crossover_split: 0.5,
            mutation_rate: 0.05,
            log_interval: 10,
            seed: None,
        }
    }

    /// Scales population and generation count with the number of genes.
    ///
    /// - `item_count < 20` → reference configuration
    /// - `20 ≤ item_count < 100` → population 50, 200 generations
    /// - `item_count ≥ 100` → population 100, 500 generations, mutation
    ///   rate `1 / item_count` (one expected flip per child)
    pub fn auto_select(item_count: usize) -> Self {
        if item_count < 20 {
            Self::reference()
        } else if item_count < 100 {
            Self {
                population_size: 50,
                generation_count: 200,
                ..Self::reference()
            }
        } else {
            Self {
                population_size: 100,
                generation_count: 500,
                mutation_rate: 1.0 / item_count as f64,
                ..Self::reference()
            }
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for the reference tournament with size `k`.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover split, clamped to `[0, 1]`.
    pub fn with_crossover_split(mut self, split: f64) -> Self {
        self.crossover_split = split.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the logging interval.
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Fields are public, so values set without the builder are checked
    /// here rather than clamped.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if self.generation_count == 0 {
            return Err(GaError::InvalidGenerationCount(self.generation_count));
        }
        let k = self.selection.tournament_size();
        if k == 0 {
            return Err(GaError::InvalidTournamentSize(k));
        }
        check_unit("crossover_split", self.crossover_split)?;
        check_unit("mutation_rate", self.mutation_rate)?;
        if self.log_interval == 0 {
            return Err(GaError::InvalidLogInterval(self.log_interval));
        }
        Ok(())
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), GaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GaError::InvalidRate { name, value });
    }
    Ok(())
}
