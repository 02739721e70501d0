//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic evolution loop and a concrete problem such
//! as [`KnapsackProblem`](crate::knapsack::KnapsackProblem).

use super::runner::GenerationRecord;
use crate::error::GaError;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is considered better** (maximization).
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value that loses every comparison.
    ///
    /// Unevaluated individuals are ranked with this value.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals cache their last computed fitness. `None` means the
/// individual has not been evaluated since it was created or last changed,
/// which keeps a genuine fitness of zero distinguishable from "unknown".
///
/// `Clone` must produce a fully independent copy: the engine clones
/// selected parents out of a population that is about to be discarded.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<bool>,
///     fitness: Option<f64>,
/// }
///
/// impl Individual for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> Option<f64> { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
/// }
/// ```
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the cached fitness, or `None` if unevaluated.
    fn fitness(&self) -> Option<Self::Fitness>;

    /// Stores a freshly computed fitness.
    ///
    /// Called by the engine after [`GaProblem::evaluate`].
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Cached fitness, with unevaluated individuals ranked as [`Fitness::worst`].
    fn fitness_or_worst(&self) -> Self::Fitness {
        self.fitness().unwrap_or_else(Self::Fitness::worst)
    }
}

/// Defines a GA optimization problem.
///
/// Implementors plug their domain into the generic engine by providing:
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to score an individual (pure, deterministic)
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb an individual in place
///
/// Operator parameters (`split`, `rate`) come from
/// [`GaConfig`](super::GaConfig) so problems stay free of hard-coded rates.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual with unevaluated fitness.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual.
    ///
    /// Must not depend on randomness or on the cached fitness: calling it
    /// twice on the same individual yields the same value.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into a single child with unevaluated fitness.
    ///
    /// `split` is the fraction of genes taken from `parent1`.
    fn crossover(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        split: f64,
    ) -> Result<Self::Individual, GaError>;

    /// Mutates an individual in place; `rate` is the per-gene probability.
    ///
    /// Must leave the individual unevaluated (`fitness()` returns `None`).
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rate: f64, rng: &mut R);

    /// Called whenever the evolution loop appends a [`GenerationRecord`].
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _record: &GenerationRecord) {}
}
