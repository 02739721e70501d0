//! Population ownership and the per-generation operations on it.
//!
//! A [`Population`] exclusively owns its individuals. Each call to
//! [`Population::advance`] builds a wholly new set of the same size and
//! swaps it in; no individual survives from one generation to the next
//! except through reproduction.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::GaError;
use rand::Rng;

/// Best and average fitness of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessSummary {
    /// Index of the first individual with the highest fitness.
    pub best_index: usize,

    /// Highest fitness in the population.
    pub best: f64,

    /// Arithmetic mean fitness.
    pub average: f64,
}

/// A fixed-size collection of individuals bound to one problem instance.
pub struct Population<'p, P: GaProblem> {
    problem: &'p P,
    individuals: Vec<P::Individual>,
}

impl<'p, P: GaProblem> Population<'p, P> {
    /// Creates `size` random individuals.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidPopulationSize`] if `size` is zero.
    pub fn random<R: Rng>(problem: &'p P, size: usize, rng: &mut R) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::InvalidPopulationSize(size));
        }
        let individuals = (0..size).map(|_| problem.create_individual(rng)).collect();
        Ok(Self {
            problem,
            individuals,
        })
    }

    /// Wraps an existing set of individuals.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidPopulationSize`] if `individuals` is empty.
    pub fn from_individuals(
        problem: &'p P,
        individuals: Vec<P::Individual>,
    ) -> Result<Self, GaError> {
        if individuals.is_empty() {
            return Err(GaError::InvalidPopulationSize(0));
        }
        Ok(Self {
            problem,
            individuals,
        })
    }

    /// The problem instance this population is evaluated against.
    pub fn problem(&self) -> &'p P {
        self.problem
    }

    /// Number of individuals. Constant for the lifetime of the population.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Read-only view of the current individuals.
    pub fn individuals(&self) -> &[P::Individual] {
        &self.individuals
    }

    /// Consumes the population, returning its individuals.
    pub fn into_individuals(self) -> Vec<P::Individual> {
        self.individuals
    }

    /// Evaluates every individual and stores the result in its cache.
    ///
    /// The reported best is the fitness of an actual individual, so a
    /// population where every individual is infeasible reports the
    /// infeasible score rather than zero.
    pub fn evaluate(&mut self) -> FitnessSummary {
        let mut best_index = 0;
        let mut best = <P::Individual as Individual>::Fitness::worst();
        let mut total = 0.0;

        for (i, ind) in self.individuals.iter_mut().enumerate() {
            let f = self.problem.evaluate(ind);
            ind.set_fitness(f);
            if f > best {
                best = f;
                best_index = i;
            }
            total += f.to_f64();
        }

        FitnessSummary {
            best_index,
            best: best.to_f64(),
            average: total / self.individuals.len() as f64,
        }
    }

    /// The fittest individual, provided every individual is evaluated.
    ///
    /// Returns `None` while any individual carries no fitness, e.g. right
    /// after [`advance`](Self::advance). Call [`evaluate`](Self::evaluate)
    /// first.
    pub fn best(&self) -> Option<&P::Individual> {
        let mut best: Option<&P::Individual> = None;
        for ind in &self.individuals {
            let f = ind.fitness()?;
            match best {
                Some(b) if b.fitness_or_worst() >= f => {}
                _ => best = Some(ind),
            }
        }
        best
    }

    /// Builds the next generation and replaces the current one with it.
    ///
    /// For each of the `len()` slots: two independent selections (with
    /// replacement), one crossover, one mutation. Selection reads the
    /// cached fitness, so [`evaluate`](Self::evaluate) must have run on the
    /// current individuals. The new individuals are unevaluated.
    ///
    /// # Errors
    /// Returns the [`GaConfig::validate`] error for an invalid `config`, and
    /// propagates crossover precondition failures. The population is left
    /// unchanged in either case.
    pub fn advance<R: Rng>(&mut self, config: &GaConfig, rng: &mut R) -> Result<(), GaError> {
        config.validate()?;

        let n = self.individuals.len();
        let mut next_gen = Vec::with_capacity(n);

        for _ in 0..n {
            let parent1 = config.selection.select_cloned(&self.individuals, rng);
            let parent2 = config.selection.select_cloned(&self.individuals, rng);

            let mut child = self
                .problem
                .crossover(&parent1, &parent2, config.crossover_split)?;
            self.problem.mutate(&mut child, config.mutation_rate, rng);

            next_gen.push(child);
        }

        debug_assert_eq!(next_gen.len(), n);
        self.individuals = next_gen;
        Ok(())
    }
}
