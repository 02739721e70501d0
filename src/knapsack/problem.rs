//! [`GaProblem`] implementation for the knapsack instance.

use super::candidate::Candidate;
use super::types::KnapsackProblem;
use crate::error::GaError;
use crate::ga::GaProblem;
use rand::Rng;

impl GaProblem for KnapsackProblem {
    type Individual = Candidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::random(self.len(), rng)
    }

    fn evaluate(&self, candidate: &Candidate) -> f64 {
        self.fitness_of(candidate.genes())
    }

    fn crossover(
        &self,
        parent1: &Candidate,
        parent2: &Candidate,
        split: f64,
    ) -> Result<Candidate, GaError> {
        parent1.crossover(parent2, split)
    }

    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rate: f64, rng: &mut R) {
        let flipped = candidate.mutate(rate, rng);
        tracing::trace!(flipped, "mutated candidate");
    }
}
