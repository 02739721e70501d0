//! Bit-vector candidate solution.

use crate::error::GaError;
use crate::ga::operators::{bit_flip_mutation, fixed_point_crossover, random_bits};
use crate::ga::Individual;
use rand::Rng;

/// One inclusion decision per catalog item, plus the cached fitness.
///
/// The fitness cache is `None` until the candidate is evaluated and is
/// cleared again by [`mutate`](Self::mutate), so it never describes genes
/// other than the current ones. `Clone` copies the genes into a new
/// allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    genes: Vec<bool>,
    fitness: Option<f64>,
}

impl Candidate {
    /// `length` independent fair bits, unevaluated.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self::from_genes(random_bits(length, rng))
    }

    /// Unevaluated candidate with the given genes.
    ///
    /// Prefer [`KnapsackProblem::candidate`](super::KnapsackProblem::candidate),
    /// which checks the length against the catalog.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Positions of the packed items.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, included)| **included)
            .map(|(i, _)| i)
    }

    /// Child of `self` and `other` cut at `floor(len * split)`; unevaluated.
    ///
    /// # Errors
    /// Returns [`GaError::LengthMismatch`] if the parents differ in length.
    pub fn crossover(&self, other: &Candidate, split: f64) -> Result<Candidate, GaError> {
        fixed_point_crossover(&self.genes, &other.genes, split).map(Self::from_genes)
    }

    /// Flips each gene independently with probability `rate` and drops the
    /// cached fitness. Returns the number of flipped genes.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) -> usize {
        self.fitness = None;
        bit_flip_mutation(&mut self.genes, rate, rng)
    }
}

impl Individual for Candidate {
    type Fitness = f64;

    fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}
