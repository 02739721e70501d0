//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Both strategies here are tournaments; they differ only in
//! how the running winner is seeded.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better) and
/// read the cached fitness only; unevaluated individuals rank last.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Selection;
///
/// // Reference tournament: seeded with individual 0, then 5 draws
/// let sel = Selection::Tournament(5);
///
/// // Unbiased tournament: seeded with a random draw, 3 draws in total
/// let sel = Selection::RandomSeededTournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament seeded with the individual at index 0.
    ///
    /// The running winner starts as `population[0]`, then `k` uniform
    /// draws (with replacement) each replace it only when strictly fitter.
    /// Index 0 therefore takes part in every tournament, which slightly
    /// favours it over the other individuals.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Tournament seeded with a uniformly random individual.
    ///
    /// `k` uniform draws in total; the first seeds the running winner.
    /// Every index has the same chance to take part.
    ///
    /// # Complexity
    /// O(k) per selection
    RandomSeededTournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(5)
    }
}

impl Selection {
    /// Number of random draws per tournament.
    pub fn tournament_size(&self) -> usize {
        match self {
            Selection::Tournament(k) | Selection::RandomSeededTournament(k) => *k,
        }
    }

    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => index_seeded_tournament(population, *k, rng),
            Selection::RandomSeededTournament(k) => random_seeded_tournament(population, *k, rng),
        }
    }

    /// Select a parent and return an independent copy of it.
    ///
    /// The copy shares no storage with `population`, so mutating it never
    /// affects the source individual or another copy of it.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_cloned<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> I {
        population[self.select(population, rng)].clone()
    }
}

/// Tournament whose running winner starts at index 0.
fn index_seeded_tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();

    let mut best_idx = 0;
    for _ in 0..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness_or_worst() > population[best_idx].fitness_or_worst() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Tournament whose running winner starts at a random draw.
fn random_seeded_tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness_or_worst() > population[best_idx].fitness_or_worst() {
            best_idx = idx;
        }
    }
    best_idx
}
