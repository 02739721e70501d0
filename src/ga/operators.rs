//! Generic binary-string genetic operators.
//!
//! Initialization, crossover, and mutation for chromosomes encoded as
//! `&[bool]`, one bit per decision. They are domain-agnostic: knapsack
//! inclusion, feature selection, and any subset problem can use them.
//!
//! # Crossover Operators
//!
//! - [`fixed_point_crossover`]: single cut at a fixed fraction of the length
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-bit flips, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use crate::error::GaError;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Draws `len` independent fair bits.
pub fn random_bits<R: Rng>(len: usize, rng: &mut R) -> Vec<bool> {
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Index at which [`fixed_point_crossover`] cuts a chromosome of length `len`.
///
/// `floor(len * split)`, capped at `len`.
pub fn cut_point(len: usize, split: f64) -> usize {
    ((len as f64 * split).floor() as usize).min(len)
}

/// Single-point crossover at a fixed fraction of the chromosome.
///
/// The child takes `parent1[..cut]` followed by `parent2[cut..]`, where
/// `cut = floor(len * split)`. The child is a fresh allocation.
///
/// # Errors
/// Returns [`GaError::LengthMismatch`] if the parents differ in length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn fixed_point_crossover(
    parent1: &[bool],
    parent2: &[bool],
    split: f64,
) -> Result<Vec<bool>, GaError> {
    if parent1.len() != parent2.len() {
        return Err(GaError::LengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }

    let cut = cut_point(parent1.len(), split);
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    Ok(child)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each position flips independently with probability
/// `rate`.
///
/// Returns the number of flipped bits.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in bits.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Tests
// ============================================================================
