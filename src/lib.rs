//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Given a catalog of items (weight, price) and a weight capacity, searches
//! for a subset with maximal total price that fits, using a generational GA
//! instead of exact search:
//!
//! - **Encoding**: one bit per item, set when the item is packed.
//! - **Fitness**: total price when the selection fits, `-1` otherwise, so
//!   the capacity constraint becomes part of an unconstrained landscape.
//! - **Selection**: tournament of size 5.
//! - **Crossover**: single cut at half the chromosome.
//! - **Mutation**: independent 5% bit flips.
//! - **Replacement**: the whole population, every generation (no elitism).
//!
//! The result is heuristic; it can settle on a feasible but suboptimal
//! selection.
//!
//! # Architecture
//!
//! [`ga`] is the problem-agnostic engine (traits, configuration,
//! operators, evolution loop). [`knapsack`] plugs the knapsack instance
//! into it and builds the final report. Every stochastic step draws from
//! one explicit generator, see [`random`].

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;

pub use error::GaError;
