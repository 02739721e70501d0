//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. Problems plug in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals. Fitness is maximized.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached, invalidatable fitness
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`Population`]: Owned, fixed-size set of individuals
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`], [`GenerationRecord`]: Final result and per-generation log
//!
//! # Submodules
//!
//! - [`operators`]: Generic binary-string initialization, crossover and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::{FitnessSummary, Population};
pub use runner::{GaResult, GaRunner, GenerationRecord};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
