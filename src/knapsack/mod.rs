//! 0/1 knapsack on top of the GA engine.
//!
//! Each item of the catalog owns one bit of the chromosome; a set bit means
//! the item is packed. The capacity constraint is folded into the fitness:
//! a feasible selection scores its total price, an overweight one scores
//! [`INFEASIBLE`], which loses against every feasible selection including
//! the empty one.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::knapsack::{catalog, KnapsackProblem, KnapsackReport};
//!
//! let problem = KnapsackProblem::new(catalog::reference_items(), catalog::REFERENCE_CAPACITY)?;
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(7))?;
//! let report = KnapsackReport::new(&problem, &result.best);
//! assert!(report.total_weight <= 30);
//! # Ok::<(), knapsack_ga::GaError>(())
//! ```

mod candidate;
pub mod catalog;
mod problem;
mod report;
mod types;

pub use candidate::Candidate;
pub use report::{render_log_table, KnapsackReport, LogTable};
pub use types::{Item, KnapsackProblem, Totals};

/// Fitness of a selection whose total weight exceeds the capacity.
pub const INFEASIBLE: f64 = -1.0;
