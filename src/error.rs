//! Error type for configuration and precondition failures.
//!
//! Capacity violations are not errors: an overweight selection is scored
//! with [`INFEASIBLE`](crate::knapsack::INFEASIBLE) and competes normally.
//! Everything here is a caller mistake that would otherwise produce
//! degenerate output, so it is reported before any evolution work starts.

/// Errors raised when a problem instance, configuration, or operator
/// precondition is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("item catalog must contain at least one item")]
    EmptyCatalog,

    #[error("item `{name}` has invalid price {price}: must be finite and non-negative")]
    InvalidItem { name: String, price: f64 },

    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("generation_count must be at least 1, got {0}")]
    InvalidGenerationCount(usize),

    #[error("tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    #[error("{name} must be between 0.0 and 1.0, got: {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("log_interval must be at least 1, got {0}")]
    InvalidLogInterval(usize),

    #[error("parents must have equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}
