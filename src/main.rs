//! Runs the GA on the reference catalog and prints the generation log and
//! the best packing found.

use anyhow::{Context, Result};
use clap::Parser;
use knapsack_ga::ga::{GaConfig, GaRunner, GenerationRecord, Selection};
use knapsack_ga::knapsack::{catalog, render_log_table, KnapsackProblem, KnapsackReport};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "knapsack-ga", version, about = "Genetic algorithm for the 0/1 knapsack problem")]
struct Cli {
    /// Individuals per generation
    #[arg(long, default_value_t = catalog::REFERENCE_POPULATION)]
    population: usize,

    /// Number of generations
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Weight capacity of the knapsack
    #[arg(long, default_value_t = catalog::REFERENCE_CAPACITY)]
    capacity: u64,

    /// Draws per tournament
    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    /// Seed tournaments with a random individual instead of index 0
    #[arg(long)]
    random_seeded_tournament: bool,

    /// Per-gene flip probability
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Fraction of genes taken from the first parent
    #[arg(long, default_value_t = 0.5)]
    crossover_split: f64,

    /// Log every N-th generation (generation 1 is always logged)
    #[arg(long, default_value_t = 10)]
    log_interval: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the log and report as JSON
    #[arg(long)]
    json: bool,
}

/// `--json` output.
#[derive(serde::Serialize)]
struct RunOutput<'a> {
    log: &'a [GenerationRecord],
    report: &'a KnapsackReport,
}

impl Cli {
    fn config(&self) -> GaConfig {
        let selection = if self.random_seeded_tournament {
            Selection::RandomSeededTournament(self.tournament_size)
        } else {
            Selection::Tournament(self.tournament_size)
        };
        GaConfig {
            population_size: self.population,
            generation_count: self.generations,
            selection,
            crossover_split: self.crossover_split,
            mutation_rate: self.mutation_rate,
            log_interval: self.log_interval,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid GA parameters")?;

    let problem = KnapsackProblem::new(catalog::reference_items(), cli.capacity)
        .context("invalid item catalog")?;
    let result = GaRunner::run(&problem, &config).context("evolution failed")?;
    let report = KnapsackReport::new(&problem, &result.best);

    if cli.json {
        let output = RunOutput {
            log: &result.log,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_log_table(&result.log));
        println!("{report}");
    }

    Ok(())
}
