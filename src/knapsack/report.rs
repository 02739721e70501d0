//! Final report and plain-text tables.
//!
//! Tables are right-aligned columns separated by two spaces with a dashed
//! rule under the header.

use super::candidate::Candidate;
use super::types::{Item, KnapsackProblem};
use crate::ga::GenerationRecord;
use std::fmt;

/// The packed items of one candidate with its score and weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackReport {
    /// Packed items in catalog order.
    pub items: Vec<Item>,

    /// Freshly computed fitness: total price, or
    /// [`INFEASIBLE`](super::INFEASIBLE) when over capacity.
    pub fitness: f64,

    /// Total weight of the packed items.
    pub total_weight: u64,

    /// Capacity of the instance the report was built against.
    pub capacity: u64,
}

impl KnapsackReport {
    /// Builds the report, recomputing fitness from the genes.
    pub fn new(problem: &KnapsackProblem, candidate: &Candidate) -> Self {
        let genes = candidate.genes();
        Self {
            items: problem.selected_items(genes).cloned().collect(),
            fitness: problem.fitness_of(genes),
            total_weight: problem.totals(genes).weight,
            capacity: problem.capacity(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.total_weight <= self.capacity
    }
}

impl fmt::Display for KnapsackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<String>> = self
            .items
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.price.to_string(),
                    item.weight.to_string(),
                ]
            })
            .collect();
        write_table(f, &["Item", "Price", "Weight"], &rows)?;
        writeln!(f)?;
        writeln!(f, "Total Price: {}", self.fitness)?;
        write!(f, "Total Weight: {}", self.total_weight)
    }
}

/// Generation records displayed as a table.
#[derive(Debug, Clone, Copy)]
pub struct LogTable<'a>(pub &'a [GenerationRecord]);

impl fmt::Display for LogTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<String>> = self
            .0
            .iter()
            .map(|r| {
                vec![
                    r.generation.to_string(),
                    r.best_fitness.to_string(),
                    r.average_fitness.to_string(),
                ]
            })
            .collect();
        write_table(f, &["Generation", "Best Fitness", "Average Fitness"], &rows)
    }
}

/// Renders generation records as a table.
pub fn render_log_table(log: &[GenerationRecord]) -> String {
    LogTable(log).to_string()
}

fn write_table<W: fmt::Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> fmt::Result {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    writeln!(
        out,
        "{}",
        join_cells(headers.iter().zip(&widths).map(|(h, &w)| format!("{h:>w$}")))
    )?;
    writeln!(out, "{}", join_cells(widths.iter().map(|&w| "-".repeat(w))))?;
    for row in rows {
        writeln!(
            out,
            "{}",
            join_cells(row.iter().zip(&widths).map(|(c, &w)| format!("{c:>w$}")))
        )?;
    }
    Ok(())
}

fn join_cells<I: Iterator<Item = String>>(cells: I) -> String {
    cells.collect::<Vec<_>>().join("  ")
}
