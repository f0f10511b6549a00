//! Trial records and table rendering for the experiment runner.
//!
//! The solving engines know nothing about tabulation; they emit boards,
//! conflict counts, step counts, and stats, and this module maps those
//! onto per-trial rows and per-algorithm summaries.

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::{search::SearchOutcome, stats::SearchStats};

/// One trial of one algorithm, in the shape the comparison harness
/// tabulates and serializes.
#[derive(Debug, Clone, Serialize)]
pub struct TrialRecord {
    pub algorithm: String,
    pub trial: usize,
    pub conflicts: u32,
    pub solved: bool,
    pub steps: usize,
    pub elapsed_secs: f64,
}

/// Renders one row per trial.
pub fn render_trials_table(records: &[TrialRecord]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Algorithm"),
        Cell::new("Trial"),
        Cell::new("Conflicts"),
        Cell::new("Solved"),
        Cell::new("Steps/Generations"),
        Cell::new("Time (s)"),
    ]));

    for record in records {
        table.add_row(Row::new(vec![
            Cell::new(&record.algorithm),
            Cell::new(&record.trial.to_string()),
            Cell::new(&record.conflicts.to_string()),
            Cell::new(if record.solved { "yes" } else { "no" }),
            Cell::new(&record.steps.to_string()),
            Cell::new(&format!("{:.4}", record.elapsed_secs)),
        ]));
    }

    table.to_string()
}

/// Renders one row per algorithm with solve rate and means, preserving
/// the order in which algorithms first appear.
pub fn render_summary_table(records: &[TrialRecord]) -> String {
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        if !order.contains(&record.algorithm.as_str()) {
            order.push(&record.algorithm);
        }
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Algorithm"),
        Cell::new("Trials"),
        Cell::new("Solve Rate"),
        Cell::new("Mean Conflicts"),
        Cell::new("Mean Steps"),
        Cell::new("Mean Time (s)"),
    ]));

    for algorithm in order {
        let group: Vec<&TrialRecord> = records
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .collect();
        let trials = group.len() as f64;
        let solved = group.iter().filter(|r| r.solved).count() as f64;
        let mean_conflicts: f64 =
            group.iter().map(|r| f64::from(r.conflicts)).sum::<f64>() / trials;
        let mean_steps: f64 = group.iter().map(|r| r.steps as f64).sum::<f64>() / trials;
        let mean_time: f64 = group.iter().map(|r| r.elapsed_secs).sum::<f64>() / trials;

        table.add_row(Row::new(vec![
            Cell::new(algorithm),
            Cell::new(&group.len().to_string()),
            Cell::new(&format!("{:.2}", solved / trials)),
            Cell::new(&format!("{:.2}", mean_conflicts)),
            Cell::new(&format!("{:.1}", mean_steps)),
            Cell::new(&format!("{:.4}", mean_time)),
        ]));
    }

    table.to_string()
}

/// Renders the systematic-search comparison: one row per strategy with
/// its solution count and effort counters.
pub fn render_search_table(rows: &[(String, SearchOutcome)]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Solutions"),
        Cell::new("Constraint Checks"),
        Cell::new("Nodes"),
        Cell::new("Backtracks"),
        Cell::new("Prunings"),
        Cell::new("Time (s)"),
    ]));

    for (strategy, outcome) in rows {
        let SearchStats {
            constraint_checks,
            nodes_visited,
            backtracks,
            prunings,
            ..
        } = outcome.stats;
        table.add_row(Row::new(vec![
            Cell::new(strategy),
            Cell::new(&outcome.solutions.len().to_string()),
            Cell::new(&constraint_checks.to_string()),
            Cell::new(&nodes_visited.to_string()),
            Cell::new(&backtracks.to_string()),
            Cell::new(&prunings.to_string()),
            Cell::new(&format!("{:.4}", outcome.elapsed.as_secs_f64())),
        ]));
    }

    table.to_string()
}
