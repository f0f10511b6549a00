//! The comparison harness: runs every engine against the same instance and
//! tabulates per-trial results.

use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use tracing_subscriber::EnvFilter;

use regina::{
    error::Result,
    genetic::{config::GeneticConfig, runner::GeneticAlgorithm},
    local::{
        annealing::{AnnealingConfig, SimulatedAnnealing},
        hill::{HillClimbConfig, HillClimbing},
    },
    problem::Problem,
    report::{render_search_table, render_summary_table, render_trials_table, TrialRecord},
    solver::{
        heuristics::{
            value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{
                MinimumRemainingValuesHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic,
            },
        },
        search::{BacktrackingSearch, SearchOutcome},
    },
};

#[derive(Parser, Debug)]
#[command(
    name = "compare",
    about = "Compare systematic and metaheuristic solvers on the N-Queens instance"
)]
struct Args {
    /// Board size.
    #[arg(long, default_value_t = 5)]
    n: usize,

    /// Trials per metaheuristic.
    #[arg(long, default_value_t = 5)]
    trials: usize,

    /// Base seed; each (algorithm, trial) pair derives its own stream.
    #[arg(long, default_value_t = 2024)]
    seed: u64,

    /// Step budget for hill climbing and simulated annealing.
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,

    /// Generation budget for the genetic algorithm.
    #[arg(long, default_value_t = 500)]
    generations: usize,

    /// Genetic population size.
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Genetic mutation rate.
    #[arg(long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// Emit the trial records as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Print the first solved boards found.
    #[arg(long)]
    show_boards: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let problem = Problem::n_queens(args.n)?;
    let search_rows = run_search_family(&problem);
    let records = run_metaheuristics(&args)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).expect("trial records serialize")
        );
        return Ok(());
    }

    println!("Systematic search (exhaustive, N={}):", args.n);
    println!("{}", render_search_table(&search_rows));

    println!("Metaheuristic trials (N={}, {} trials each):", args.n, args.trials);
    println!("{}", render_trials_table(&records));

    println!("Summary:");
    println!("{}", render_summary_table(&records));

    if args.show_boards {
        if let Some((_, outcome)) = search_rows.first() {
            for (i, board) in outcome.solutions.iter().take(3).enumerate() {
                println!("Solution {}:", i + 1);
                println!("{}", board.render());
            }
        }
    }

    Ok(())
}

fn strategy(mrv: bool, lcv: bool) -> BacktrackingSearch {
    let variable_heuristic: Box<dyn VariableSelectionHeuristic> = if mrv {
        Box::new(MinimumRemainingValuesHeuristic)
    } else {
        Box::new(SelectFirstHeuristic)
    };
    let value_heuristic: Box<dyn ValueOrderingHeuristic> = if lcv {
        Box::new(LeastConstrainingValueHeuristic)
    } else {
        Box::new(IdentityValueHeuristic)
    };
    BacktrackingSearch::new(variable_heuristic, value_heuristic)
}

fn run_search_family(problem: &Problem) -> Vec<(String, SearchOutcome)> {
    let combos = [
        ("backtracking", false, false),
        ("backtracking+MRV", true, false),
        ("backtracking+LCV", false, true),
        ("backtracking+MRV+LCV", true, true),
    ];

    let mut rows = Vec::new();
    for (label, mrv, lcv) in combos {
        for propagate in [false, true] {
            let mut solver = strategy(mrv, lcv);
            let mut name = label.to_string();
            if propagate {
                solver = solver.with_propagation();
                name.push_str("+AC3");
            }
            rows.push((name, solver.solve(problem)));
        }
    }
    rows
}

fn run_metaheuristics(args: &Args) -> Result<Vec<TrialRecord>> {
    let hill = HillClimbing::new(HillClimbConfig::new(args.n).with_max_steps(args.max_steps))?;
    let annealing =
        SimulatedAnnealing::new(AnnealingConfig::new(args.n).with_max_steps(args.max_steps))?;
    let genetic = GeneticAlgorithm::new(
        GeneticConfig::new(args.n)
            .with_population_size(args.population)
            .with_generations(args.generations)
            .with_mutation_rate(args.mutation_rate),
    )?;

    let mut records = Vec::new();
    for trial in 0..args.trials {
        let outcome = hill.run(&mut trial_rng(args.seed, 0, trial));
        records.push(record("Hill Climbing", trial, outcome.conflicts, outcome.steps, outcome.elapsed));

        let outcome = annealing.run(&mut trial_rng(args.seed, 1, trial));
        records.push(record(
            "Simulated Annealing",
            trial,
            outcome.conflicts,
            outcome.steps,
            outcome.elapsed,
        ));

        let outcome = genetic.run(&mut trial_rng(args.seed, 2, trial));
        records.push(record(
            "Genetic Algorithm",
            trial,
            outcome.conflicts,
            outcome.generations,
            outcome.elapsed,
        ));
    }

    // Group rows per algorithm for the tables.
    records.sort_by_key(|r| match r.algorithm.as_str() {
        "Hill Climbing" => 0,
        "Simulated Annealing" => 1,
        _ => 2,
    });
    Ok(records)
}

fn record(
    algorithm: &str,
    trial: usize,
    conflicts: u32,
    steps: usize,
    elapsed: std::time::Duration,
) -> TrialRecord {
    TrialRecord {
        algorithm: algorithm.to_string(),
        trial: trial + 1,
        conflicts,
        solved: conflicts == 0,
        steps,
        elapsed_secs: elapsed.as_secs_f64(),
    }
}

/// One independent stream per (algorithm, trial) pair.
fn trial_rng(seed: u64, algorithm: u64, trial: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed ^ (algorithm << 32) ^ trial as u64)
}
