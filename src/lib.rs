//! Regina is a small combinatorial search laboratory for finite-domain
//! assignment problems, with N-Queens as the running instance.
//!
//! Two families of engines operate over one shared objective, the conflict
//! count of a complete assignment ([`board::Board::conflicts`]):
//!
//! - **Systematic search**: iterative backtracking over partial assignments
//!   ([`solver::search::BacktrackingSearch`]) with pluggable variable and
//!   value ordering heuristics (naive order, Minimum-Remaining-Values,
//!   Least-Constraining-Value) and an optional AC-3 propagation pass
//!   ([`solver::propagate::enforce_arc_consistency`]) that prunes domains
//!   without ever changing the solution set.
//! - **Metaheuristics**: best-improvement hill climbing and simulated
//!   annealing over single boards ([`local`]), and a generational genetic
//!   algorithm over populations of boards ([`genetic`]).
//!
//! Every stochastic engine takes an injected, seedable random source, so
//! trials are reproducible and independent trials can run in parallel
//! without shared state. Search effort is tallied in an explicit
//! [`solver::stats::SearchStats`] value returned with each outcome.
//!
//! # Example: enumerating the 5-Queens solutions
//!
//! ```
//! use regina::problem::Problem;
//! use regina::solver::heuristics::value::LeastConstrainingValueHeuristic;
//! use regina::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
//! use regina::solver::search::BacktrackingSearch;
//!
//! let problem = Problem::n_queens(5).unwrap();
//! let solver = BacktrackingSearch::new(
//!     Box::new(MinimumRemainingValuesHeuristic),
//!     Box::new(LeastConstrainingValueHeuristic),
//! )
//! .with_propagation();
//!
//! let outcome = solver.solve(&problem);
//! assert_eq!(outcome.solutions.len(), 10);
//! assert!(outcome.solutions.iter().all(|board| board.conflicts() == 0));
//! ```
//!
//! # Example: a reproducible hill-climbing trial
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use regina::local::hill::{HillClimbConfig, HillClimbing};
//!
//! let solver = HillClimbing::new(HillClimbConfig::new(6)).unwrap();
//! let outcome = solver.run(&mut ChaCha8Rng::seed_from_u64(1));
//! assert_eq!(outcome.conflicts, outcome.board.conflicts());
//! ```
pub mod board;
pub mod error;
pub mod genetic;
pub mod local;
pub mod problem;
pub mod report;
pub mod solver;
