//! Systematic depth-first search over partial assignments.
//!
//! The searcher walks an explicit frame stack rather than recursing: each
//! frame holds one decision point (a variable, its ordered consistent
//! candidates, and a cursor). This keeps memory bounded by the board size
//! and makes the traversal trivially resumable after emitting a solution.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    board::{Board, Val, Var},
    problem::Problem,
    solver::{
        assignment::{PartialAssignment, SearchNode},
        domain::DomainStore,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        propagate::{enforce_arc_consistency, Propagation},
        stats::SearchStats,
    },
};

/// How much of the search tree to explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    /// Enumerate every conflict-free complete assignment.
    Exhaustive,
    /// Stop as soon as one solution is found.
    FirstSolution,
}

/// The result of one systematic solve.
///
/// An empty solution set is a legitimate outcome (the instance is
/// unsatisfiable), not an error.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub solutions: Vec<Board>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// One decision point on the explicit stack.
struct Frame {
    var: Var,
    candidates: Vec<Val>,
    cursor: usize,
}

pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    propagate_first: bool,
    limit: SearchLimit,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            propagate_first: false,
            limit: SearchLimit::Exhaustive,
        }
    }

    /// Runs one AC-3 pass over the initial domains before searching.
    ///
    /// Propagation can only reduce search effort; the returned solution
    /// set is identical with or without it.
    pub fn with_propagation(mut self) -> Self {
        self.propagate_first = true;
        self
    }

    pub fn stop_at_first(mut self) -> Self {
        self.limit = SearchLimit::FirstSolution;
        self
    }

    /// Explores the search tree rooted at the empty assignment and returns
    /// every conflict-free complete assignment reached (or the first, under
    /// [`SearchLimit::FirstSolution`]), together with the effort counters.
    pub fn solve(&self, problem: &Problem) -> SearchOutcome {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut solutions = Vec::new();

        let mut store = DomainStore::full(problem.size());
        if self.propagate_first {
            if let Propagation::Unsatisfiable(var) =
                enforce_arc_consistency(problem, &mut store, &mut stats)
            {
                debug!(?var, "unsatisfiable before search began");
                return SearchOutcome {
                    solutions,
                    stats,
                    elapsed: started.elapsed(),
                };
            }
        }

        let mut assignment = PartialAssignment::empty(problem.size());
        let mut frames: Vec<Frame> = Vec::new();
        if let Some(frame) = self.open_frame(problem, &store, &assignment, &mut stats) {
            frames.push(frame);
        }

        while let Some(frame) = frames.last_mut() {
            if frame.cursor >= frame.candidates.len() {
                let exhausted = frames.pop().unwrap();
                assignment.unassign(exhausted.var);
                stats.backtracks += 1;
                continue;
            }

            let var = frame.var;
            let val = frame.candidates[frame.cursor];
            frame.cursor += 1;

            assignment.assign(var, val);
            stats.nodes_visited += 1;

            if assignment.is_complete() {
                debug!(solution = solutions.len(), "complete assignment reached");
                solutions.push(assignment.to_board());
                if self.limit == SearchLimit::FirstSolution {
                    break;
                }
                continue;
            }

            if let Some(child) = self.open_frame(problem, &store, &assignment, &mut stats) {
                frames.push(child);
            }
        }

        SearchOutcome {
            solutions,
            stats,
            elapsed: started.elapsed(),
        }
    }

    /// Picks the next variable and its ordered consistent candidates.
    /// Returns `None` once every variable is assigned.
    fn open_frame(
        &self,
        problem: &Problem,
        store: &DomainStore,
        assignment: &PartialAssignment,
        stats: &mut SearchStats,
    ) -> Option<Frame> {
        let node = SearchNode {
            problem,
            store,
            assignment,
        };
        let var = self.variable_heuristic.select_variable(&node, stats)?;
        let candidates = node.consistent_candidates(var, stats);
        let candidates = self.value_heuristic.order_values(var, candidates, &node, stats);
        Some(Frame {
            var,
            candidates,
            cursor: 0,
        })
    }
}
