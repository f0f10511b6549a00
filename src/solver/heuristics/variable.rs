//! Defines the standard heuristics for selecting which variable to branch
//! on next during the search process.

use crate::{
    board::Var,
    solver::{assignment::SearchNode, stats::SearchStats},
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the searcher should branch on next. A good heuristic
/// can dramatically reduce search effort; it can never change which
/// solutions exist.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(var)` for the chosen unassigned variable.
    /// * `None` if every variable is already assigned.
    fn select_variable(&self, node: &SearchNode<'_>, stats: &mut SearchStats) -> Option<Var>;
}

/// A simple heuristic that selects the first unassigned variable in
/// variable order, i.e. the fixed row-order baseline.
#[derive(Debug)]
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, node: &SearchNode<'_>, _stats: &mut SearchStats) -> Option<Var> {
        node.problem
            .variables()
            .find(|&var| !node.assignment.is_assigned(var))
    }
}

/// A heuristic that selects the variable with the Minimum Remaining Values.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable: the one whose domain, filtered against the current partial
/// assignment, has the fewest surviving candidates. Ties are broken toward
/// the lower variable index to keep the choice deterministic.
#[derive(Debug)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, node: &SearchNode<'_>, stats: &mut SearchStats) -> Option<Var> {
        node.problem
            .variables()
            .filter(|&var| !node.assignment.is_assigned(var))
            .map(|var| (node.consistent_candidates(var, stats).len(), var))
            // Primary criterion: surviving candidate count (ascending).
            // Secondary criterion: variable index (ascending, for ties).
            .min_by_key(|&(remaining, var)| (remaining, var))
            .map(|(_, var)| var)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        board::Val,
        problem::Problem,
        solver::{assignment::PartialAssignment, domain::DomainStore},
    };

    fn node_with<'a>(
        problem: &'a Problem,
        store: &'a DomainStore,
        assignment: &'a PartialAssignment,
    ) -> SearchNode<'a> {
        SearchNode {
            problem,
            store,
            assignment,
        }
    }

    #[test]
    fn select_first_returns_lowest_unassigned_row() {
        let problem = Problem::n_queens(4).unwrap();
        let store = DomainStore::full(4);
        let mut assignment = PartialAssignment::empty(4);
        assignment.assign(Var(0), Val(1));
        let mut stats = SearchStats::default();

        let chosen = SelectFirstHeuristic
            .select_variable(&node_with(&problem, &store, &assignment), &mut stats);
        assert_eq!(chosen, Some(Var(1)));
    }

    #[test]
    fn select_first_reports_exhaustion() {
        let problem = Problem::n_queens(2).unwrap();
        let store = DomainStore::full(2);
        let mut assignment = PartialAssignment::empty(2);
        assignment.assign(Var(0), Val(0));
        assignment.assign(Var(1), Val(1));
        let mut stats = SearchStats::default();

        let chosen = SelectFirstHeuristic
            .select_variable(&node_with(&problem, &store, &assignment), &mut stats);
        assert_eq!(chosen, None);
    }

    #[test]
    fn mrv_prefers_the_most_constrained_row() {
        // With rows 1 and 3 placed, row 2 keeps a single candidate while
        // row 0 keeps two; MRV must skip past row 0.
        let problem = Problem::n_queens(5).unwrap();
        let store = DomainStore::full(5);
        let mut assignment = PartialAssignment::empty(5);
        assignment.assign(Var(1), Val(0));
        assignment.assign(Var(3), Val(2));
        let mut stats = SearchStats::default();

        let node = node_with(&problem, &store, &assignment);
        assert_eq!(node.consistent_candidates(Var(0), &mut stats).len(), 2);
        assert_eq!(node.consistent_candidates(Var(2), &mut stats).len(), 1);

        let chosen =
            MinimumRemainingValuesHeuristic.select_variable(&node, &mut stats);
        assert_eq!(chosen, Some(Var(2)));
    }

    #[test]
    fn mrv_breaks_ties_toward_the_lower_index() {
        let problem = Problem::n_queens(4).unwrap();
        let store = DomainStore::full(4);
        let assignment = PartialAssignment::empty(4);
        let mut stats = SearchStats::default();

        // Nothing assigned: every row keeps all four candidates.
        let chosen = MinimumRemainingValuesHeuristic
            .select_variable(&node_with(&problem, &store, &assignment), &mut stats);
        assert_eq!(chosen, Some(Var(0)));
    }
}
