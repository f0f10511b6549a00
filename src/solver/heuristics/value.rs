use crate::{
    board::{Val, Var},
    solver::{assignment::SearchNode, stats::SearchStats},
};

/// A trait for strategies that determine the order in which a variable's
/// candidate values are tried.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    /// Reorders the consistency-filtered candidates for `var`.
    ///
    /// The returned vector must be a permutation of `candidates`; ordering
    /// affects search effort only, never the set of reachable solutions.
    fn order_values(
        &self,
        var: Var,
        candidates: Vec<Val>,
        node: &SearchNode<'_>,
        stats: &mut SearchStats,
    ) -> Vec<Val>;
}

/// A simple heuristic that keeps values in their natural ascending order.
#[derive(Debug)]
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(
        &self,
        _var: Var,
        candidates: Vec<Val>,
        _node: &SearchNode<'_>,
        _stats: &mut SearchStats,
    ) -> Vec<Val> {
        candidates
    }
}

/// The Least-Constraining-Value heuristic.
///
/// Ranks each candidate by the number of (row, value) options it would
/// rule out across the domains of all greater-indexed rows, ascending, so
/// the value that leaves the most freedom downstream is tried first. Ties
/// fall back to natural value order.
#[derive(Debug)]
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    fn ruled_out(
        &self,
        var: Var,
        val: Val,
        node: &SearchNode<'_>,
        stats: &mut SearchStats,
    ) -> usize {
        node.problem
            .variables()
            .filter(|&other| other.0 > var.0)
            .map(|other| {
                node.store
                    .candidates(other)
                    .iter()
                    .filter(|&&candidate| {
                        !node.problem.pair_consistent(var, val, other, candidate, stats)
                    })
                    .count()
            })
            .sum()
    }
}

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        var: Var,
        candidates: Vec<Val>,
        node: &SearchNode<'_>,
        stats: &mut SearchStats,
    ) -> Vec<Val> {
        let mut scored: Vec<(usize, Val)> = candidates
            .into_iter()
            .map(|val| (self.ruled_out(var, val, node, stats), val))
            .collect();
        scored.sort_by_key(|&(ruled_out, val)| (ruled_out, val));
        scored.into_iter().map(|(_, val)| val).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        problem::Problem,
        solver::{assignment::PartialAssignment, domain::DomainStore},
    };

    #[test]
    fn identity_preserves_candidate_order() {
        let problem = Problem::n_queens(3).unwrap();
        let store = DomainStore::full(3);
        let assignment = PartialAssignment::empty(3);
        let node = SearchNode {
            problem: &problem,
            store: &store,
            assignment: &assignment,
        };
        let mut stats = SearchStats::default();

        let ordered = IdentityValueHeuristic.order_values(
            Var(0),
            vec![Val(0), Val(1), Val(2)],
            &node,
            &mut stats,
        );
        assert_eq!(ordered, vec![Val(0), Val(1), Val(2)]);
        assert_eq!(stats.constraint_checks, 0);
    }

    #[test]
    fn lcv_tries_the_least_restricting_columns_first() {
        // For row 2 of a 4x4 board, only row 3 lies below. Edge columns
        // rule out two of its values, middle columns three, so the edges
        // come first with ties in natural order.
        let problem = Problem::n_queens(4).unwrap();
        let store = DomainStore::full(4);
        let assignment = PartialAssignment::empty(4);
        let node = SearchNode {
            problem: &problem,
            store: &store,
            assignment: &assignment,
        };
        let mut stats = SearchStats::default();

        let ordered = LeastConstrainingValueHeuristic.order_values(
            Var(2),
            vec![Val(0), Val(1), Val(2), Val(3)],
            &node,
            &mut stats,
        );
        assert_eq!(ordered, vec![Val(0), Val(3), Val(1), Val(2)]);
        assert!(stats.constraint_checks > 0);
    }

    #[test]
    fn lcv_returns_a_permutation_of_its_input() {
        let problem = Problem::n_queens(5).unwrap();
        let store = DomainStore::full(5);
        let assignment = PartialAssignment::empty(5);
        let node = SearchNode {
            problem: &problem,
            store: &store,
            assignment: &assignment,
        };
        let mut stats = SearchStats::default();

        let input: Vec<Val> = (0..5).map(Val).collect();
        let mut ordered = LeastConstrainingValueHeuristic.order_values(
            Var(0),
            input.clone(),
            &node,
            &mut stats,
        );
        ordered.sort();
        assert_eq!(ordered, input);
    }
}
