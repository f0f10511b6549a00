//! Arc-consistency propagation (AC-3).
//!
//! Works the domain store toward arc consistency over the problem's binary
//! constraints. This is a pruning step only: it never removes a value that
//! participates in a global solution, and an arc-consistent store does not
//! imply a solution exists, so search still runs afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    board::Var,
    problem::Problem,
    solver::{
        constraint::ConstraintId, domain::DomainStore, stats::SearchStats, work_list::WorkList,
    },
};

/// The outcome of one propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The store is arc-consistent with respect to every constraint.
    Consistent,
    /// The named variable's domain emptied; the problem is unsatisfiable
    /// under the current domains.
    Unsatisfiable(Var),
}

/// Runs AC-3 to a fixpoint, mutating `store` in place.
///
/// Each popped arc revises the target variable's domain against the other
/// endpoint of the constraint, removing values with no supporting value on
/// the far side. When a domain shrinks, every arc (Xk, Xi) for constraints
/// linking a third variable Xk to the revised Xi is re-enqueued, skipping
/// the endpoint just revised against. Revisions, prunings, and individual
/// predicate evaluations all tally into `stats`.
pub fn enforce_arc_consistency(
    problem: &Problem,
    store: &mut DomainStore,
    stats: &mut SearchStats,
) -> Propagation {
    let mut dependency_graph: HashMap<Var, Vec<ConstraintId>> = HashMap::new();
    for (id, constraint) in problem.constraints().iter().enumerate() {
        for &var in constraint.variables() {
            dependency_graph.entry(var).or_default().push(id);
        }
    }

    let mut worklist = WorkList::new();
    for (id, constraint) in problem.constraints().iter().enumerate() {
        for &var in constraint.variables() {
            worklist.push_back(var, id);
        }
    }

    while let Some((target, id)) = worklist.pop_front() {
        stats.revisions += 1;
        let other = other_endpoint(problem, id, target);

        let removed = revise(problem, store, target, other, id, stats);
        if removed == 0 {
            continue;
        }
        stats.prunings += removed;

        if store.is_empty_domain(target) {
            debug!(?target, "domain emptied during propagation");
            return Propagation::Unsatisfiable(target);
        }

        // The target's domain shrank: neighbors whose support may have
        // vanished must be revised against it again, except the endpoint
        // we just used for support.
        if let Some(dependents) = dependency_graph.get(&target) {
            for &dependent_id in dependents {
                let neighbor = other_endpoint(problem, dependent_id, target);
                if neighbor != target && neighbor != other {
                    worklist.push_back(neighbor, dependent_id);
                }
            }
        }
    }

    debug!(
        checks = stats.constraint_checks,
        prunings = stats.prunings,
        "propagation reached a fixpoint"
    );
    Propagation::Consistent
}

/// Removes every value of `target` with no supporting value in `other`'s
/// domain under the given constraint. Returns the number of removals.
fn revise(
    problem: &Problem,
    store: &mut DomainStore,
    target: Var,
    other: Var,
    id: ConstraintId,
    stats: &mut SearchStats,
) -> u64 {
    let constraint = &problem.constraints()[id];
    let target_first = constraint.variables()[0] == target;

    let unsupported: Vec<_> = store
        .candidates(target)
        .iter()
        .copied()
        .filter(|&x| {
            !store.candidates(other).iter().any(|&y| {
                stats.constraint_checks += 1;
                let values = if target_first { [x, y] } else { [y, x] };
                constraint.satisfied(&values)
            })
        })
        .collect();

    let mut removed = 0;
    for value in unsupported {
        if store.remove(target, value) {
            removed += 1;
        }
    }
    removed
}

fn other_endpoint(problem: &Problem, id: ConstraintId, var: Var) -> Var {
    let vars = problem.constraints()[id].variables();
    if vars[0] == var {
        vars[1]
    } else {
        vars[0]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::board::Val;

    #[test]
    fn full_queens_domains_are_already_arc_consistent() {
        let problem = Problem::n_queens(5).unwrap();
        let mut store = DomainStore::full(5);
        let mut stats = SearchStats::default();

        let outcome = enforce_arc_consistency(&problem, &mut store, &mut stats);

        assert_eq!(outcome, Propagation::Consistent);
        assert_eq!(store, DomainStore::full(5));
        assert_eq!(stats.prunings, 0);
        assert!(stats.constraint_checks > 0);
        assert!(stats.revisions > 0);
    }

    #[test]
    fn pinning_the_corner_of_three_queens_is_unsatisfiable() {
        // With row 0 fixed to column 0 on a 3x3 board, propagation narrows
        // row 1 to {2} and row 2 to {1}, and the final revision of row 2
        // against row 1 drains it.
        let problem = Problem::n_queens(3).unwrap();
        let mut store = DomainStore::full(3);
        store.remove(Var(0), Val(1));
        store.remove(Var(0), Val(2));
        let mut stats = SearchStats::default();

        let outcome = enforce_arc_consistency(&problem, &mut store, &mut stats);

        assert!(matches!(outcome, Propagation::Unsatisfiable(_)));
    }

    #[test]
    fn propagation_is_idempotent() {
        let problem = Problem::n_queens(4).unwrap();
        let mut store = DomainStore::full(4);
        store.remove(Var(0), Val(0));
        let mut stats = SearchStats::default();

        let first = enforce_arc_consistency(&problem, &mut store, &mut stats);
        assert_eq!(first, Propagation::Consistent);
        let snapshot = store.clone();

        // A second pass over an already arc-consistent store must neither
        // prune nor fail.
        let mut stats_again = SearchStats::default();
        let second = enforce_arc_consistency(&problem, &mut store, &mut stats_again);

        assert_eq!(second, Propagation::Consistent);
        assert_eq!(store, snapshot);
        assert_eq!(stats_again.prunings, 0);
    }
}
