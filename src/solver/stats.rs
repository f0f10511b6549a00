use serde::Serialize;

/// The explicit counter object threaded through a solve.
///
/// Every constraint predicate evaluation, wherever it happens (propagation,
/// consistency filtering, or a heuristic looking ahead), tallies into the
/// stats instance the caller passed in; there is no process-global state,
/// so concurrent trials never share a counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Constraint predicate evaluations.
    pub constraint_checks: u64,
    /// Partial assignments tried.
    pub nodes_visited: u64,
    /// Decision points exhausted and undone.
    pub backtracks: u64,
    /// AC-3 revise passes.
    pub revisions: u64,
    /// Values removed from domains by propagation.
    pub prunings: u64,
}
