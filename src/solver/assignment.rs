use crate::{
    board::{Board, Val, Var},
    problem::Problem,
    solver::{domain::DomainStore, stats::SearchStats},
};

/// A partial assignment built up during backtracking search.
///
/// Assignments are ephemeral: the searcher extends and retracts one per
/// solve and converts it to a [`Board`] only when it becomes complete.
#[derive(Debug, Clone)]
pub struct PartialAssignment {
    values: Vec<Option<Val>>,
}

impl PartialAssignment {
    pub fn empty(n: usize) -> Self {
        Self {
            values: vec![None; n],
        }
    }

    pub fn get(&self, var: Var) -> Option<Val> {
        self.values[var.0]
    }

    pub fn is_assigned(&self, var: Var) -> bool {
        self.values[var.0].is_some()
    }

    pub fn assign(&mut self, var: Var, val: Val) {
        self.values[var.0] = Some(val);
    }

    pub fn unassign(&mut self, var: Var) {
        self.values[var.0] = None;
    }

    pub fn assigned_len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_some())
    }

    /// Pairs of (variable, value) currently assigned, in variable order.
    pub fn assigned(&self) -> impl Iterator<Item = (Var, Val)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|val| (Var(i), val)))
    }

    /// Converts a complete assignment into a board.
    ///
    /// # Panics
    ///
    /// Panics if any variable is still unassigned.
    pub fn to_board(&self) -> Board {
        Board::new(self.values.iter().map(|v| v.unwrap()).collect())
    }
}

/// A read-only view of one search node, handed to the ordering heuristics.
pub struct SearchNode<'a> {
    pub problem: &'a Problem,
    pub store: &'a DomainStore,
    pub assignment: &'a PartialAssignment,
}

impl SearchNode<'_> {
    /// The values of `var`'s domain consistent with every assigned
    /// variable, in ascending order. Each pairwise predicate evaluation
    /// tallies into `stats`.
    pub fn consistent_candidates(&self, var: Var, stats: &mut SearchStats) -> Vec<Val> {
        self.store
            .candidates(var)
            .iter()
            .copied()
            .filter(|&val| {
                self.assignment
                    .assigned()
                    .all(|(assigned_var, assigned_val)| {
                        self.problem
                            .pair_consistent(var, val, assigned_var, assigned_val, stats)
                    })
            })
            .collect()
    }
}
