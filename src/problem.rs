//! A problem instance: a fixed set of variables with `[0, N)` domains and
//! a set of binary constraints over them.
//!
//! Instances are read-only after construction; the only mutable state of a
//! solve lives in its own [`crate::solver::domain::DomainStore`] and
//! assignment.

use std::collections::HashMap;

use crate::{
    board::{Val, Var},
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintId},
        constraints::{
            abs_diff_not_equal::AbsoluteDifferenceNotEqualConstraint, not_equal::NotEqualConstraint,
        },
        stats::SearchStats,
    },
};

pub struct Problem {
    n: usize,
    constraints: Vec<Box<dyn Constraint>>,
    by_pair: HashMap<(Var, Var), Vec<ConstraintId>>,
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("n", &self.n)
            .field("constraints", &self.constraints.len())
            .finish()
    }
}

impl Problem {
    /// Builds an instance from a constraint set. Rejects `n < 1`.
    pub fn new(n: usize, constraints: Vec<Box<dyn Constraint>>) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidBoardSize(n));
        }
        let mut by_pair: HashMap<(Var, Var), Vec<ConstraintId>> = HashMap::new();
        for (id, constraint) in constraints.iter().enumerate() {
            let vars = constraint.variables();
            debug_assert_eq!(vars.len(), 2, "only binary constraints are supported");
            by_pair.entry(Self::pair_key(vars[0], vars[1])).or_default().push(id);
        }
        Ok(Self {
            n,
            constraints,
            by_pair,
        })
    }

    /// The classic N-Queens instance: one variable per row, and for every
    /// unordered row pair a "different column" and a "different diagonal"
    /// constraint.
    pub fn n_queens(n: usize) -> Result<Self> {
        let mut constraints: Vec<Box<dyn Constraint>> = Vec::new();
        for r1 in 0..n {
            for r2 in (r1 + 1)..n {
                constraints.push(Box::new(NotEqualConstraint::new(Var(r1), Var(r2))));
                constraints.push(Box::new(AbsoluteDifferenceNotEqualConstraint::new(
                    Var(r1),
                    Var(r2),
                    r2 - r1,
                )));
            }
        }
        Self::new(n, constraints)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn variables(&self) -> impl Iterator<Item = Var> {
        (0..self.n).map(Var)
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }

    /// Checks every constraint linking `a` and `b` against the given values,
    /// tallying one constraint check per predicate evaluated.
    pub fn pair_consistent(
        &self,
        a: Var,
        a_val: Val,
        b: Var,
        b_val: Val,
        stats: &mut SearchStats,
    ) -> bool {
        let Some(ids) = self.by_pair.get(&Self::pair_key(a, b)) else {
            return true;
        };
        for &id in ids {
            let constraint = &self.constraints[id];
            let values = if constraint.variables()[0] == a {
                [a_val, b_val]
            } else {
                [b_val, a_val]
            };
            stats.constraint_checks += 1;
            if !constraint.satisfied(&values) {
                return false;
            }
        }
        true
    }

    fn pair_key(a: Var, b: Var) -> (Var, Var) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
