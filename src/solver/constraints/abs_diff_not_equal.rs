use crate::{
    board::{Val, Var},
    solver::constraint::{Constraint, ConstraintDescriptor},
};

/// A constraint that enforces `abs(X - Y) != C`.
///
/// In the N-Queens instance, `C` is the row distance between the two
/// variables, making this the "different diagonal" rule for one pair of
/// rows.
#[derive(Debug, Clone)]
pub struct AbsoluteDifferenceNotEqualConstraint {
    vars: [Var; 2],
    distance: usize,
}

impl AbsoluteDifferenceNotEqualConstraint {
    pub fn new(a: Var, b: Var, distance: usize) -> Self {
        Self {
            vars: [a, b],
            distance,
        }
    }
}

impl Constraint for AbsoluteDifferenceNotEqualConstraint {
    fn variables(&self) -> &[Var] {
        &self.vars
    }

    fn satisfied(&self, values: &[Val]) -> bool {
        values[0].0.abs_diff(values[1].0) != self.distance
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AbsDiffNotEqualConstraint".to_string(),
            description: format!(
                "abs(?{} - ?{}) != {}",
                self.vars[0].0, self.vars[1].0, self.distance
            ),
        }
    }
}
