use crate::{
    board::{Val, Var},
    solver::constraint::{Constraint, ConstraintDescriptor},
};

/// A constraint that enforces `X != Y`.
///
/// In the N-Queens instance this is the "different column" rule for one
/// pair of rows.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint {
    vars: [Var; 2],
}

impl NotEqualConstraint {
    pub fn new(a: Var, b: Var) -> Self {
        Self { vars: [a, b] }
    }
}

impl Constraint for NotEqualConstraint {
    fn variables(&self) -> &[Var] {
        &self.vars
    }

    fn satisfied(&self, values: &[Val]) -> bool {
        values[0] != values[1]
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{} != ?{}", self.vars[0].0, self.vars[1].0),
        }
    }
}
