use crate::board::{Val, Var};

pub type ConstraintId = usize;

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A predicate over an ordered tuple of variables and a matching tuple of
/// candidate values.
///
/// Arity is not fixed here, but the propagator and the pairwise consistency
/// check in [`crate::problem::Problem`] assume binary constraints; every
/// constraint shipped by this crate is binary.
pub trait Constraint: std::fmt::Debug {
    /// The variables this constraint ranges over, in tuple order.
    fn variables(&self) -> &[Var];

    /// Evaluates the predicate for one candidate value per variable, in
    /// the same order as [`Constraint::variables`].
    fn satisfied(&self, values: &[Val]) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;
}
