use im::OrdSet;

use crate::board::{Val, Var};

/// An ordered candidate-value set for one variable.
pub type Domain = OrdSet<Val>;

/// Per-variable candidate sets.
///
/// A store starts full (`[0, N)` for every variable), shrinks monotonically
/// under propagation, and never grows during a solve. Backed by persistent
/// collections, so snapshotting a store is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    n: usize,
    domains: im::HashMap<Var, Domain>,
}

impl DomainStore {
    /// A store with every variable's domain set to the full `[0, n)` range.
    pub fn full(n: usize) -> Self {
        let full: Domain = (0..n).map(Val).collect();
        Self {
            n,
            domains: (0..n).map(|i| (Var(i), full.clone())).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn candidates(&self, var: Var) -> &Domain {
        self.domains.get(&var).unwrap()
    }

    /// Removes `val` from `var`'s domain; returns whether it was present.
    pub fn remove(&mut self, var: Var, val: Val) -> bool {
        self.domains.get_mut(&var).unwrap().remove(&val).is_some()
    }

    pub fn domain_len(&self, var: Var) -> usize {
        self.candidates(var).len()
    }

    pub fn is_empty_domain(&self, var: Var) -> bool {
        self.candidates(var).is_empty()
    }
}
