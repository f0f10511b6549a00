//! Single-state local search over complete assignments: best-improvement
//! hill climbing and simulated annealing.
//!
//! The two deliberately disagree about neighborhood size (hill climbing
//! scans every single-move neighbor per step while annealing samples one);
//! that asymmetry is part of the observable trial statistics.

pub mod annealing;
pub mod hill;
