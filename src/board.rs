//! The assignment model shared by every solving component.
//!
//! A [`Board`] is a complete assignment: position `r` (a [`Var`], the row)
//! holds a [`Val`] (the column) in `[0, N)`. [`Board::conflicts`] is the
//! single source of truth for correctness and for fitness; every engine in
//! the crate evaluates candidate states through it and nothing else.

use rand::Rng;
use serde::Serialize;

/// A variable: a row index in `[0, N)`. Identity is positional and fixed
/// once the problem instance is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Var(pub usize);

/// A candidate value: a column index in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Val(pub usize);

/// A complete assignment of one column per row.
///
/// A board is *not* required to be conflict-free; local and population
/// search move through boards with positive conflict counts all the time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board(Vec<Val>);

impl Board {
    pub fn new(columns: Vec<Val>) -> Self {
        Self(columns)
    }

    /// Draws every position uniformly from `[0, n)` using the injected
    /// random source.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self((0..n).map(|_| Val(rng.gen_range(0..n))).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn value(&self, row: Var) -> Val {
        self.0[row.0]
    }

    pub fn columns(&self) -> &[Val] {
        &self.0
    }

    /// Returns a copy of this board with `row` moved to `col`.
    pub fn with_move(&self, row: Var, col: Val) -> Self {
        let mut columns = self.0.clone();
        columns[row.0] = col;
        Self(columns)
    }

    /// Counts the unordered row pairs in violation: same column, or same
    /// diagonal (`|c1 - c2| == |r1 - r2|`). O(N²), pure, deterministic.
    pub fn conflicts(&self) -> u32 {
        let mut count = 0;
        for r1 in 0..self.0.len() {
            for r2 in (r1 + 1)..self.0.len() {
                let (c1, c2) = (self.0[r1].0, self.0[r2].0);
                if c1 == c2 || c1.abs_diff(c2) == r2 - r1 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Fitness for the population engine: negated conflict count, so that
    /// higher is better.
    pub fn fitness(&self) -> i64 {
        -i64::from(self.conflicts())
    }

    /// The largest conflict count any board of size `n` can reach: one per
    /// unordered row pair.
    pub fn max_conflicts(n: usize) -> u32 {
        (n * n.saturating_sub(1) / 2) as u32
    }

    /// Renders the board as a `Q`/`.` grid, one row per line.
    pub fn render(&self) -> String {
        let n = self.0.len();
        let mut out = String::with_capacity(n * (2 * n + 1));
        for row in 0..n {
            for col in 0..n {
                out.push(if self.0[row] == Val(col) { 'Q' } else { '.' });
                if col + 1 < n {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}
