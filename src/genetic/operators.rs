//! Genetic operators over ranked populations of boards.

use rand::Rng;

use crate::board::{Board, Val, Var};

/// Tournament-of-2 among the elite: two distinct individuals drawn
/// uniformly from the fittest `elite_size` entries of `ranked` (ascending
/// by conflicts), returning the fitter of the pair.
pub(crate) fn tournament<'a, R: Rng>(
    ranked: &'a [(Board, u32)],
    elite_size: usize,
    rng: &mut R,
) -> &'a Board {
    let pool = elite_size.min(ranked.len());
    let picks = rand::seq::index::sample(rng, pool, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if ranked[a].1 <= ranked[b].1 {
        &ranked[a].0
    } else {
        &ranked[b].0
    }
}

/// Single-point crossover: parent A's prefix up to `cut`, parent B's
/// suffix from `cut` onward. A cut of zero copies parent B outright.
pub(crate) fn crossover_at(a: &Board, b: &Board, cut: usize) -> Board {
    let columns = a.columns()[..cut]
        .iter()
        .chain(&b.columns()[cut..])
        .copied()
        .collect();
    Board::new(columns)
}

pub(crate) fn single_point_crossover<R: Rng>(a: &Board, b: &Board, rng: &mut R) -> Board {
    crossover_at(a, b, rng.gen_range(0..a.len()))
}

/// Replaces one uniformly chosen position with a different uniformly
/// chosen value, so a triggered mutation always changes exactly one
/// position. A 1x1 board has no alternative value and is left alone.
pub(crate) fn mutate<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.len();
    if n < 2 {
        return;
    }
    let row = Var(rng.gen_range(0..n));
    let offset = rng.gen_range(1..n);
    let col = Val((board.value(row).0 + offset) % n);
    *board = board.with_move(row, col);
}
