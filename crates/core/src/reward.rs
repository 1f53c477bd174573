//! Reward placement - uniform draw over the free cells.
//!
//! Placement computes the explicit set of cells not covered by the snake and
//! draws one uniformly. Retry-on-collision sampling would also satisfy the
//! "never on the snake" invariant, but its worst case on a nearly full board
//! is unbounded; the explicit set difference is O(grid) and total.

use tui_snake_types::Cell;

use crate::rng::RandomSource;

/// Pick a reward cell uniformly among all cells the snake does not occupy.
///
/// Returns `None` when the snake covers the whole grid. Callers treat that as
/// a no-op and keep the previous reward; it is a degenerate outcome, not a
/// failure.
pub fn place_reward(
    rows: u16,
    cols: u16,
    snake: &[Cell],
    rng: &mut impl RandomSource,
) -> Option<Cell> {
    let cols_usize = cols as usize;
    let total = rows as usize * cols_usize;

    // Flat occupancy mask, row-major.
    let mut occupied = vec![false; total];
    for &(r, c) in snake {
        occupied[r as usize * cols_usize + c as usize] = true;
    }

    let free: Vec<Cell> = (0..total)
        .filter(|&i| !occupied[i])
        .map(|i| ((i / cols_usize) as u16, (i % cols_usize) as u16))
        .collect();

    if free.is_empty() {
        return None;
    }
    let pick = rng.next_range(free.len() as u32) as usize;
    Some(free[pick])
}
