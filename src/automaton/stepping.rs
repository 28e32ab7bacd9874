//! Generation stepping with the bug life rules.

use super::adjacency::{Adjacency, Flat};
use super::grid::{Grid, CELLS};

/// Apply the bug life rules to one cell.
///
/// - Survival: a bug with exactly 1 neighbor lives on
/// - Birth: an empty cell with 1 or 2 neighbors becomes infested
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 1) | (false, 1..=2))
}

/// Step one grid forward by one generation.
///
/// Every neighbor count is taken from `current` (through `adjacency`), and
/// results go to a fresh grid. Cells that are not tiles come out dead.
pub fn step_with<A: Adjacency + ?Sized>(current: &Grid, adjacency: &A) -> Grid {
    let mut next = Grid::empty();

    for idx in 0..CELLS {
        if !adjacency.is_tile(idx) {
            continue;
        }

        let neighbors = adjacency.live_neighbors(idx);
        next.set_index(idx, next_state(current.is_alive(idx), neighbors));
    }

    next
}

/// Step a standalone grid with the strict-boundary 4-neighborhood.
pub fn step_flat(grid: &Grid) -> Grid {
    step_with(grid, &Flat::new(grid))
}
