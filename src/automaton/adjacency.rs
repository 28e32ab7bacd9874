//! Neighbor counting for the two grid topologies.
//!
//! Both topologies use the 4-neighborhood (up, right, down, left). The flat
//! topology stops at the grid edge. The recursive topology continues across
//! levels: edge cells border the containing level, and the four cells around
//! the center border a whole edge of the contained level.

use super::grid::{Grid, CENTER, SIZE};
use super::levels::{Level, LevelMap};

/// Orthogonal directions as (row, col) offsets: up, right, down, left.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Cell of the containing level reached by stepping off each edge.
const OUTER: [usize; 4] = [7, 13, 17, 11];

/// Edge of the contained level reached by stepping into the center.
const INNER: [[usize; SIZE]; 4] = [
    [20, 21, 22, 23, 24], // from 17, moving up: bottom row
    [0, 5, 10, 15, 20],   // from 11, moving right: left column
    [0, 1, 2, 3, 4],      // from 7, moving down: top row
    [4, 9, 14, 19, 24],   // from 13, moving left: right column
];

static EMPTY: Grid = Grid::empty();

/// A neighbor-count strategy used by [`super::stepping::step_with`].
pub trait Adjacency {
    /// Whether the cell at `idx` carries state. Non-tiles are never evaluated
    /// and always come out dead.
    fn is_tile(&self, _idx: usize) -> bool {
        true
    }

    /// Number of live neighbors of the cell at `idx`.
    fn live_neighbors(&self, idx: usize) -> u8;
}

/// Count live neighbors within a single grid, treating the outside as dead.
pub fn flat_neighbors(grid: &Grid, idx: usize) -> u8 {
    let row = (idx / SIZE) as isize;
    let col = (idx % SIZE) as isize;

    DIRECTIONS
        .iter()
        .filter(|(dr, dc)| grid.alive_at(row + dr, col + dc))
        .count() as u8
}

/// Count live neighbors of `idx` in `grid`, following edges out to `outer`
/// (the containing level) and the center in to `inner` (the contained level).
///
/// Panics if `idx` is the center cell, which has no neighbors of its own.
pub fn recursive_neighbors(grid: &Grid, outer: &Grid, inner: &Grid, idx: usize) -> u8 {
    assert_ne!(idx, CENTER, "the center cell is the nested level");

    let row = (idx / SIZE) as isize;
    let col = (idx % SIZE) as isize;
    let mut count = 0;

    for (dir, (dr, dc)) in DIRECTIONS.iter().enumerate() {
        let nr = row + dr;
        let nc = col + dc;

        if !super::grid::in_bounds(nr, nc) {
            count += u8::from(outer.is_alive(OUTER[dir]));
        } else if nr as usize * SIZE + nc as usize == CENTER {
            count += inner.count_at(&INNER[dir]);
        } else {
            count += u8::from(grid.alive_at(nr, nc));
        }
    }

    count
}

/// Strict-boundary 4-neighborhood over one grid.
pub struct Flat<'a> {
    grid: &'a Grid,
}

impl<'a> Flat<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Flat { grid }
    }
}

impl Adjacency for Flat<'_> {
    fn live_neighbors(&self, idx: usize) -> u8 {
        flat_neighbors(self.grid, idx)
    }
}

/// Cross-level 4-neighborhood for one level of a [`LevelMap`].
///
/// Levels absent from the map contribute no live neighbors.
pub struct Recursive<'a> {
    grid: &'a Grid,
    outer: &'a Grid,
    inner: &'a Grid,
}

impl<'a> Recursive<'a> {
    pub fn new(grid: &'a Grid, outer: Option<&'a Grid>, inner: Option<&'a Grid>) -> Self {
        Recursive {
            grid,
            outer: outer.unwrap_or(&EMPTY),
            inner: inner.unwrap_or(&EMPTY),
        }
    }

    /// View of `level` and its two neighbors in `levels`.
    pub fn at(levels: &'a LevelMap, level: Level) -> Self {
        Recursive::new(
            levels.get(level).unwrap_or(&EMPTY),
            levels.get(level - 1),
            levels.get(level + 1),
        )
    }
}

impl Adjacency for Recursive<'_> {
    fn is_tile(&self, idx: usize) -> bool {
        idx != CENTER
    }

    fn live_neighbors(&self, idx: usize) -> u8 {
        recursive_neighbors(self.grid, self.outer, self.inner, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::{index_of, CELLS};

    fn grid_with(indices: &[usize]) -> Grid {
        let mut grid = Grid::empty();
        for &idx in indices {
            grid.set_index(idx, true);
        }
        grid
    }

    #[test]
    fn test_flat_neighbors_cross() {
        let grid = grid_with(&[7, 11, 13, 17]);
        assert_eq!(flat_neighbors(&grid, CENTER), 4);
        assert_eq!(flat_neighbors(&grid, 6), 2);
        assert_eq!(flat_neighbors(&grid, 0), 0);
    }

    #[test]
    fn test_flat_neighbors_no_wraparound() {
        // Opposite corners and edges must not see each other.
        let grid = grid_with(&[4, 20, 24, 14]);
        assert_eq!(flat_neighbors(&grid, 0), 0);
        assert_eq!(flat_neighbors(&grid, 10), 0);
        assert_eq!(flat_neighbors(&grid, 19), 2);
    }

    #[test]
    fn test_recursive_edges_reach_outer_level() {
        let outer = grid_with(&[7, 11, 13, 17]);
        let grid = Grid::empty();
        let inner = Grid::empty();

        // Corners touch two edges, so two outer cells.
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 0), 2);
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 4), 2);
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 20), 2);
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 24), 2);

        // Middle of each edge touches one.
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 2), 1);
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 10), 1);

        // Interior cells never look outward.
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 6), 0);
    }

    #[test]
    fn test_recursive_center_neighbors_reach_inner_edge() {
        let grid = Grid::empty();
        let outer = Grid::empty();

        let top = grid_with(&[0, 1, 2, 3, 4]);
        assert_eq!(recursive_neighbors(&grid, &outer, &top, 7), 5);
        assert_eq!(recursive_neighbors(&grid, &outer, &top, 17), 0);
        // Left and right columns each include one top-row corner.
        assert_eq!(recursive_neighbors(&grid, &outer, &top, 11), 1);
        assert_eq!(recursive_neighbors(&grid, &outer, &top, 13), 1);

        let bottom = grid_with(&[20, 21, 22, 23, 24]);
        assert_eq!(recursive_neighbors(&grid, &outer, &bottom, 17), 5);
        assert_eq!(recursive_neighbors(&grid, &outer, &bottom, 7), 0);

        let left = grid_with(&[0, 5, 10, 15, 20]);
        assert_eq!(recursive_neighbors(&grid, &outer, &left, 11), 5);
        assert_eq!(recursive_neighbors(&grid, &outer, &left, 13), 0);

        let right = grid_with(&[4, 9, 14, 19, 24]);
        assert_eq!(recursive_neighbors(&grid, &outer, &right, 13), 5);
    }

    #[test]
    fn test_recursive_counts_up_to_eight() {
        let grid = grid_with(&[2, 6, 8]);
        let outer = Grid::empty();
        let inner = grid_with(&[0, 1, 2, 3, 4]);
        assert_eq!(recursive_neighbors(&grid, &outer, &inner, 7), 8);
    }

    #[test]
    fn test_recursive_ignores_center_value() {
        let grid = grid_with(&[CENTER]);
        let empty = Grid::empty();
        for idx in [7, 11, 13, 17] {
            assert_eq!(recursive_neighbors(&grid, &empty, &empty, idx), 0);
        }
    }

    #[test]
    #[should_panic]
    fn test_recursive_center_panics() {
        let empty = Grid::empty();
        recursive_neighbors(&empty, &empty, &empty, CENTER);
    }

    #[test]
    fn test_missing_levels_are_dead() {
        let grid = Grid::from_cells([true; CELLS]);
        let view = Recursive::new(&grid, None, None);
        // Top-left corner: right and down in-grid only.
        assert_eq!(view.live_neighbors(index_of(0, 0)), 2);
        assert!(!view.is_tile(CENTER));
        assert!(Flat::new(&grid).is_tile(CENTER));
    }
}
