//! The 5x5 bug grid: cell addressing, parsing, rendering and fingerprints.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Side length of a grid.
pub const SIZE: usize = 5;

/// Number of cells in a grid.
pub const CELLS: usize = SIZE * SIZE;

/// Flat index of the center cell, which holds the nested level in recursive mode.
pub const CENTER: usize = 12;

/// 25-bit encoding of a grid, bit `i` set iff cell `i` holds a bug.
pub type Fingerprint = u32;

/// One 5x5 layer of bugs. Cells are stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [bool; CELLS],
}

/// Calculate the linear index for a row/column pair.
///
/// Panics if either coordinate is outside `0..5`.
#[inline]
pub fn index_of(row: usize, col: usize) -> usize {
    assert!(
        row < SIZE && col < SIZE,
        "cell ({row}, {col}) is outside the 5x5 grid"
    );
    row * SIZE + col
}

/// Check if signed coordinates are within grid bounds.
#[inline]
pub fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < SIZE as isize && col >= 0 && col < SIZE as isize
}

impl Grid {
    /// A grid with no bugs.
    pub const fn empty() -> Self {
        Grid {
            cells: [false; CELLS],
        }
    }

    /// Wrap 25 row-major cells.
    pub const fn from_cells(cells: [bool; CELLS]) -> Self {
        Grid { cells }
    }

    /// Build a grid from one byte per cell, nonzero meaning a bug.
    pub fn from_bytes(bytes: &[u8; CELLS]) -> Self {
        let mut grid = Grid::empty();
        for (cell, &byte) in grid.cells.iter_mut().zip(bytes) {
            *cell = byte != 0;
        }
        grid
    }

    /// Rebuild a grid from its fingerprint. Bits above 24 are rejected.
    pub fn from_fingerprint(fingerprint: Fingerprint) -> Self {
        assert!(
            fingerprint >> CELLS == 0,
            "fingerprint {fingerprint:#x} has bits above the 25th cell"
        );
        let mut grid = Grid::empty();
        for (idx, cell) in grid.cells.iter_mut().enumerate() {
            *cell = fingerprint & (1u32 << idx) != 0;
        }
        grid
    }

    /// Bug state at a flat index. Panics if `idx >= 25`.
    #[inline]
    pub fn is_alive(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    /// Bug state at a row and column. Panics if either is outside `0..5`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[index_of(row, col)]
    }

    /// Set a cell by row and column. Panics if either is outside `0..5`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[index_of(row, col)] = alive;
    }

    /// Set a cell by flat index. Panics if `idx >= 25`.
    #[inline]
    pub fn set_index(&mut self, idx: usize, alive: bool) {
        self.cells[idx] = alive;
    }

    /// Alive state at signed coordinates; anything off the grid is dead.
    #[inline]
    pub fn alive_at(&self, row: isize, col: isize) -> bool {
        in_bounds(row, col) && self.cells[row as usize * SIZE + col as usize]
    }

    /// Number of bugs on the grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Count bugs among the given flat indices.
    pub fn count_at(&self, indices: &[usize]) -> u8 {
        indices.iter().filter(|&&idx| self.cells[idx]).count() as u8
    }

    /// True if no cell holds a bug.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Biodiversity rating: cell `i` contributes `2^i`.
    pub fn fingerprint(&self) -> Fingerprint {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .fold(0, |acc, (idx, _)| acc | (1u32 << idx))
    }

    /// Copy of this grid with the center cell cleared.
    pub fn without_center(&self) -> Self {
        let mut grid = *self;
        grid.cells[CENTER] = false;
        grid
    }

    /// Render as a recursive level, showing the center as `?`.
    pub fn render_level(&self) -> String {
        let mut out = String::with_capacity(CELLS + SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                let idx = row * SIZE + col;
                out.push(match (idx == CENTER, self.cells[idx]) {
                    (true, _) => '?',
                    (false, true) => '#',
                    (false, false) => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse 5 lines of 5 characters: `#` is a bug, `.` empty.
    /// `?` is accepted as an empty center placeholder.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.trim_end().lines().collect();
        if rows.len() != SIZE {
            return Err(Error::Shape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |r| r.chars().count()),
            });
        }

        let mut grid = Grid::empty();
        for (row, line) in rows.iter().enumerate() {
            let cols = line.chars().count();
            if cols != SIZE {
                return Err(Error::Shape { rows: SIZE, cols });
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' => grid.set(row, col, true),
                    '.' | '?' => {}
                    _ => return Err(Error::InvalidCell { ch, row, col }),
                }
            }
        }

        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
