//! Recursive levels: a contiguous range of grids keyed by nesting depth.
//!
//! Level 0 is the seed. Negative levels contain level 0, positive levels are
//! nested inside it. Every level the simulation can reach is allocated up
//! front, so stepping never adds levels.
//!
//! Core invariant: a step reads only the current generation and writes a
//! brand-new map. Levels are independent given that snapshot, so they are
//! computed in parallel.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rayon::prelude::*;

use super::adjacency::Recursive;
use super::grid::Grid;
use super::stepping::step_with;

/// Nesting depth relative to the seed.
pub type Level = i32;

/// Grids for every level in `min..=max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelMap {
    levels: HashMap<Level, Grid>,
    min: Level,
    max: Level,
}

impl LevelMap {
    /// Allocate levels `-steps..=steps` as empty and place `seed` at level 0.
    ///
    /// Each step can spread bugs at most one level outward and one inward,
    /// so this covers everything `steps` generations can touch. The seed's
    /// center cell is cleared.
    pub fn with_range(seed: &Grid, steps: usize) -> Self {
        let reach = Level::try_from(steps)
            .unwrap_or_else(|_| panic!("step budget {steps} exceeds the level range"));

        let mut levels = HashMap::with_capacity(2 * steps + 1);
        for level in -reach..=reach {
            levels.insert(level, Grid::empty());
        }
        levels.insert(0, seed.without_center());

        LevelMap {
            levels,
            min: -reach,
            max: reach,
        }
    }

    /// Grid at `level`, or `None` outside the allocated range.
    pub fn get(&self, level: Level) -> Option<&Grid> {
        self.levels.get(&level)
    }

    /// Replace the grid at an allocated level. The center cell is cleared.
    ///
    /// Panics if `level` is outside the allocated range.
    pub fn insert(&mut self, level: Level, grid: Grid) {
        assert!(
            self.range().contains(&level),
            "level {level} is outside {}..={}",
            self.min,
            self.max
        );
        self.levels.insert(level, grid.without_center());
    }

    /// Allocated levels, outermost to innermost.
    pub fn range(&self) -> RangeInclusive<Level> {
        self.min..=self.max
    }

    /// Number of allocated levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if no level is allocated.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels in ascending order, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &Grid)> + '_ {
        self.range()
            .filter_map(move |level| self.levels.get(&level).map(|grid| (level, grid)))
    }

    /// Total bugs across all levels.
    pub fn live_count(&self) -> usize {
        self.levels.values().map(Grid::live_count).sum()
    }

    /// Compute the next generation of every level.
    pub fn step(&self) -> LevelMap {
        let levels = self
            .range()
            .into_par_iter()
            .map(|level| {
                let current = &self.levels[&level];
                (level, step_with(current, &Recursive::at(self, level)))
            })
            .collect();

        LevelMap {
            levels,
            min: self.min,
            max: self.max,
        }
    }
}

/// Dump every level that holds bugs, outermost first.
pub fn render_levels(levels: &LevelMap) -> String {
    let mut out = String::new();
    for (level, grid) in levels.iter().filter(|(_, grid)| !grid.is_empty()) {
        out.push_str(&format!("Level: {level}\n"));
        out.push_str(&grid.render_level());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::{CELLS, CENTER};

    fn seed() -> Grid {
        "....#\n#..#.\n#..##\n..#..\n#....".parse().unwrap()
    }

    #[test]
    fn test_with_range_allocates_all_levels() {
        let levels = LevelMap::with_range(&seed(), 10);
        assert_eq!(levels.len(), 21);
        assert_eq!(levels.range(), -10..=10);
        assert_eq!(levels.live_count(), 8);
        assert!(levels.get(-10).unwrap().is_empty());
        assert!(levels.get(10).unwrap().is_empty());
        assert!(levels.get(11).is_none());
    }

    #[test]
    fn test_with_range_zero_steps() {
        let levels = LevelMap::with_range(&seed(), 0);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels.get(0), Some(&seed()));
    }

    #[test]
    fn test_seed_center_is_cleared() {
        let full = Grid::from_cells([true; CELLS]);
        let levels = LevelMap::with_range(&full, 1);
        assert!(!levels.get(0).unwrap().is_alive(CENTER));
        assert_eq!(levels.live_count(), 24);
    }

    #[test]
    #[should_panic]
    fn test_insert_outside_range_panics() {
        let mut levels = LevelMap::with_range(&Grid::empty(), 2);
        levels.insert(3, seed());
    }

    #[test]
    fn test_step_keeps_range() {
        let levels = LevelMap::with_range(&seed(), 3);
        let next = levels.step();
        assert_eq!(next.range(), levels.range());
        assert_eq!(next.len(), 7);
        assert_eq!(next.live_count(), 27);
    }

    #[test]
    fn test_step_never_fills_center() {
        let full = Grid::from_cells([true; CELLS]);
        let mut levels = LevelMap::with_range(&full, 4);
        for _ in 0..4 {
            levels = levels.step();
            assert!(levels.iter().all(|(_, grid)| !grid.is_alive(CENTER)));
        }
    }

    #[test]
    fn test_step_reads_previous_generation_only() {
        // One bug on level 1's top row. Level 0 and level 2 must both react
        // to level 1 as it was before the step.
        let mut levels = LevelMap::with_range(&Grid::empty(), 2);
        let mut inner = Grid::empty();
        inner.set(0, 2, true);
        levels.insert(1, inner);

        let next = levels.step();
        // Level 0 cell 7 sees one bug on the inner top row: born.
        assert!(next.get(0).unwrap().is_alive(7));
        // The lone bug has no neighbors: dies.
        assert!(!next.get(1).unwrap().is_alive(2));
        // Its in-grid neighbors see one bug each: born.
        assert!(next.get(1).unwrap().is_alive(1));
        assert!(next.get(1).unwrap().is_alive(3));
        assert!(next.get(1).unwrap().is_alive(7));
        // Level 2 sees level 1's cell 7, which was empty before the step.
        assert!(next.get(2).unwrap().is_empty());
    }

    #[test]
    fn test_render_levels_skips_empty() {
        let levels = LevelMap::with_range(&seed(), 2);
        let dump = render_levels(&levels);
        assert!(dump.starts_with("Level: 0\n....#\n#..#.\n#.?##\n"));
        assert!(!dump.contains("Level: 1"));
    }
}
