//! Simulation handle shared with C callers.

use crate::automaton::grid::{Grid, SIZE};
use crate::automaton::levels::Level;
use crate::automaton::recursive::RecursiveSimulation;

/// A recursive simulation owned by a C caller.
pub struct State {
    pub simulation: RecursiveSimulation,
}

impl State {
    /// Seed level 0 with `seed` and size the level map for `steps` generations.
    pub fn new(seed: Grid, steps: usize) -> Self {
        State {
            simulation: RecursiveSimulation::new(&seed, steps, 1),
        }
    }

    /// Generations completed so far.
    pub fn generation(&self) -> u64 {
        self.simulation.generation() as u64
    }

    /// Bug state at a level and cell, or `None` when any coordinate is out of range.
    pub fn cell(&self, level: Level, row: usize, col: usize) -> Option<bool> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        self.simulation
            .levels()
            .get(level)
            .map(|grid| grid.get(row, col))
    }
}
