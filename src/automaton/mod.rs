//! Core automaton logic and grid operations.
//!
//! This module contains the bug life rules, the flat and recursive
//! neighborhoods, and the two simulations built on them.
//! The FFI layer in `ffi/` calls these functions.

pub mod adjacency;
pub mod flat;
pub mod grid;
pub mod levels;
pub mod recursive;
pub mod stepping;

pub use adjacency::{flat_neighbors, recursive_neighbors, Adjacency, Flat, Recursive};
pub use flat::{run_until_repeat, simulate_flat, FlatRun};
pub use grid::{in_bounds, index_of, Fingerprint, Grid, CELLS, CENTER, SIZE};
pub use levels::{render_levels, Level, LevelMap};
pub use recursive::{simulate_recursive, RecursiveSimulation};
pub use stepping::{next_state, step_flat, step_with};
