//! C FFI layer.
//!
//! This module exports C ABI functions for use from C or LuaJIT FFI.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.
//! Grids cross the boundary as 25 bytes in row-major order, nonzero = bug.

pub mod levels;
pub mod lifecycle;
pub mod solve;

pub use levels::{ba_get_cell, ba_live_count, ba_step};
pub use lifecycle::{ba_create, ba_destroy, ba_get_budget, ba_get_generation};
pub use solve::{ba_simulate_flat, ba_simulate_recursive};

use crate::automaton::grid::{Grid, CELLS};

/// Largest step budget accepted across the ABI.
///
/// The level map holds `2 * steps + 1` grids, allocated up front.
pub const MAX_STEPS: u32 = 100_000;

/// Convert a caller's step budget, or `None` if it exceeds [`MAX_STEPS`].
fn step_budget(steps: u32) -> Option<usize> {
    (steps <= MAX_STEPS).then_some(steps as usize)
}

/// Read a 25-byte grid.
///
/// # Safety
/// - `cells` must be non-null and point to at least 25 readable bytes
unsafe fn read_grid(cells: *const u8) -> Grid {
    let bytes = &*(cells as *const [u8; CELLS]);
    Grid::from_bytes(bytes)
}
