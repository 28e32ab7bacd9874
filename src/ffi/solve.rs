//! One-shot solvers.

use super::{read_grid, step_budget};
use crate::automaton;

/// Runs the flat simulation until a layout repeats.
///
/// # Safety
/// - `cells` must point to 25 bytes, or be null
///
/// # Returns
/// The fingerprint of the first repeated layout, or 0 if `cells` is null.
#[no_mangle]
pub unsafe extern "C" fn ba_simulate_flat(cells: *const u8) -> u32 {
    if cells.is_null() {
        return 0;
    }

    automaton::simulate_flat(&read_grid(cells))
}

/// Runs the recursive simulation for `steps` generations.
///
/// # Safety
/// - `cells` must point to 25 bytes, or be null
///
/// # Returns
/// Total bugs across all levels, or 0 if `cells` is null or `steps` is
/// above [`MAX_STEPS`](super::MAX_STEPS).
#[no_mangle]
pub unsafe extern "C" fn ba_simulate_recursive(cells: *const u8, steps: u32) -> u64 {
    if cells.is_null() {
        return 0;
    }
    let Some(steps) = step_budget(steps) else {
        return 0;
    };

    automaton::simulate_recursive(&read_grid(cells), steps) as u64
}
