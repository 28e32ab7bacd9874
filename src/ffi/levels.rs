//! Stepping and level queries on a live simulation.

use crate::state::State;

/// Advances the simulation by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if a generation was computed, 1 if the step budget is exhausted or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ba_step(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    if state.simulation.step() {
        0
    } else {
        1
    }
}

/// Counts bugs across every level.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The bug count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ba_live_count(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).simulation.live_count() as u64
}

/// Gets the state of a cell (0 = empty, 1 = bug).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of range, null pointer, or empty; 1 if a bug is present.
#[no_mangle]
pub unsafe extern "C" fn ba_get_cell(ptr: *const State, level: i32, row: u8, col: u8) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let state = &*ptr;
    match state.cell(level, row as usize, col as usize) {
        Some(true) => 1,
        _ => 0,
    }
}
