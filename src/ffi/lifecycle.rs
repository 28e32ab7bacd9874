//! State creation, destruction, and generation queries.

use super::{read_grid, step_budget};
use crate::state::State;

/// Creates a recursive simulation seeded with `cells` and sized for `steps`
/// generations, and returns an opaque pointer.
///
/// # Safety
/// - `cells` must point to 25 bytes, or be null
/// - The returned pointer must eventually be freed with `ba_destroy()`.
///
/// # Returns
/// A pointer to a new State, or null if `cells` is null or `steps` is above
/// [`MAX_STEPS`](super::MAX_STEPS).
#[no_mangle]
pub unsafe extern "C" fn ba_create(cells: *const u8, steps: u32) -> *mut State {
    if cells.is_null() {
        return std::ptr::null_mut();
    }
    let Some(steps) = step_budget(steps) else {
        return std::ptr::null_mut();
    };

    let state = Box::new(State::new(read_grid(cells), steps));
    Box::into_raw(state)
}

/// Destroys a simulation state and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ba_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ba_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter from a state.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ba_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the step budget a state was created with.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The budget passed to `ba_create()`, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ba_get_budget(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).simulation.steps() as u64
}
