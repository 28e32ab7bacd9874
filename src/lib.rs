//! Bug Automata - Recursive Bug Life Library
//!
//! Simulates bugs on a 5x5 grid under two topologies: a flat grid run until
//! a layout repeats, and an infinitely nested grid where the center cell of
//! every level holds the next level down.
//!
//! This library also provides a C ABI in `ffi`.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{simulate_flat, simulate_recursive, Fingerprint, Grid, LevelMap};
pub use config::SolverConfig;
pub use error::{Error, Result};
