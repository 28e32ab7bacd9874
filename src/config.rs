//! Solver configuration, loaded from TOML and overridden from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::automaton::grid::Grid;
use crate::error::Result;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Seed grid file.
    pub input: PathBuf,
    /// Generations for the recursive run.
    pub steps: usize,
    /// Rayon threads for level stepping. 0 is treated as 1.
    pub threads: usize,
    /// Print every populated level after the recursive run.
    pub dump_levels: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("inputs/input24.txt"),
            steps: 200,
            threads: 1,
            dump_levels: false,
        }
    }
}

impl SolverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse the seed grid named by `input`.
    pub fn read_seed(&self) -> Result<Grid> {
        fs::read_to_string(&self.input)?.parse()
    }
}
