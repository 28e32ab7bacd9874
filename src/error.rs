//! Error types for loading seeds and configuration.

use thiserror::Error;

/// Main error type for bug_automata operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Seed text is not exactly 5 rows of 5 cells.
    #[error("seed must be 5x5, found {rows} rows (row length {cols})")]
    Shape { rows: usize, cols: usize },

    /// A character other than `#`, `.` or `?`.
    #[error("invalid cell {ch:?} at row {row}, col {col}")]
    InvalidCell { ch: char, row: usize, col: usize },

    /// Reading an input or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `SolverConfig`.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for bug_automata operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
