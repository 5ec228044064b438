//! Error types of the simulation core.
//!
//! Building a seed is the only fallible step: once an engine exists, advancing
//! it cannot fail.

pub type Result<T, E = LifeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] SeedDefect),
}

/// What exactly was wrong with a rejected seed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedDefect {
    #[error("no seed was provided")]
    Absent,

    #[error("seed matrix has no rows")]
    NoRows,

    #[error("row {row} of the seed matrix has no columns")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("seed dimensions must be non-zero")]
    ZeroDimensions,

    #[error("fill rate {0} is outside [0, 1]")]
    FillRate(f64),

    #[error("malformed RLE: {0}")]
    Rle(String),
}
