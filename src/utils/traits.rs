use crate::error::Result;
use crate::{LiveSet, Seed};

/// Game engine for Game of Life on an unbounded grid.
pub trait Engine {
    /// Create an engine whose generation 0 is `seed`.
    fn from_seed(seed: &Seed) -> Self
    where
        Self: Sized;

    /// Create an engine from a `rows x cols` box of random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    fn random(rows: usize, cols: usize, fill_rate: f64, seed: Option<u64>) -> Result<Self>
    where
        Self: Sized,
    {
        Seed::random(rows, cols, fill_rate, seed).map(|s| Self::from_seed(&s))
    }

    /// Parse RLE format into the engine.
    fn from_rle(data: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        Seed::from_rle(data).map(|s| Self::from_seed(&s))
    }

    /// Advance the field by `generations` steps.
    fn update(&mut self, generations: u64);

    /// Owned snapshot of the live cells.
    fn current_state(&self) -> LiveSet;

    /// Bootstrap `(rows, cols)` of the seed.
    fn dimensions(&self) -> (usize, usize);

    /// Number of generations computed since construction.
    fn generation(&self) -> u64;

    /// Total number of alive cells in the field.
    fn population(&self) -> usize {
        self.current_state().len()
    }

    /// Hash of the field's content.
    fn hash(&self) -> u64 {
        self.current_state().fingerprint()
    }

    /// Heap memory used by the engine.
    fn bytes_total(&self) -> usize;

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String {
        format!(
            "Generation: {}\nPopulation: {}\n",
            self.generation(),
            self.population()
        )
    }
}
