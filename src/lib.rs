#![warn(clippy::all, clippy::cargo)]

mod coord;
mod engine;
mod error;
mod live_set;
pub mod patterns;
pub mod render;
mod seed;
mod utils;

pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use engine::{next_state, SparseEngine, Transition};
pub use error::{LifeError, Result, SeedDefect};
pub use live_set::LiveSet;
pub use seed::Seed;
pub use utils::{
    parse_rle, Config, ConfigError, Engine, GenerationPacer, NiceInt, RandomFill,
    Viewport, MAX_VIEWPORT_CELLS,
};

pub type DefaultEngine = SparseEngine;
