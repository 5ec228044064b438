mod config;
mod format_int;
mod pacer;
mod parse_rle;
mod traits;

pub use config::{Config, ConfigError, RandomFill, Viewport, MAX_VIEWPORT_CELLS};
pub use format_int::NiceInt;
pub use pacer::GenerationPacer;
pub use parse_rle::parse_rle;
pub use traits::Engine;
