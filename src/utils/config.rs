//! Settings of the `sparse_life` driver, read from a YAML file.
//!
//! Every field has a default, so an empty document is a valid config that
//! runs the Gosper glider gun forever at ten generations per second, drawn in
//! its 20x38 seed box.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SeedDefect;
use crate::{patterns, LifeError, Seed};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml { source: serde_yml::Error },

    /// The viewport would not fit in a rendered frame.
    #[error("viewport {rows}x{cols} exceeds {MAX_VIEWPORT_CELLS} cells")]
    Viewport { rows: usize, cols: usize },
}

/// Largest number of cells a [`Viewport`] may cover.
pub const MAX_VIEWPORT_CELLS: usize = 1 << 20;

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Random seed box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomFill {
    pub rows: usize,
    pub cols: usize,
    #[serde(default = "default_fill_rate")]
    pub fill_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Window of the grid printed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub top: i64,
    #[serde(default)]
    pub left: i64,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in pattern, see [`patterns::PATTERNS`].
    pub pattern: Option<String>,
    /// RLE file to start from; takes precedence over everything else.
    pub rle_path: Option<PathBuf>,
    /// Random start; takes precedence over `pattern`.
    pub random: Option<RandomFill>,
    /// Pause between two generations, in milliseconds.
    pub delay_ms: u64,
    /// Stop after this many generations; run forever if absent.
    pub max_generations: Option<u64>,
    /// Print every generation to stdout.
    pub render: bool,
    /// What to print; `None` means the seed box.
    pub viewport: Option<Viewport>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: Some("gosper glider gun".to_owned()),
            rle_path: None,
            random: None,
            delay_ms: 100,
            max_generations: None,
            render: true,
            viewport: None,
        }
    }
}

fn default_fill_rate() -> f64 {
    0.3
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        if let Some(Viewport { rows, cols, .. }) = config.viewport {
            if rows.checked_mul(cols).map_or(true, |n| n > MAX_VIEWPORT_CELLS) {
                return Err(ConfigError::Viewport { rows, cols });
            }
        }
        Ok(config)
    }

    /// Builds the seed named by the config: `rle_path`, then `random`, then `pattern`.
    ///
    /// A config that names no source at all has an absent seed.
    pub fn seed(&self) -> anyhow::Result<Seed> {
        use anyhow::Context;

        if let Some(path) = &self.rle_path {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read RLE file {}", path.display()))?;
            return Seed::from_rle(&data)
                .with_context(|| format!("failed to parse RLE file {}", path.display()));
        }
        if let Some(r) = &self.random {
            return Ok(Seed::random(r.rows, r.cols, r.fill_rate, r.seed)?);
        }
        if let Some(name) = &self.pattern {
            let pattern = patterns::find(name)
                .with_context(|| format!("unknown pattern {name:?}"))?;
            return Ok(pattern.seed()?);
        }
        Err(LifeError::InvalidSeed(SeedDefect::Absent).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full() {
        let yaml = "
pattern: blinker
random:
  rows: 8
  cols: 16
  seed: 7
delay_ms: 20
max_generations: 50
render: false
viewport: { rows: 4, cols: 6, top: -2 }
";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.pattern.as_deref(), Some("blinker"));
        assert_eq!(
            config.random,
            Some(RandomFill {
                rows: 8,
                cols: 16,
                fill_rate: 0.3,
                seed: Some(7),
            })
        );
        assert_eq!(config.delay_ms, 20);
        assert_eq!(config.max_generations, Some(50));
        assert!(!config.render);
        assert_eq!(
            config.viewport,
            Some(Viewport {
                top: -2,
                left: 0,
                rows: 4,
                cols: 6,
            })
        );

        // random wins over pattern
        let seed = config.seed().unwrap();
        assert_eq!(seed.dimensions(), (8, 16));
    }

    #[test]
    fn test_viewport_too_large() {
        for yaml in [
            "viewport: { rows: 18446744073709551615, cols: 18446744073709551615 }",
            "viewport: { rows: 2, cols: 9223372036854775808 }",
            "viewport: { rows: 1025, cols: 1024 }",
        ] {
            assert!(
                matches!(Config::parse(yaml), Err(ConfigError::Viewport { .. })),
                "{yaml}"
            );
        }
        let widest = Config::parse("viewport: { rows: 1, cols: 1048576 }").unwrap();
        assert_eq!(widest.viewport.map(|v| v.cols), Some(MAX_VIEWPORT_CELLS));
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            Config::parse("speed: 3"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn test_seed_sources() {
        let gun = Config::default().seed().unwrap();
        assert_eq!(gun.dimensions(), (20, 38));
        assert_eq!(gun.cells().len(), 36);

        let absent = Config {
            pattern: None,
            ..Config::default()
        };
        let err = absent.seed().unwrap_err();
        assert_eq!(
            err.downcast_ref::<LifeError>(),
            Some(&LifeError::InvalidSeed(SeedDefect::Absent))
        );

        let unknown = Config {
            pattern: Some("spaceship-9000".to_owned()),
            ..Config::default()
        };
        assert!(unknown.seed().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/sparse_life.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
