//! External configuration loader.
//!
//! Reads `config.toml` (or the path given on the command line). A missing
//! file yields the defaults; every key inside the file is optional.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::Deserialize;

use crate::term::{MAX_CELL_HEIGHT, MAX_CELL_WIDTH};
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub size: u8,
    /// `0` picks a random seed at startup.
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub cell_width: u16,
    pub cell_height: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
    /// The terminal binary only logs when this is set.
    pub file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: 0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 7,
            cell_height: 3,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("invalid config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("loading {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        let size = self.game.size;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            bail!("game.size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {size}");
        }
        let (cell_width, cell_height) = (self.display.cell_width, self.display.cell_height);
        if !(1..=MAX_CELL_WIDTH).contains(&cell_width) {
            bail!("display.cell_width must be between 1 and {MAX_CELL_WIDTH}, got {cell_width}");
        }
        if !(1..=MAX_CELL_HEIGHT).contains(&cell_height) {
            bail!("display.cell_height must be between 1 and {MAX_CELL_HEIGHT}, got {cell_height}");
        }
        Ok(())
    }

    /// The configured seed, or a fresh nonzero one from `thread_rng` when it is `0`.
    pub fn resolved_seed(&self) -> u64 {
        if self.game.seed != 0 {
            return self.game.seed;
        }
        let mut rng = rand::thread_rng();
        loop {
            let seed: u64 = rng.gen();
            if seed != 0 {
                return seed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn fixed_seed_is_kept() {
        let config = AppConfig::from_toml("[game]\nseed = 42\n").unwrap();
        assert_eq!(config.resolved_seed(), 42);
    }

    #[test]
    fn random_seed_is_nonzero() {
        let config = AppConfig::default();
        for _ in 0..100 {
            assert_ne!(config.resolved_seed(), 0);
        }
    }

    #[test]
    fn cell_bounds_are_inclusive() {
        let widest = format!("[display]\ncell_width = {MAX_CELL_WIDTH}\ncell_height = {MAX_CELL_HEIGHT}\n");
        assert!(AppConfig::from_toml(&widest).is_ok());
        assert!(AppConfig::from_toml("[display]\ncell_height = 0\n").is_err());
    }
}
