//! Settings shared by the `arena` and `magic-chess` binaries.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bot::Difficulty;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "magic-chess.toml";

/// Every field falls back to its default when absent from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Profile name used by the terminal front end
    pub username: String,
    /// JSON ledger holding profiles, games and achievements
    pub store_path: PathBuf,
    /// Pause before the bot answers, for pacing only
    pub bot_delay_ms: u64,
    pub default_difficulty: Difficulty,
    /// Fixed RNG seed; fresh entropy when unset
    pub seed: Option<u64>,
    /// Match runner: plies before a game is called a draw
    pub max_plies: u32,
    /// Match runner: games per match
    pub games: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: "Player".to_string(),
            store_path: PathBuf::from("magic_chess_ledger.json"),
            bot_delay_ms: 500,
            default_difficulty: Difficulty::default(),
            seed: None,
            max_plies: 400,
            games: 10,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// The random source for bots: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
