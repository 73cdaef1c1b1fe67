//! Serializable game configuration.
//!
//! ```toml
//! players = ["pobi", "crong", "jk"]
//! products = ["5000", "꽝", "3000"]
//! height = 5
//! seed = 42        # optional; omit for a fresh random ladder
//! ```

use std::path::{Path, PathBuf};

use ladder_core::{Height, Ladder, LadderError, RandomBooleanSource, RungPatternGenerator};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::game::LadderGame;
use crate::player::Players;
use crate::product::Products;

/// Errors from loading or applying a game config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid game: {0}")]
    Game(#[from] LadderError),
}

/// Everything needed to set up (and, with a seed, reproduce) one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub products: Vec<String>,
    pub height: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate names, generate the ladder, and assemble the game.
    pub fn build_game(&self) -> Result<LadderGame, ConfigError> {
        let players = Players::from_names(self.players.as_slice())?;
        let products = Products::from_names(self.products.as_slice())?;
        LadderGame::validate(&players, &products)?;
        let height = Height::new(self.height)?;

        let source = match self.seed {
            Some(seed) => RandomBooleanSource::from_seed(seed),
            None => RandomBooleanSource::from_entropy(),
        };
        let mut generator = RungPatternGenerator::new(source);
        let ladder = Ladder::of(height, players.len(), &mut generator)?;
        info!(
            players = players.len(),
            height = ladder.height(),
            seed = ?self.seed,
            "built ladder game"
        );

        Ok(LadderGame::new(ladder, players, products)?)
    }
}
