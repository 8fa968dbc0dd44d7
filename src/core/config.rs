//! Match configuration.
//!
//! `MatchConfig` holds the numbers the rules depend on: the allowed player
//! counts, when a card is burned, and how many tokens win the match. The
//! defaults are the published rules; a TOML file may override them.
//!
//! ```toml
//! min_players = 2
//! max_players = 4
//! burn_below = 4
//!
//! [tokens_to_win]
//! two_players = 7
//! three_players = 5
//! four_players = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems loading or validating a `MatchConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse match config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid match config: {0}")]
    Invalid(String),
}

/// Tokens needed to win, by player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenThresholds {
    pub two_players: u32,
    pub three_players: u32,
    pub four_players: u32,
    /// Used for any other player count.
    pub fallback: u32,
}

impl Default for TokenThresholds {
    fn default() -> Self {
        Self {
            two_players: 7,
            three_players: 5,
            four_players: 4,
            fallback: 5,
        }
    }
}

/// Rules parameters for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub min_players: usize,
    pub max_players: usize,
    /// A card is burned face down when fewer than this many players sit.
    pub burn_below: usize,
    pub tokens_to_win: TokenThresholds,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            burn_below: 4,
            tokens_to_win: TokenThresholds::default(),
        }
    }
}

impl MatchConfig {
    /// Token threshold for the given player count.
    #[must_use]
    pub fn tokens_to_win(&self, player_count: usize) -> u32 {
        let t = &self.tokens_to_win;
        match player_count {
            2 => t.two_players,
            3 => t.three_players,
            4 => t.four_players,
            _ => t.fallback,
        }
    }

    /// Whether a card is burned for this player count.
    #[must_use]
    pub fn burns_card(&self, player_count: usize) -> bool {
        player_count < self.burn_below
    }

    /// Check the configuration is playable with the 16-card deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::Invalid("min_players must be at least 2".into()));
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::Invalid(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            )));
        }
        // One burn, one card each, and at least one card left to draw.
        if self.max_players + 2 > crate::cards::DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) is too large for a {}-card deck",
                self.max_players,
                crate::cards::DECK_SIZE
            )));
        }
        let t = &self.tokens_to_win;
        if [t.two_players, t.three_players, t.four_players, t.fallback].contains(&0) {
            return Err(ConfigError::Invalid("token thresholds must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded match config");
        Ok(config)
    }
}
