//! Session configuration.
//!
//! A `GameConfig` decides how many players sit at the table and how the
//! board grows. It can be built in code with the builder methods or
//! deserialised from any serde format; missing fields take their defaults.
//!
//! ```
//! use set_engine::core::GameConfig;
//!
//! let config = GameConfig::new(2).with_board_size(9).with_deal_step(3);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::{Result, SetError};

/// Number of cards face up at the start of a game.
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Largest board the engine grows to while looking for a set.
///
/// Twenty cards can be set-free, twenty-one never are.
pub const DEFAULT_MAX_BOARD_SIZE: usize = 21;

/// Cards added per growth step.
pub const DEFAULT_DEAL_STEP: usize = 3;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Board size that refills aim for after a claim.
    pub board_size: usize,

    /// Upper bound for growth while no set is showing.
    pub max_board_size: usize,

    /// How many cards each growth step deals.
    pub deal_step: usize,

    /// Shuffle the deck before the first deal.
    pub shuffle: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 1,
            board_size: DEFAULT_BOARD_SIZE,
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
            deal_step: DEFAULT_DEAL_STEP,
            shuffle: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players with default board rules.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_max_board_size(mut self, size: usize) -> Self {
        self.max_board_size = size;
        self
    }

    #[must_use]
    pub fn with_deal_step(mut self, step: usize) -> Self {
        self.deal_step = step;
        self
    }

    /// Deal the deck in its stable enumeration order.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<()> {
        if !(1..=255).contains(&self.player_count) {
            return Err(SetError::InvalidConfig(format!(
                "player_count must be 1-255, got {}",
                self.player_count
            )));
        }
        if self.board_size < 3 {
            return Err(SetError::InvalidConfig(format!(
                "board_size must be at least 3, got {}",
                self.board_size
            )));
        }
        if self.max_board_size < self.board_size || self.max_board_size > DECK_SIZE {
            return Err(SetError::InvalidConfig(format!(
                "max_board_size must lie in {}..={}, got {}",
                self.board_size, DECK_SIZE, self.max_board_size
            )));
        }
        if self.deal_step == 0 {
            return Err(SetError::InvalidConfig("deal_step must be positive".into()));
        }
        Ok(())
    }
}
