//! Game configuration.
//!
//! A game is fully described by its board dimensions, the number of players
//! and the per-player cap on disjoint areas. The engine validates the
//! configuration before allocating anything.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board and rule parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GammaConfig {
    /// Number of columns.
    pub width: u32,

    /// Number of rows.
    pub height: u32,

    /// Number of players; ids run `1..=players`.
    pub players: u32,

    /// Maximum number of disjoint areas any one player may hold.
    pub areas: u32,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            players: 2,
            areas: 3,
        }
    }
}

impl GammaConfig {
    /// Create a config. Nothing is checked until [`GammaConfig::validate`].
    #[must_use]
    pub const fn new(width: u32, height: u32, players: u32, areas: u32) -> Self {
        Self {
            width,
            height,
            players,
            areas,
        }
    }

    /// Set board dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of players.
    pub fn with_players(mut self, players: u32) -> Self {
        self.players = players;
        self
    }

    /// Set the per-player area cap.
    pub fn with_areas(mut self, areas: u32) -> Self {
        self.areas = areas;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check every parameter.
    ///
    /// Cell indices are stored as `u32` with `u32::MAX` reserved as a
    /// sentinel, so the board must hold fewer than `u32::MAX` cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.players == 0 {
            return Err(ConfigError::ZeroPlayers);
        }
        if self.areas == 0 {
            return Err(ConfigError::ZeroAreas);
        }
        let cells = self.cell_count();
        if cells >= u64::from(u32::MAX) || usize::try_from(cells).is_err() {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
