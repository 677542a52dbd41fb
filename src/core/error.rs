//! Error types for engine construction and moves.
//!
//! Construction either yields a whole engine or a [`ConfigError`]. A move
//! that fails yields a [`MoveError`] and leaves the engine untouched.

use thiserror::Error;

use super::PlayerId;

/// Engine construction failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be at least 1")]
    ZeroWidth,
    #[error("board height must be at least 1")]
    ZeroHeight,
    #[error("player count must be at least 1")]
    ZeroPlayers,
    #[error("area limit must be at least 1")]
    ZeroAreas,
    #[error("board of {width}x{height} cells exceeds the addressable cell count")]
    BoardTooLarge { width: u32, height: u32 },
    #[error("not enough memory to allocate the board")]
    OutOfMemory,
}

impl From<std::collections::TryReserveError> for ConfigError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ConfigError::OutOfMemory
    }
}

/// Reason a move or capture was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no player with id {0}")]
    InvalidPlayer(u32),
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: u32, y: u32 },
    #[error("cell ({x}, {y}) is not occupied")]
    Unclaimed { x: u32, y: u32 },
    #[error("cell ({x}, {y}) already belongs to the capturing player")]
    OwnCell { x: u32, y: u32 },
    #[error("{player} cannot open another area")]
    AreaLimit { player: PlayerId },
    #[error("capture would leave {victim} above the area limit")]
    VictimAreaLimit { victim: PlayerId },
    #[error("{player} has already used the capture")]
    CaptureUsed { player: PlayerId },
}
