//! Core engine types: players, coordinates, configuration, errors.

pub mod cell;
pub mod config;
pub mod error;
pub mod player;

pub use cell::{Cell, CellIndex};
pub use config::GammaConfig;
pub use error::{ConfigError, MoveError};
pub use player::{PlayerId, PlayerMap};
