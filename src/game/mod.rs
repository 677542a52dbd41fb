//! The gamma game: placement, capture, queries and board rendering.

pub mod capture;
pub mod engine;
pub mod frontier;
pub mod snapshot;
pub mod stats;

pub use engine::GammaGame;
pub use stats::PlayerStats;
