//! Per-player counters.

use serde::{Deserialize, Serialize};

/// Everything the engine tracks about one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Cells the player owns.
    pub busy_cells: u64,

    /// Disjoint areas the player holds; never above the configured cap.
    pub used_areas: u32,

    /// Unclaimed cells adjacent to at least one of the player's cells.
    pub frontier_cells: u64,

    /// Whether the one-time capture has been spent.
    pub capture_used: bool,
}
