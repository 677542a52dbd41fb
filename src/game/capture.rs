//! The one-time capture: seizing a cell already claimed by another player.
//!
//! Taking a cell out of the victim's region may split it. Whether that is
//! allowed depends on how many fragments the region falls into, which the
//! low-link cache answers without touching the board; only a legal capture
//! then clears the cell, repairs the victim's forest and places the
//! attacker's marker with an ordinary claim.

use log::debug;

use super::{frontier, GammaGame};
use crate::connectivity::rebuild_regions;
use crate::core::{CellIndex, MoveError, PlayerId};

impl GammaGame {
    /// Seize `(x, y)` from its current owner for `player`.
    pub fn try_capture(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        let result = self.capture_checked(player, x, y);
        if let Err(err) = &result {
            debug!("capture rejected: {err}");
        }
        result
    }

    /// Boolean form of [`GammaGame::try_capture`].
    pub fn capture(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_capture(player, x, y).is_ok()
    }

    fn capture_checked(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        let player = self.player_id(player)?;
        let idx = self.cell_index(x, y)?;
        let victim = self.grid.owner(idx).ok_or(MoveError::Unclaimed { x, y })?;
        if victim == player {
            return Err(MoveError::OwnCell { x, y });
        }
        if self.stats[player].capture_used {
            return Err(MoveError::CaptureUsed { player });
        }

        let fragments = self.lowlink.fragments(&self.grid, &mut self.regions, idx);
        let new_areas = i64::from(fragments) - 1;
        self.check_capture(player, victim, idx, new_areas)?;

        frontier::record_removal(&self.grid, &mut self.stats, idx);
        self.grid.set_owner(idx, None);
        rebuild_regions(&self.grid, &mut self.regions, &mut self.lowlink, idx, victim);
        if fragments > 1 {
            debug!("capture at ({x}, {y}) split {victim}'s area into {fragments}");
        }

        let adjacent = self.adjacent_regions(player, idx);
        self.claim(player, idx, &adjacent);

        let victim_stats = &mut self.stats[victim];
        victim_stats.used_areas = (i64::from(victim_stats.used_areas) + new_areas) as u32;
        victim_stats.busy_cells -= 1;
        self.occupied -= 1;
        self.stats[player].capture_used = true;
        Ok(())
    }

    /// Legality of moving `idx` from `victim` to `player`, given that the
    /// victim's area count changes by `new_areas`.
    fn check_capture(
        &self,
        player: PlayerId,
        victim: PlayerId,
        idx: CellIndex,
        new_areas: i64,
    ) -> Result<(), MoveError> {
        if self.at_area_limit(player) && self.grid.neighbours_of(idx, player).is_empty() {
            return Err(MoveError::AreaLimit { player });
        }
        if i64::from(self.stats[victim].used_areas) + new_areas > i64::from(self.config.areas) {
            return Err(MoveError::VictimAreaLimit { victim });
        }
        Ok(())
    }

    /// Whether `player` has any legal capture left; `false` for an unknown
    /// player.
    ///
    /// Brings every stale region's low-link values up to date, then tests
    /// each opponent cell in turn.
    pub fn capture_feasible(&mut self, player: u32) -> bool {
        let Ok(player) = self.player_id(player) else {
            return false;
        };
        let stats = &self.stats[player];
        if stats.capture_used || stats.busy_cells == self.occupied {
            return false;
        }

        self.lowlink.refresh_all(&self.grid, &mut self.regions);
        for idx in 0..self.grid.len() {
            let Some(victim) = self.grid.owner(idx) else {
                continue;
            };
            if victim == player {
                continue;
            }
            let fragments = self.lowlink.fragments(&self.grid, &mut self.regions, idx);
            if self
                .check_capture(player, victim, idx, i64::from(fragments) - 1)
                .is_ok()
            {
                return true;
            }
        }
        false
    }
}
