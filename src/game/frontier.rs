//! Incremental frontier accounting.
//!
//! A player's frontier is the set of unclaimed cells touching at least one of
//! their cells. Only the counts are kept; each placement or removal adjusts
//! them by looking at the at most four neighbours of the changed cell, taking
//! care never to count an empty cell twice for the same player.

use smallvec::SmallVec;

use super::PlayerStats;
use crate::board::Grid;
use crate::core::{CellIndex, PlayerId, PlayerMap};

/// Distinct owners among the neighbours of `idx`.
fn neighbour_owners(grid: &Grid, idx: CellIndex) -> SmallVec<[PlayerId; 4]> {
    let mut owners = SmallVec::<[PlayerId; 4]>::new();
    for n in grid.neighbours(idx) {
        if let Some(owner) = grid.owner(n) {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
    }
    owners
}

/// Empty neighbours of `idx` whose only contact with `owner` is `idx`.
fn sole_contacts(grid: &Grid, idx: CellIndex, owner: PlayerId) -> u64 {
    grid.neighbours(idx)
        .into_iter()
        .filter(|&n| grid.owner(n).is_none() && grid.contacts(n, owner) == 1)
        .count() as u64
}

/// Account for `idx` having just been claimed. Call after setting the owner.
pub fn record_placement(grid: &Grid, stats: &mut PlayerMap<PlayerStats>, idx: CellIndex) {
    // `idx` was on the frontier of every neighbouring owner.
    for owner in neighbour_owners(grid, idx) {
        stats[owner].frontier_cells -= 1;
    }
    if let Some(owner) = grid.owner(idx) {
        stats[owner].frontier_cells += sole_contacts(grid, idx, owner);
    }
}

/// Account for `idx` about to be cleared. Call while it is still owned.
pub fn record_removal(grid: &Grid, stats: &mut PlayerMap<PlayerStats>, idx: CellIndex) {
    if let Some(owner) = grid.owner(idx) {
        stats[owner].frontier_cells -= sole_contacts(grid, idx, owner);
    }
    // Once empty, `idx` joins the frontier of every neighbouring owner.
    for owner in neighbour_owners(grid, idx) {
        stats[owner].frontier_cells += 1;
    }
}
