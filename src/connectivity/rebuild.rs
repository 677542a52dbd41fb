//! Region repair after a cell has been taken out of its region.
//!
//! The forest cannot split a set, so each surviving fragment is flood-filled
//! and every cell in it is pointed directly at a fresh representative: the
//! neighbour of the removed cell the fill started from.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::LowLink;
use crate::board::{DisjointSets, Grid};
use crate::core::{CellIndex, PlayerId};

/// Rebuild the forest for the fragments left around `removed`.
///
/// `removed` must already be unclaimed on `grid`; `previous` is the player
/// who owned it. Neighbours already covered by an earlier fragment's fill are
/// skipped, so each fragment is rebuilt once. Every new representative's
/// low-link cache is marked stale. Returns the new representatives.
pub fn rebuild_regions(
    grid: &Grid,
    regions: &mut DisjointSets,
    lowlink: &mut LowLink,
    removed: CellIndex,
    previous: PlayerId,
) -> SmallVec<[CellIndex; 4]> {
    debug_assert!(grid.owner(removed).is_none());

    let mut assigned = FxHashSet::default();
    let mut roots = SmallVec::new();

    for start in grid.neighbours_of(removed, previous) {
        if !assigned.insert(start) {
            continue;
        }
        let mut pending = vec![start];
        while let Some(cell) = pending.pop() {
            regions.attach(cell, start);
            for n in grid.neighbours_of(cell, previous) {
                if assigned.insert(n) {
                    pending.push(n);
                }
            }
        }
        lowlink.invalidate(start);
        roots.push(start);
    }

    regions.isolate(removed);
    roots
}
