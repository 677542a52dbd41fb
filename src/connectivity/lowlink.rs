//! Discovery/low-link analysis of single-owner regions.
//!
//! A union-find forest answers "are these two cells in one region" but cannot
//! answer what happens when a cell is taken out. For that the engine keeps,
//! per cell, the discovery time, low-link value and DFS tree parent from a
//! depth-first traversal of the cell's region. From those, bridges and
//! articulation points around a cell classify how many fragments the region
//! falls into if the cell is removed.
//!
//! ## Freshness
//!
//! The values of a region are valid while the discovery time stored at the
//! region's representative is non-zero. Any insertion into or removal from a
//! region must call [`LowLink::invalidate`] on its (new) representative; the
//! region is then recomputed lazily by the next query that touches it.
//! Discovery times start at 1 so that 0 can serve as the "stale" sentinel.

use log::trace;
use rustc_hash::FxHashSet;

use crate::board::{DisjointSets, Grid};
use crate::core::{CellIndex, ConfigError};

const NO_PARENT: u32 = u32::MAX;

/// One in-progress DFS frame: a cell and how many of its neighbours have
/// been examined.
struct Frame {
    cell: CellIndex,
    cursor: usize,
}

/// Cached discovery/low-link values for every cell on the board.
#[derive(Clone, Debug)]
pub struct LowLink {
    disc: Vec<u32>,
    low: Vec<u32>,
    tree_parent: Vec<u32>,
}

impl LowLink {
    /// Allocate a cache for `n` cells, all stale.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        let mut disc = Vec::new();
        disc.try_reserve_exact(n)?;
        disc.resize(n, 0);

        let mut low = Vec::new();
        low.try_reserve_exact(n)?;
        low.resize(n, 0);

        let mut tree_parent = Vec::new();
        tree_parent.try_reserve_exact(n)?;
        tree_parent.resize(n, NO_PARENT);

        Ok(Self {
            disc,
            low,
            tree_parent,
        })
    }

    /// Whether the region represented by `rep` has valid cached values.
    #[inline]
    pub fn is_fresh(&self, rep: CellIndex) -> bool {
        self.disc[rep] != 0
    }

    /// Mark the region represented by `rep` stale.
    #[inline]
    pub fn invalidate(&mut self, rep: CellIndex) {
        self.disc[rep] = 0;
    }

    /// Recompute the region of `cell` if it is stale, rooting the DFS at
    /// `cell`. Unclaimed cells are ignored.
    pub fn refresh(&mut self, grid: &Grid, regions: &mut DisjointSets, cell: CellIndex) {
        if grid.owner(cell).is_none() {
            return;
        }
        let rep = regions.find(cell);
        if !self.is_fresh(rep) {
            self.compute(grid, cell);
        }
    }

    /// Bring every stale region on the board up to date, once each.
    pub fn refresh_all(&mut self, grid: &Grid, regions: &mut DisjointSets) {
        for cell in 0..grid.len() {
            self.refresh(grid, regions, cell);
        }
    }

    /// Iterative DFS over the region containing `root`.
    ///
    /// Every cell of the region gets a new discovery time, low-link and tree
    /// parent; `root` gets discovery time 1 and no parent.
    fn compute(&mut self, grid: &Grid, root: CellIndex) {
        let mut seen = FxHashSet::default();
        let mut stack = vec![Frame {
            cell: root,
            cursor: 0,
        }];
        let mut time = 1;
        seen.insert(root);
        self.disc[root] = time;
        self.low[root] = time;
        self.tree_parent[root] = NO_PARENT;

        while let Some(frame) = stack.last_mut() {
            let v = frame.cell;
            let neighbours = grid.same_owner_neighbours(v);

            if let Some(&w) = neighbours.get(frame.cursor) {
                frame.cursor += 1;
                if seen.insert(w) {
                    time += 1;
                    self.disc[w] = time;
                    self.low[w] = time;
                    self.tree_parent[w] = v as u32;
                    stack.push(Frame { cell: w, cursor: 0 });
                } else if self.tree_parent[v] != w as u32 {
                    // Back edge. The grid has no parallel edges, so skipping the
                    // tree parent is enough.
                    self.low[v] = self.low[v].min(self.disc[w]);
                }
            } else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    let p = parent.cell;
                    self.low[p] = self.low[p].min(self.low[v]);
                }
            }
        }

        trace!("low-link recomputed from cell {root}: {} cells", seen.len());
    }

    #[inline]
    fn parent_of(&self, cell: CellIndex) -> Option<CellIndex> {
        let p = self.tree_parent[cell];
        (p != NO_PARENT).then_some(p as usize)
    }

    /// Whether the edge `(a, b)` between two same-owner neighbours is a bridge.
    ///
    /// Only DFS tree edges can be bridges: the edge is one iff the child's
    /// subtree cannot reach above the child.
    fn is_bridge(&self, a: CellIndex, b: CellIndex) -> bool {
        if self.parent_of(b) == Some(a) {
            return self.low[b] >= self.disc[b];
        }
        if self.parent_of(a) == Some(b) {
            return self.low[a] >= self.disc[a];
        }
        false
    }

    /// Whether removing `cell` disconnects its region.
    fn is_articulation_point(&self, grid: &Grid, cell: CellIndex) -> bool {
        let mut children = grid
            .same_owner_neighbours(cell)
            .into_iter()
            .filter(|&n| self.parent_of(n) == Some(cell));

        match self.parent_of(cell) {
            None => children.count() > 1,
            Some(_) => children.any(|child| self.low[child] >= self.disc[cell]),
        }
    }

    /// Number of fragments the region of `cell` splits into if `cell` is
    /// removed; 0 if the cell is alone, and 0 for an unclaimed cell.
    ///
    /// A cell has at most four same-owner neighbours. Every bridge neighbour
    /// ends up in a fragment of its own; non-bridge neighbours lie on cycles
    /// through `cell`, and with at most four of them they form one fragment,
    /// or two when all four are non-bridges and `cell` is an articulation
    /// point.
    pub fn fragments(&mut self, grid: &Grid, regions: &mut DisjointSets, cell: CellIndex) -> u32 {
        if grid.owner(cell).is_none() {
            return 0;
        }
        self.refresh(grid, regions, cell);

        let neighbours = grid.same_owner_neighbours(cell);
        let bridges = neighbours
            .iter()
            .filter(|&&n| self.is_bridge(cell, n))
            .count() as u32;
        let degree = neighbours.len() as u32;

        if degree == bridges {
            bridges
        } else if degree == 4 && bridges == 0 {
            if self.is_articulation_point(grid, cell) {
                2
            } else {
                1
            }
        } else {
            bridges + 1
        }
    }
}
