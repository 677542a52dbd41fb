//! Disjoint-set forest over board cells.
//!
//! Path compression uses iterative path-halving: during [`DisjointSets::find`]
//! each visited node is pointed at its grandparent. Union-by-rank keeps trees
//! shallow. The forest only merges; splitting a region after a capture is done
//! by re-pointing every cell of each surviving fragment with
//! [`DisjointSets::attach`].

use crate::core::{CellIndex, ConfigError};

/// Union-find with path-halving and union-by-rank.
///
/// Parents are stored as `u32`; boards are validated to have fewer than
/// `u32::MAX` cells.
#[derive(Clone, Debug)]
pub struct DisjointSets {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(n)?;
        parent.extend((0..n).map(|i| i as u32));

        let mut rank = Vec::new();
        rank.try_reserve_exact(n)?;
        rank.resize(n, 0);

        Ok(Self { parent, rank })
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, mut x: CellIndex) -> CellIndex {
        while self.parent[x] as usize != x {
            let grandparent = self.parent[self.parent[x] as usize];
            self.parent[x] = grandparent;
            x = grandparent as usize;
        }
        x
    }

    /// Merges the sets containing `a` and `b` and returns the new root.
    ///
    /// When ranks are equal, the root of `a` wins.
    pub fn union(&mut self, a: CellIndex, b: CellIndex) -> CellIndex {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => {
                self.parent[ra] = rb as u32;
                rb
            }
            std::cmp::Ordering::Greater => {
                self.parent[rb] = ra as u32;
                ra
            }
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra as u32;
                self.rank[ra] += 1;
                ra
            }
        }
    }

    /// Make `x` a singleton root again.
    pub fn isolate(&mut self, x: CellIndex) {
        self.attach(x, x);
    }

    /// Point `x` straight at `root` and reset its rank.
    ///
    /// Used by the region rebuilder, which re-points every cell of a fragment;
    /// callers must attach `root` to itself as well.
    pub fn attach(&mut self, x: CellIndex, root: CellIndex) {
        self.parent[x] = root as u32;
        self.rank[x] = 0;
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: CellIndex, b: CellIndex) -> bool {
        self.find(a) == self.find(b)
    }
}
