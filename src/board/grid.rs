//! Ownership matrix with a bounded 4-connected neighbourhood.

use smallvec::SmallVec;

use crate::core::{Cell, CellIndex, ConfigError, PlayerId};

/// Neighbour list of one cell; a cell never has more than four.
pub type Neighbours = SmallVec<[CellIndex; 4]>;

/// Rectangular board recording which player, if any, owns each cell.
///
/// Cells are stored row-major. Neighbours are the four cardinal directions;
/// edge cells have three and corner cells two (no wrapping).
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    owners: Vec<Option<PlayerId>>,
}

impl Grid {
    /// Allocate an empty board. Dimensions are assumed validated.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let len = width as usize * height as usize;
        let mut owners = Vec::new();
        owners.try_reserve_exact(len)?;
        owners.resize(len, None);
        Ok(Self {
            width,
            height,
            owners,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always `false`: construction rejects empty boards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Flat index of `(x, y)`, or `None` when off the board.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> Option<CellIndex> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn cell(&self, idx: CellIndex) -> Cell {
        let width = self.width as usize;
        Cell::new((idx % width) as u32, (idx / width) as u32)
    }

    #[inline]
    pub fn owner(&self, idx: CellIndex) -> Option<PlayerId> {
        self.owners[idx]
    }

    #[inline]
    pub fn set_owner(&mut self, idx: CellIndex, owner: Option<PlayerId>) {
        self.owners[idx] = owner;
    }

    /// The 4-connected neighbours of `idx`, in west, east, south, north order.
    pub fn neighbours(&self, idx: CellIndex) -> Neighbours {
        let width = self.width as usize;
        let x = idx % width;
        let y = idx / width;
        let mut result = Neighbours::new();
        if x > 0 {
            result.push(idx - 1);
        }
        if x + 1 < width {
            result.push(idx + 1);
        }
        if y > 0 {
            result.push(idx - width);
        }
        if y + 1 < self.height as usize {
            result.push(idx + width);
        }
        result
    }

    /// Neighbours owned by `player`.
    pub fn neighbours_of(&self, idx: CellIndex, player: PlayerId) -> Neighbours {
        self.neighbours(idx)
            .into_iter()
            .filter(|&n| self.owners[n] == Some(player))
            .collect()
    }

    /// Neighbours sharing the owner of `idx`; empty for an unclaimed cell.
    pub fn same_owner_neighbours(&self, idx: CellIndex) -> Neighbours {
        match self.owners[idx] {
            Some(owner) => self.neighbours_of(idx, owner),
            None => Neighbours::new(),
        }
    }

    /// Number of neighbours of the unclaimed cell `idx` owned by `player`.
    ///
    /// Returns 0 for an occupied cell.
    pub fn contacts(&self, idx: CellIndex, player: PlayerId) -> usize {
        if self.owners[idx].is_some() {
            return 0;
        }
        self.neighbours(idx)
            .into_iter()
            .filter(|&n| self.owners[n] == Some(player))
            .count()
    }
}
