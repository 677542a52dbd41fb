//! The game engine: board, region forest, low-link cache and player records
//! behind one type.
//!
//! ## Example
//!
//! ```
//! use gamma::GammaGame;
//!
//! let mut game = GammaGame::new(3, 3, 2, 1).unwrap();
//! assert!(game.place(1, 1, 1));
//! assert!(!game.place(2, 1, 1)); // occupied
//! assert_eq!(game.busy_count(1), 1);
//! assert_eq!(game.free_count(2), 8);
//! ```

use log::{debug, trace};
use smallvec::SmallVec;

use super::{frontier, PlayerStats};
use crate::board::{DisjointSets, Grid};
use crate::connectivity::LowLink;
use crate::core::{Cell, CellIndex, ConfigError, GammaConfig, MoveError, PlayerId, PlayerMap};

/// Rule engine for one game.
///
/// All operations are synchronous and all-or-nothing: a move that returns an
/// error (or `false`) leaves the engine exactly as it was.
#[derive(Clone, Debug)]
pub struct GammaGame {
    pub(crate) config: GammaConfig,
    pub(crate) grid: Grid,
    pub(crate) regions: DisjointSets,
    pub(crate) lowlink: LowLink,
    pub(crate) stats: PlayerMap<PlayerStats>,
    /// Occupied cells over all players.
    pub(crate) occupied: u64,
}

impl GammaGame {
    /// Create a game on a `width` x `height` board for `players` players,
    /// each allowed at most `areas` disjoint areas.
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> Result<Self, ConfigError> {
        Self::from_config(GammaConfig::new(width, height, players, areas))
    }

    /// Create a game from a validated config.
    pub fn from_config(config: GammaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let regions = DisjointSets::new(grid.len())?;
        let lowlink = LowLink::new(grid.len())?;
        let stats = PlayerMap::try_with_default(config.players)?;
        Ok(Self {
            config,
            grid,
            regions,
            lowlink,
            stats,
            occupied: 0,
        })
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GammaConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    #[must_use]
    pub fn players(&self) -> u32 {
        self.config.players
    }

    #[must_use]
    pub fn max_areas(&self) -> u32 {
        self.config.areas
    }

    // === Validation ===

    pub(crate) fn player_id(&self, player: u32) -> Result<PlayerId, MoveError> {
        PlayerId::new(player)
            .filter(|p| p.get() <= self.config.players)
            .ok_or(MoveError::InvalidPlayer(player))
    }

    pub(crate) fn cell_index(&self, x: u32, y: u32) -> Result<CellIndex, MoveError> {
        self.grid.index(x, y).ok_or(MoveError::OutOfBounds { x, y })
    }

    fn stats_of(&self, player: u32) -> Option<&PlayerStats> {
        self.player_id(player).ok().and_then(|p| self.stats.get(p))
    }

    // === Placement ===

    /// Claim the unclaimed cell `(x, y)` for `player`.
    pub fn try_place(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        let result = self.place_checked(player, x, y);
        match &result {
            Ok(()) => trace!("player {player} placed at ({x}, {y})"),
            Err(err) => debug!("move rejected: {err}"),
        }
        result
    }

    fn place_checked(&mut self, player: u32, x: u32, y: u32) -> Result<(), MoveError> {
        let player = self.player_id(player)?;
        let idx = self.cell_index(x, y)?;
        if self.grid.owner(idx).is_some() {
            return Err(MoveError::Occupied { x, y });
        }

        let adjacent = self.adjacent_regions(player, idx);
        if adjacent.is_empty() && self.at_area_limit(player) {
            return Err(MoveError::AreaLimit { player });
        }
        self.claim(player, idx, &adjacent);
        Ok(())
    }

    /// Boolean form of [`GammaGame::try_place`].
    pub fn place(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_place(player, x, y).is_ok()
    }

    /// Distinct representatives of `player`'s regions touching `idx`.
    ///
    /// Only compresses forest paths; no observable state changes.
    pub(crate) fn adjacent_regions(
        &mut self,
        player: PlayerId,
        idx: CellIndex,
    ) -> SmallVec<[CellIndex; 4]> {
        let mut reps: SmallVec<[CellIndex; 4]> = self
            .grid
            .neighbours_of(idx, player)
            .into_iter()
            .map(|n| self.regions.find(n))
            .collect();
        reps.sort_unstable();
        reps.dedup();
        reps
    }

    pub(crate) fn at_area_limit(&self, player: PlayerId) -> bool {
        self.stats[player].used_areas == self.config.areas
    }

    /// Give the unclaimed cell `idx` to `player`, merging it with the regions
    /// in `adjacent` (as returned by [`GammaGame::adjacent_regions`]).
    ///
    /// Callers have already checked the area limit.
    pub(crate) fn claim(&mut self, player: PlayerId, idx: CellIndex, adjacent: &[CellIndex]) {
        debug_assert!(self.grid.owner(idx).is_none());

        self.grid.set_owner(idx, Some(player));
        self.regions.isolate(idx);
        for &rep in adjacent {
            self.regions.union(idx, rep);
        }

        let stats = &mut self.stats[player];
        match adjacent.len() {
            0 => stats.used_areas += 1,
            merged => stats.used_areas -= merged as u32 - 1,
        }
        stats.busy_cells += 1;
        self.occupied += 1;

        frontier::record_placement(&self.grid, &mut self.stats, idx);
        let rep = self.regions.find(idx);
        self.lowlink.invalidate(rep);

        trace!(
            "{player} now holds {} area(s) after merging {} region(s)",
            self.stats[player].used_areas,
            adjacent.len()
        );
    }

    // === Queries ===

    /// Cells owned by `player`; 0 for an unknown player.
    #[must_use]
    pub fn busy_count(&self, player: u32) -> u64 {
        self.stats_of(player).map_or(0, |s| s.busy_cells)
    }

    /// Cells `player` could claim with an ordinary move; 0 for an unknown
    /// player.
    ///
    /// Below the area cap that is every unclaimed cell. At the cap only cells
    /// touching one of the player's areas qualify.
    #[must_use]
    pub fn free_count(&self, player: u32) -> u64 {
        match self.stats_of(player) {
            Some(s) if s.used_areas < self.config.areas => {
                self.config.cell_count() - self.occupied
            }
            Some(s) => s.frontier_cells,
            None => 0,
        }
    }

    /// Areas currently held by `player`; 0 for an unknown player.
    #[must_use]
    pub fn area_count(&self, player: u32) -> u32 {
        self.stats_of(player).map_or(0, |s| s.used_areas)
    }

    /// Whether `player` has spent the capture; `false` for an unknown player.
    #[must_use]
    pub fn capture_used(&self, player: u32) -> bool {
        self.stats_of(player).is_some_and(|s| s.capture_used)
    }

    /// Copy of `player`'s counters.
    #[must_use]
    pub fn player_stats(&self, player: u32) -> Option<PlayerStats> {
        self.stats_of(player).copied()
    }

    /// Occupied cells over all players.
    #[must_use]
    pub fn occupied_count(&self) -> u64 {
        self.occupied
    }

    /// Owner of `(x, y)`; `None` if unclaimed or off the board.
    #[must_use]
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.grid.index(x, y).and_then(|idx| self.grid.owner(idx))
    }

    /// Every occupied cell with its owner, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, PlayerId)> + '_ {
        (0..self.grid.len())
            .filter_map(move |idx| self.grid.owner(idx).map(|p| (self.grid.cell(idx), p)))
    }

    /// Number of fragments the region at `(x, y)` would split into if that
    /// cell were removed; `None` for an unclaimed or off-board cell.
    ///
    /// Takes `&mut self` to refresh the low-link cache.
    pub fn fragments_after_removal(&mut self, x: u32, y: u32) -> Option<u32> {
        let idx = self.grid.index(x, y)?;
        self.grid.owner(idx)?;
        Some(self.lowlink.fragments(&self.grid, &mut self.regions, idx))
    }
}
