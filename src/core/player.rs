//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based as on the board, where a cell
//! owner of `0` means "unclaimed"; `Option<PlayerId>` takes that role here and
//! costs no extra space.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// Player identifier in `1..=players`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    /// Create a player ID. Returns `None` for `0`, which names no player.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The raw 1-based id, as rendered on the board.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use gamma::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).map(PlayerId::get).collect();
    /// assert_eq!(players, vec![1, 2, 3]);
    /// ```
    pub fn all(player_count: u32) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).filter_map(PlayerId::new)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player. Construction is fallible
/// so that an engine can report allocation failure instead of aborting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn try_new(
        player_count: u32,
        factory: impl Fn(PlayerId) -> T,
    ) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(player_count as usize)?;
        data.extend(PlayerId::all(player_count).map(factory));
        Ok(Self { data })
    }

    /// Create a map with default values.
    pub fn try_with_default(player_count: u32) -> Result<Self, TryReserveError>
    where
        T: Default,
    {
        Self::try_new(player_count, |_| T::default())
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len() as u32).zip(self.data.iter())
    }

    /// Iterate over the stored values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
