//! # gamma
//!
//! Rule engine for gamma, a territory-claiming board game for any number of
//! players on a rectangular grid.
//!
//! ## Rules
//!
//! - Players claim unclaimed cells one at a time.
//! - Cells of one player that touch orthogonally form an **area**. No player
//!   may ever hold more than the configured number of areas, so a claim that
//!   would open one too many is illegal.
//! - Once per game each player may **capture** a cell already claimed by
//!   someone else, provided neither player ends up above the area limit. A
//!   capture can split the victim's area into several.
//!
//! ## Architecture
//!
//! - **Union-find forest** over cells: merging areas on a claim is
//!   near-constant time.
//! - **Low-link cache**: the forest cannot split, so captures are judged by
//!   bridge/articulation analysis of the victim's area, cached per area and
//!   recomputed only when the area changed.
//! - **Region rebuild**: after a capture the victim's surviving fragments get
//!   fresh forest trees.
//! - **Frontier accounting**: per-player count of unclaimed cells adjacent to
//!   the player, kept incrementally so `free_count` is O(1).
//!
//! ## Modules
//!
//! - `core`: player ids, coordinates, configuration, errors
//! - `board`: ownership grid and disjoint-set forest
//! - `connectivity`: low-link analysis and region rebuild
//! - `game`: the [`GammaGame`] engine
//!
//! ```
//! use gamma::GammaGame;
//!
//! let mut game = GammaGame::new(5, 1, 2, 1).unwrap();
//! for x in 0..5 {
//!     assert!(game.place(1, x, 0));
//! }
//! // Taking the middle cell would leave player 1 with two areas.
//! assert!(!game.capture(2, 2, 0));
//! // Taking an end cell keeps player 1 in one piece.
//! assert!(game.capture(2, 4, 0));
//! assert_eq!(game.snapshot(), "11112\n");
//! ```

pub mod board;
pub mod connectivity;
pub mod core;
pub mod game;

pub use crate::core::{Cell, ConfigError, GammaConfig, MoveError, PlayerId, PlayerMap};
pub use crate::game::{GammaGame, PlayerStats};
