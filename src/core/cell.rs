//! Board coordinates.
//!
//! `Cell` is the public `(x, y)` coordinate; internally the engine addresses
//! cells by a flat row-major index (`y * width + x`) into array-backed
//! storage.

use serde::{Deserialize, Serialize};

/// Flat row-major cell index.
pub type CellIndex = usize;

/// A board coordinate: column `x` in `0..width`, row `y` in `0..height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
