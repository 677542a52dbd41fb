//! Board representation: ownership grid and region forest.

pub mod dsf;
pub mod grid;

pub use dsf::DisjointSets;
pub use grid::{Grid, Neighbours};
