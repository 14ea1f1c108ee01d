//! **pathtrace-core** — Grid and node data model for pathfinding visualization.
//!
//! This crate provides the foundational types used across the *pathtrace*
//! workspace: integer cell coordinates, the per-cell [`Node`] traversal
//! state, and the arena-owned [`Grid`] that search algorithms mutate.
//!
//! The grid is the single shared mutable resource of the engine: all node
//! state lives in a flat array addressed by `(row, col)`, and predecessor
//! links are stored as coordinates rather than references, so no aliasing
//! survives a [`Grid::reset`].

pub mod coord;
pub mod grid;

pub use coord::Coord;
pub use grid::{Grid, GridError, Node, UNREACHABLE};
