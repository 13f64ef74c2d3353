//! **mazegrade-core**: core types for the maze grading harness.
//!
//! This crate provides the foundational types used across the *mazegrade*
//! workspace: cell coordinates, grid bounds and the immutable obstacle
//! [`Grid`].

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Cell};
pub use grid::{Grid, GridError, Tile};
