//! Shortest-path search over 4-connected grids.
//!
//! Everything here works through the [`Pather`] trait, which only answers
//! neighbour queries. No algorithm in this crate ever needs the full grid:
//!
//! - **BFS** shortest distance ([`Oracle::shortest_distance`])
//! - **BFS** shortest path ([`Oracle::shortest_path`])
//!
//! [`Oracle`] owns and reuses its queue and visited set, so repeated queries
//! allocate nothing after warm-up.

mod distance;
mod grid_pather;
mod oracle;
mod traits;

pub use distance::{is_adjacent, manhattan};
pub use grid_pather::GridPather;
pub use oracle::{Oracle, UNREACHABLE};
pub use traits::Pather;
