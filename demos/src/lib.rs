//! Reference solvers and command-line plumbing for the `mazegrade` demo.

pub mod options;
pub mod solvers;

pub use options::Options;
pub use solvers::{Astar, Bfs, Dfs, Peek, SolverKind};
