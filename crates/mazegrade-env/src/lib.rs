//! Maze environments for grading learner solvers.
//!
//! An [`Environment`] binds an immutable [`Grid`](mazegrade_core::Grid) to a
//! start and end cell and answers only the queries of the [`MazeEnv`]
//! contract. The raw grid is handed out solely in visible mode.
//!
//! Environments come from a [`MazeGenerator`]: either the fixed teaching
//! maze or a catalog layout with seeded random endpoints.

pub mod catalog;
pub mod environment;
pub mod generator;
pub mod heuristic;

pub use catalog::Catalog;
pub use environment::{AccessDenied, Environment, MazeEnv, shortest_distance, shortest_path};
pub use generator::{GenerateError, Generator, HeuristicKind, MazeGenerator};
pub use heuristic::{FaultyHeuristic, Heuristic, ManhattanHeuristic};
