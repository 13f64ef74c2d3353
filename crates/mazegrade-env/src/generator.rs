//! Maze generators: the fixed teaching maze and seeded random mazes.
//!
//! Random mazes pick a catalog layout and sample distinct start/end path
//! cells, re-sampling until the pair is connected.

use std::fmt;

use log::debug;
use mazegrade_core::{Grid, GridError};
use mazegrade_paths::{GridPather, Oracle, UNREACHABLE};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::catalog::{Catalog, FIXED_END, FIXED_LAYOUT, FIXED_START};
use crate::environment::Environment;
use crate::heuristic::FaultyHeuristic;

/// Endpoint draws per random maze before giving up.
pub const MAX_SAMPLE_ATTEMPTS: usize = 256;

/// Source of environments for the judge.
pub trait MazeGenerator {
    /// The known, static maze.
    fn generate_fixed(&self) -> Result<Environment, GenerateError>;

    /// A maze with randomized layout and endpoints. The same seed yields the
    /// same maze.
    fn generate_random(&self, seed: u64) -> Result<Environment, GenerateError>;
}

/// Which heuristic generated environments receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Exact Manhattan distance.
    #[default]
    Manhattan,
    /// Manhattan distance times a per-call random factor in `[1, 5]`.
    Faulty,
}

/// Catalog-backed generator.
#[derive(Debug, Clone)]
pub struct Generator {
    catalog: Catalog,
    heuristic: HeuristicKind,
    visible: bool,
}

impl Generator {
    /// Blind mazes over the built-in catalog with the Manhattan heuristic.
    pub fn standard() -> Result<Self, GridError> {
        Ok(Self::with_catalog(Catalog::builtin()?))
    }

    /// Blind mazes over the built-in catalog with the faulty heuristic.
    pub fn faulty() -> Result<Self, GridError> {
        Ok(Self::with_catalog(Catalog::builtin()?).with_heuristic(HeuristicKind::Faulty))
    }

    /// Blind mazes over a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            heuristic: HeuristicKind::Manhattan,
            visible: false,
        }
    }

    /// Set the heuristic kind (builder).
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set whether generated mazes expose their grid (builder).
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn finish(&self, env: Environment, heuristic_seed: u64) -> Environment {
        let env = env.with_visible(self.visible);
        match self.heuristic {
            HeuristicKind::Manhattan => env,
            HeuristicKind::Faulty => env.with_heuristic(FaultyHeuristic::new(heuristic_seed)),
        }
    }
}

impl MazeGenerator for Generator {
    fn generate_fixed(&self) -> Result<Environment, GenerateError> {
        let grid = Grid::parse(FIXED_LAYOUT)?;
        let env = Environment::new(grid, FIXED_START, FIXED_END)?;
        Ok(self.finish(env, 0))
    }

    fn generate_random(&self, seed: u64) -> Result<Environment, GenerateError> {
        if self.catalog.is_empty() {
            return Err(GenerateError::EmptyCatalog);
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let idx = rng.random_range(0..self.catalog.len());
        let Some((name, grid)) = self.catalog.get(idx) else {
            return Err(GenerateError::EmptyCatalog);
        };

        let cells = grid.path_cells();
        if cells.len() < 2 {
            return Err(GenerateError::Unsolvable {
                layout: name.to_string(),
                attempts: 0,
            });
        }

        let pather = GridPather::new(grid);
        let mut oracle = Oracle::new();
        for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
            let start = cells[rng.random_range(0..cells.len())];
            let end = cells[rng.random_range(0..cells.len())];
            if start == end || oracle.shortest_distance(&pather, start, end) == UNREACHABLE {
                continue;
            }
            debug!(
                "seed {seed}: layout {name:?}, start {start}, end {end} (attempt {attempt})"
            );
            let env = Environment::new(grid.clone(), start, end)?;
            return Ok(self.finish(env, rng.random()));
        }

        Err(GenerateError::Unsolvable {
            layout: name.to_string(),
            attempts: MAX_SAMPLE_ATTEMPTS,
        })
    }
}

/// Errors that can occur while generating a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A layout or endpoint was invalid.
    Grid(GridError),
    /// The catalog holds no layouts.
    EmptyCatalog,
    /// No connected start/end pair was found.
    Unsolvable { layout: String, attempts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::EmptyCatalog => write!(f, "generator: empty catalog"),
            Self::Unsolvable { layout, attempts } => write!(
                f,
                "generator: no connected endpoints in layout {layout:?} after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenerateError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn heuristic_kind_round_trip() {
        let json = serde_json::to_string(&HeuristicKind::Faulty).unwrap();
        let back: HeuristicKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HeuristicKind::Faulty);
    }
}
