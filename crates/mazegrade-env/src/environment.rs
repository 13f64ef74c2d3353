//! The restricted query interface over a maze.

use std::fmt;

use mazegrade_core::{Cell, Grid, GridError};
use mazegrade_paths::{GridPather, Oracle, Pather};

use crate::heuristic::{Heuristic, ManhattanHeuristic};

/// What a solver (and the grader) may ask a maze.
///
/// Successors come from [`Pather::neighbors`]: the in-bounds path cells
/// among `(r, c+1)`, `(r, c-1)`, `(r+1, c)`, `(r-1, c)`, in that order.
pub trait MazeEnv: Pather {
    /// The starting cell. Constant for the environment's lifetime.
    fn start(&self) -> Cell;

    /// The goal cell. Constant for the environment's lifetime.
    fn end(&self) -> Cell;

    /// Estimated distance from `p` to [`end`](Self::end).
    ///
    /// May overestimate and may change between calls.
    fn heuristic(&self, p: Cell) -> f64;

    /// The raw grid, available only for visible mazes.
    fn full_grid(&self) -> Result<&Grid, AccessDenied>;

    /// Walkable neighbours of `p`.
    fn successors(&self, p: Cell) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors(p, &mut buf);
        buf
    }
}

/// Attempt to read the full grid of a blind maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessDenied;

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "access denied: the full grid is hidden, use successors() to explore"
        )
    }
}

impl std::error::Error for AccessDenied {}

/// A maze: immutable grid, fixed endpoints, visibility flag and an injected
/// heuristic.
pub struct Environment {
    grid: Grid,
    start: Cell,
    end: Cell,
    visible: bool,
    heuristic: Box<dyn Heuristic>,
}

impl Environment {
    /// Build a blind environment with the Manhattan heuristic.
    ///
    /// Both endpoints must be in-bounds path cells.
    pub fn new(grid: Grid, start: Cell, end: Cell) -> Result<Self, GridError> {
        for p in [start, end] {
            if !grid.contains(p) {
                return Err(GridError::OutOfBounds { pos: p });
            }
            if !grid.is_path(p) {
                return Err(GridError::BlockedEndpoint { pos: p });
            }
        }
        Ok(Self {
            grid,
            start,
            end,
            visible: false,
            heuristic: Box::new(ManhattanHeuristic),
        })
    }

    /// Set whether [`full_grid`](MazeEnv::full_grid) may be called (builder).
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Replace the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Whether the raw grid is exposed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Grid dimensions. Revealing the size does not reveal the walls.
    pub fn size(&self) -> (i32, i32) {
        (self.grid.rows(), self.grid.cols())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("size", &self.size())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl Pather for Environment {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        GridPather::new(&self.grid).neighbors(p, buf);
    }
}

impl MazeEnv for Environment {
    fn start(&self) -> Cell {
        self.start
    }

    fn end(&self) -> Cell {
        self.end
    }

    fn heuristic(&self, p: Cell) -> f64 {
        self.heuristic.estimate(p, self.end)
    }

    fn full_grid(&self) -> Result<&Grid, AccessDenied> {
        if self.visible {
            Ok(&self.grid)
        } else {
            Err(AccessDenied)
        }
    }
}

/// Shortest start-to-end distance of `env`, or
/// [`UNREACHABLE`](mazegrade_paths::UNREACHABLE).
pub fn shortest_distance<E: MazeEnv + ?Sized>(env: &E) -> usize {
    Oracle::new().shortest_distance(env, env.start(), env.end())
}

/// A shortest start-to-end path of `env`, if one exists.
pub fn shortest_path<E: MazeEnv + ?Sized>(env: &E) -> Option<Vec<Cell>> {
    Oracle::new().shortest_path(env, env.start(), env.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::FaultyHeuristic;
    use mazegrade_paths::{UNREACHABLE, manhattan};

    fn fixed() -> Environment {
        let grid = Grid::parse(crate::catalog::FIXED_LAYOUT).unwrap();
        Environment::new(grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap()
    }

    #[test]
    fn endpoints_are_constant() {
        let env = fixed();
        assert_eq!(env.start(), Cell::new(0, 0));
        assert_eq!(env.end(), Cell::new(4, 4));
        assert_eq!(env.start(), env.start());
    }

    #[test]
    fn successors_filter_walls_and_bounds() {
        let env = fixed();
        assert_eq!(env.successors(Cell::new(0, 0)), vec![Cell::new(0, 1)]);
        assert_eq!(
            env.successors(Cell::new(2, 1)),
            vec![Cell::new(2, 2), Cell::new(2, 0), Cell::new(1, 1)]
        );
        let grid = Grid::parse(crate::catalog::FIXED_LAYOUT).unwrap();
        for p in grid.bounds() {
            for n in env.successors(p) {
                assert!(grid.is_path(n));
                assert_eq!(manhattan(p, n), 1);
            }
        }
    }

    #[test]
    fn blind_environment_denies_grid_every_time() {
        let env = fixed();
        assert_eq!(env.full_grid(), Err(AccessDenied));
        let _ = env.successors(Cell::new(0, 0));
        assert_eq!(env.full_grid(), Err(AccessDenied));
    }

    #[test]
    fn visible_environment_exposes_grid() {
        let env = fixed().with_visible(true);
        let grid = env.full_grid().unwrap();
        assert_eq!(grid.rows(), 5);
        assert!(grid.is_path(Cell::new(4, 4)));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let grid = Grid::parse(crate::catalog::FIXED_LAYOUT).unwrap();
        assert_eq!(
            Environment::new(grid.clone(), Cell::new(0, 2), Cell::new(4, 4)).unwrap_err(),
            GridError::BlockedEndpoint {
                pos: Cell::new(0, 2)
            }
        );
        assert_eq!(
            Environment::new(grid, Cell::new(0, 0), Cell::new(5, 0)).unwrap_err(),
            GridError::OutOfBounds {
                pos: Cell::new(5, 0)
            }
        );
    }

    #[test]
    fn heuristic_targets_end() {
        let env = fixed();
        assert_eq!(env.heuristic(Cell::new(0, 0)), 8.0);
        let faulty = fixed().with_heuristic(FaultyHeuristic::new(1));
        let e = faulty.heuristic(Cell::new(4, 3));
        assert!((1.0..=5.0).contains(&e));
    }

    #[test]
    fn oracle_helpers() {
        let env = fixed();
        assert_eq!(shortest_distance(&env), 8);
        let path = shortest_path(&env).unwrap();
        assert_eq!(path.len(), 9);

        let split = Grid::parse(".#.").unwrap();
        let env = Environment::new(split, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(shortest_distance(&env), UNREACHABLE);
        assert_eq!(shortest_path(&env), None);
    }
}
