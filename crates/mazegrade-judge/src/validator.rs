//! Structural and optimality checks for candidate paths.
//!
//! The validator trusts nothing about the path and only asks the environment
//! for its endpoints and successors. It never reads the full grid, so it
//! works the same on blind and visible mazes.

use log::{debug, warn};
use mazegrade_core::Cell;
use mazegrade_env::MazeEnv;
use mazegrade_paths::{Oracle, Pather, UNREACHABLE, is_adjacent};

use crate::error::ValidationError;

/// How strict validation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Any legal path from start to end.
    Feasible,
    /// A legal path of minimal length.
    #[default]
    Optimal,
}

/// Facts about an accepted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub mode: Mode,
    /// Number of moves, i.e. `path.len() - 1`.
    pub steps: usize,
    /// BFS minimum; only computed in [`Mode::Optimal`].
    pub minimum: Option<usize>,
}

/// Path validator with a reusable oracle.
#[derive(Debug, Default)]
pub struct Validator {
    oracle: Oracle,
    nbuf: Vec<Cell>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `path` against `env`.
    ///
    /// Checks run in order and stop at the first failure: presence,
    /// endpoints, then every step (adjacency before successor membership),
    /// and finally, in [`Mode::Optimal`], length against the BFS minimum.
    /// [`Mode::Feasible`] never runs the search.
    pub fn validate<E: MazeEnv + ?Sized>(
        &mut self,
        path: Option<&[Cell]>,
        env: &E,
        mode: Mode,
    ) -> Result<Verdict, ValidationError> {
        let path = match path {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ValidationError::EmptyPath),
        };

        let (start, end) = (env.start(), env.end());
        let (first, last) = (path[0], path[path.len() - 1]);
        if first != start {
            return Err(ValidationError::WrongStart {
                expected: start,
                found: first,
            });
        }
        if last != end {
            return Err(ValidationError::WrongEnd {
                expected: end,
                found: last,
            });
        }

        for (i, w) in path.windows(2).enumerate() {
            let (from, to) = (w[0], w[1]);
            let index = i + 1;
            if !is_adjacent(from, to) {
                return Err(ValidationError::IllegalJump { index, from, to });
            }
            self.nbuf.clear();
            env.neighbors(from, &mut self.nbuf);
            if !self.nbuf.contains(&to) {
                return Err(ValidationError::Collision { index, from, to });
            }
        }

        let steps = path.len() - 1;
        debug!("path of {steps} steps is structurally valid");

        if mode == Mode::Feasible {
            return Ok(Verdict {
                mode,
                steps,
                minimum: None,
            });
        }

        let minimum = self.minimum_steps(env);
        if steps > minimum {
            return Err(ValidationError::Suboptimal {
                actual: steps,
                minimum,
            });
        }
        if steps < minimum {
            // A legal path shorter than BFS means the oracle disagrees with
            // the successor relation.
            warn!("oracle inconsistency: legal path of {steps} steps, oracle minimum {minimum}");
        }
        Ok(Verdict {
            mode,
            steps,
            minimum: (minimum != UNREACHABLE).then_some(minimum),
        })
    }

    /// Shortest start-to-end distance of `env`, or [`UNREACHABLE`].
    pub fn minimum_steps<E: MazeEnv + ?Sized>(&mut self, env: &E) -> usize {
        self.oracle.shortest_distance(env, env.start(), env.end())
    }

    /// A shortest start-to-end path of `env`, if any.
    pub fn reference_path<E: MazeEnv + ?Sized>(&mut self, env: &E) -> Option<Vec<Cell>> {
        self.oracle.shortest_path(env, env.start(), env.end())
    }
}
