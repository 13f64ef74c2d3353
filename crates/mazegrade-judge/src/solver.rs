//! The contract learner solvers implement.

use mazegrade_core::{Cell, Grid};
use mazegrade_env::MazeEnv;

/// Error type solvers may return.
pub type SolverError = Box<dyn std::error::Error + Send + Sync>;

/// What a solver returns: a path from start to end, or `None` for
/// "no path found".
pub type SolverResult = Result<Option<Vec<Cell>>, SolverError>;

/// A learner's search routine.
///
/// The solver only ever sees the restricted interface. Asking for the full
/// grid of a blind maze fails with
/// [`AccessDenied`](mazegrade_env::AccessDenied).
pub trait Solver {
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult;
}

impl<F> Solver for F
where
    F: FnMut(&dyn MazeEnv) -> SolverResult,
{
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult {
        self(env)
    }
}

/// A simplified solver that works on the raw grid.
pub trait GridSolver {
    fn search(&mut self, grid: &Grid, start: Cell, end: Cell) -> SolverResult;
}

/// Runs a [`GridSolver`] as a [`Solver`] by fetching the full grid first.
///
/// On a blind maze the fetch fails and the trial is reported as access
/// denied.
#[derive(Debug, Clone, Default)]
pub struct VisibleGrid<S>(pub S);

impl<S: GridSolver> Solver for VisibleGrid<S> {
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult {
        let grid = env.full_grid()?;
        self.0.search(grid, env.start(), env.end())
    }
}
