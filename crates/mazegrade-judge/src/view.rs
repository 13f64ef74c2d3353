//! The view of a maze handed to learner solvers.

use std::cell::Cell as Counter;

use mazegrade_core::{Cell, Grid};
use mazegrade_env::{AccessDenied, MazeEnv};
use mazegrade_paths::Pather;

/// Query-counting wrapper around an environment.
///
/// Answers exactly what the inner environment answers, and additionally
/// records denied grid reads and enforces an optional budget on successor
/// queries. Once the budget is spent every further query yields no
/// successors, so a well-formed search winds down on its own.
pub struct RestrictedView<'a, E: ?Sized> {
    env: &'a E,
    limit: Option<usize>,
    queries: Counter<usize>,
    exhausted: Counter<bool>,
    denied: Counter<bool>,
}

impl<'a, E: MazeEnv + ?Sized> RestrictedView<'a, E> {
    pub fn new(env: &'a E, limit: Option<usize>) -> Self {
        Self {
            env,
            limit,
            queries: Counter::new(0),
            exhausted: Counter::new(false),
            denied: Counter::new(false),
        }
    }

    /// Successor queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }

    /// Whether a query arrived after the budget was spent.
    pub fn exhausted(&self) -> bool {
        self.exhausted.get()
    }

    /// Whether the solver asked for the grid of a blind maze.
    pub fn denied(&self) -> bool {
        self.denied.get()
    }
}

impl<E: MazeEnv + ?Sized> Pather for RestrictedView<'_, E> {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        if let Some(limit) = self.limit {
            if self.queries.get() >= limit {
                self.exhausted.set(true);
                return;
            }
        }
        self.queries.set(self.queries.get() + 1);
        self.env.neighbors(p, buf);
    }
}

impl<E: MazeEnv + ?Sized> MazeEnv for RestrictedView<'_, E> {
    fn start(&self) -> Cell {
        self.env.start()
    }

    fn end(&self) -> Cell {
        self.env.end()
    }

    fn heuristic(&self, p: Cell) -> f64 {
        self.env.heuristic(p)
    }

    fn full_grid(&self) -> Result<&Grid, AccessDenied> {
        self.env.full_grid().inspect_err(|_| self.denied.set(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrade_env::Environment;

    fn open() -> Environment {
        let grid = Grid::parse("...\n...").unwrap();
        Environment::new(grid, Cell::new(0, 0), Cell::new(1, 2)).unwrap()
    }

    #[test]
    fn passes_queries_through() {
        let env = open();
        let view = RestrictedView::new(&env, None);
        assert_eq!(view.start(), env.start());
        assert_eq!(view.end(), env.end());
        assert_eq!(view.heuristic(Cell::new(0, 0)), 3.0);
        assert_eq!(view.successors(Cell::new(0, 0)), env.successors(Cell::new(0, 0)));
        assert_eq!(view.queries(), 1);
        assert!(!view.exhausted());
    }

    #[test]
    fn records_denied_grid_access() {
        let env = open();
        let view = RestrictedView::new(&env, None);
        assert_eq!(view.full_grid(), Err(AccessDenied));
        assert!(view.denied());

        let visible = open().with_visible(true);
        let view = RestrictedView::new(&visible, None);
        assert!(view.full_grid().is_ok());
        assert!(!view.denied());
    }

    #[test]
    fn budget_cuts_off_successors() {
        let env = open();
        let view = RestrictedView::new(&env, Some(2));
        assert!(!view.successors(Cell::new(0, 0)).is_empty());
        assert!(!view.successors(Cell::new(0, 1)).is_empty());
        assert!(!view.exhausted());
        assert!(view.successors(Cell::new(0, 2)).is_empty());
        assert!(view.exhausted());
        assert_eq!(view.queries(), 2);
    }
}
