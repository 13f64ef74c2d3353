//! Reference solvers, one per judge outcome worth showing.
//!
//! All of them except [`Peek`] explore the maze through successor queries
//! only, the way a learner's solver has to on a blind maze.

use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;

use mazegrade_core::{Cell, Grid};
use mazegrade_env::{Environment, MazeEnv};
use mazegrade_judge::{GridSolver, Solver, SolverResult, VisibleGrid};
use mazegrade_paths::Pather;

/// Solvers selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverKind {
    #[default]
    Bfs,
    Astar,
    Dfs,
    Peek,
}

impl SolverKind {
    pub const NAMES: [&'static str; 4] = ["bfs", "astar", "dfs", "peek"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" => Some(Self::Bfs),
            "astar" => Some(Self::Astar),
            "dfs" => Some(Self::Dfs),
            "peek" => Some(Self::Peek),
            _ => None,
        }
    }

    pub fn build(self) -> Box<dyn Solver> {
        match self {
            Self::Bfs => Box::new(Bfs::default()),
            Self::Astar => Box::new(Astar::default()),
            Self::Dfs => Box::new(Dfs::default()),
            Self::Peek => Box::new(VisibleGrid(Peek)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bfs => "bfs",
            Self::Astar => "astar",
            Self::Dfs => "dfs",
            Self::Peek => "peek",
        };
        f.write_str(s)
    }
}

fn walk_back(parents: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        match parents.get(&cur) {
            Some(&p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Breadth-first search over successor queries. Always optimal.
#[derive(Debug, Default)]
pub struct Bfs {
    queue: VecDeque<Cell>,
    parents: HashMap<Cell, Cell>,
    nbuf: Vec<Cell>,
}

impl Solver for Bfs {
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult {
        let (start, end) = (env.start(), env.end());
        self.queue.clear();
        self.parents.clear();
        self.queue.push_back(start);
        let mut seen = HashSet::from([start]);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;
        while let Some(p) = self.queue.pop_front() {
            if p == end {
                found = true;
                break;
            }
            nbuf.clear();
            env.neighbors(p, &mut nbuf);
            for &q in &nbuf {
                if seen.insert(q) {
                    self.parents.insert(q, p);
                    self.queue.push_back(q);
                }
            }
        }
        self.nbuf = nbuf;

        Ok(found.then(|| walk_back(&self.parents, start, end)))
    }
}

#[derive(Debug, Clone, Copy)]
struct Open {
    cell: Cell,
    f: f64,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Open {}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap pops the smallest f first.
        other.f.total_cmp(&self.f).then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* guided by the environment's heuristic.
///
/// Optimal under the Manhattan heuristic. The faulty heuristic overestimates,
/// so on those mazes it can settle for a longer route.
#[derive(Debug, Default)]
pub struct Astar {
    g: HashMap<Cell, usize>,
    parents: HashMap<Cell, Cell>,
    closed: HashSet<Cell>,
    nbuf: Vec<Cell>,
}

impl Solver for Astar {
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult {
        let (start, end) = (env.start(), env.end());
        self.g.clear();
        self.parents.clear();
        self.closed.clear();

        let mut open = BinaryHeap::new();
        self.g.insert(start, 0);
        open.push(Open {
            cell: start,
            f: env.heuristic(start),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;
        while let Some(Open { cell, .. }) = open.pop() {
            if cell == end {
                found = true;
                break;
            }
            if !self.closed.insert(cell) {
                continue;
            }
            let g = self.g.get(&cell).copied().unwrap_or_default() + 1;
            nbuf.clear();
            env.neighbors(cell, &mut nbuf);
            for &q in &nbuf {
                if self.closed.contains(&q) || self.g.get(&q).is_some_and(|&old| old <= g) {
                    continue;
                }
                self.g.insert(q, g);
                self.parents.insert(q, cell);
                open.push(Open {
                    cell: q,
                    f: g as f64 + env.heuristic(q),
                });
            }
        }
        self.nbuf = nbuf;

        Ok(found.then(|| walk_back(&self.parents, start, end)))
    }
}

/// Depth-first search. Finds a legal path, rarely the shortest.
#[derive(Debug, Default)]
pub struct Dfs {
    stack: Vec<Cell>,
    parents: HashMap<Cell, Cell>,
    nbuf: Vec<Cell>,
}

impl Solver for Dfs {
    fn search(&mut self, env: &dyn MazeEnv) -> SolverResult {
        let (start, end) = (env.start(), env.end());
        self.stack.clear();
        self.parents.clear();
        self.stack.push(start);
        let mut seen = HashSet::new();

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;
        while let Some(p) = self.stack.pop() {
            if !seen.insert(p) {
                continue;
            }
            if p == end {
                found = true;
                break;
            }
            nbuf.clear();
            env.neighbors(p, &mut nbuf);
            for &q in &nbuf {
                if !seen.contains(&q) {
                    self.parents.insert(q, p);
                    self.stack.push(q);
                }
            }
        }
        self.nbuf = nbuf;

        Ok(found.then(|| walk_back(&self.parents, start, end)))
    }
}

/// Breadth-first search over the raw grid. Only works on visible mazes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Peek;

impl GridSolver for Peek {
    fn search(&mut self, grid: &Grid, start: Cell, end: Cell) -> SolverResult {
        let env = Environment::new(grid.clone(), start, end)?;
        Bfs::default().search(&env)
    }
}
