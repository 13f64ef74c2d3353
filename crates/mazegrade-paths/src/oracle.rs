use std::collections::{HashMap, HashSet, VecDeque};

use mazegrade_core::Cell;

use crate::traits::Pather;

/// Sentinel distance meaning "unreachable" (infinite).
pub const UNREACHABLE: usize = usize::MAX;

/// Ground-truth shortest paths by exhaustive breadth-first search.
///
/// All edges have unit weight, so the first time the goal is dequeued its
/// distance is minimal. The search only ever calls [`Pather::neighbors`]: the
/// grid behind the pather may be hidden.
///
/// Scratch state (frontier, visited set, parent links) lives in the oracle
/// and is reset at the start of every query. Nothing carries over between
/// calls with different endpoints.
#[derive(Debug, Default)]
pub struct Oracle {
    queue: VecDeque<(Cell, usize)>,
    visited: HashSet<Cell>,
    parents: HashMap<Cell, Cell>,
    nbuf: Vec<Cell>,
}

impl Oracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of steps from `from` to `to`, or [`UNREACHABLE`] when
    /// the frontier drains first.
    pub fn shortest_distance<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> usize {
        match self.search(pather, from, to, false) {
            Some((_, dist)) => dist,
            None => UNREACHABLE,
        }
    }

    /// A shortest path from `from` to `to`, both endpoints included, or
    /// `None` when `to` is unreachable.
    pub fn shortest_path<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Option<Vec<Cell>> {
        let (goal, dist) = self.search(pather, from, to, true)?;

        let mut path = Vec::with_capacity(dist + 1);
        let mut cur = goal;
        path.push(cur);
        while cur != from {
            cur = self.parents[&cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    fn search<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
        track_parents: bool,
    ) -> Option<(Cell, usize)> {
        // Reset.
        self.queue.clear();
        self.visited.clear();
        self.parents.clear();

        self.queue.push_back((from, 0));
        self.visited.insert(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some((cur, dist)) = self.queue.pop_front() {
            if cur == to {
                found = Some((cur, dist));
                break;
            }

            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);

            for &n in nbuf.iter() {
                // Mark on enqueue so no cell enters the frontier twice.
                if !self.visited.insert(n) {
                    continue;
                }
                if track_parents {
                    self.parents.insert(n, cur);
                }
                self.queue.push_back((n, dist + 1));
            }
        }

        self.nbuf = nbuf;
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::is_adjacent;
    use crate::grid_pather::GridPather;
    use mazegrade_core::Grid;

    const FIXED: &str = "
        ..#..
        #.#.#
        .....
        .#.#.
        ...#.
    ";

    /// A pather over an unbounded open plane; no grid exists behind it.
    struct OpenPlane;

    impl Pather for OpenPlane {
        fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
            buf.extend(p.neighbors_4());
        }
    }

    #[test]
    fn distance_on_fixed_maze() {
        let grid = Grid::parse(FIXED).unwrap();
        let mut oracle = Oracle::new();
        let d = oracle.shortest_distance(&GridPather::new(&grid), Cell::new(0, 0), Cell::new(4, 4));
        assert_eq!(d, 8);
    }

    #[test]
    fn path_is_contiguous_and_minimal() {
        let grid = Grid::parse(FIXED).unwrap();
        let pather = GridPather::new(&grid);
        let mut oracle = Oracle::new();
        let path = oracle
            .shortest_path(&pather, Cell::new(0, 0), Cell::new(4, 4))
            .unwrap();
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(4, 4)));
        assert_eq!(path.len() - 1, 8);
        for w in path.windows(2) {
            assert!(is_adjacent(w[0], w[1]));
            assert!(grid.is_path(w[1]));
        }
    }

    #[test]
    fn same_start_and_end() {
        let grid = Grid::parse("..").unwrap();
        let pather = GridPather::new(&grid);
        let mut oracle = Oracle::new();
        let c = Cell::new(0, 1);
        assert_eq!(oracle.shortest_distance(&pather, c, c), 0);
        assert_eq!(oracle.shortest_path(&pather, c, c), Some(vec![c]));
    }

    #[test]
    fn disconnected_pair_is_unreachable() {
        let grid = Grid::parse(
            "
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let pather = GridPather::new(&grid);
        let mut oracle = Oracle::new();
        let (a, b) = (Cell::new(0, 0), Cell::new(1, 4));
        assert_eq!(oracle.shortest_distance(&pather, a, b), UNREACHABLE);
        assert_eq!(oracle.shortest_path(&pather, a, b), None);
    }

    #[test]
    fn scratch_state_does_not_leak_between_queries() {
        let grid = Grid::parse(FIXED).unwrap();
        let pather = GridPather::new(&grid);
        let mut oracle = Oracle::new();
        assert_eq!(
            oracle.shortest_distance(&pather, Cell::new(0, 0), Cell::new(4, 4)),
            8
        );
        assert_eq!(
            oracle.shortest_distance(&pather, Cell::new(4, 4), Cell::new(2, 4)),
            2
        );
        assert_eq!(
            oracle.shortest_distance(&pather, Cell::new(0, 3), Cell::new(0, 4)),
            1
        );
    }

    #[test]
    fn works_without_any_grid() {
        let mut oracle = Oracle::new();
        let d = oracle.shortest_distance(&OpenPlane, Cell::new(0, 0), Cell::new(-3, 2));
        assert_eq!(d, 5);
        let path = oracle
            .shortest_path(&OpenPlane, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn trait_objects_are_accepted() {
        let grid = Grid::parse(FIXED).unwrap();
        let pather = GridPather::new(&grid);
        let dynp: &dyn Pather = &pather;
        let mut oracle = Oracle::new();
        assert_eq!(
            oracle.shortest_distance(dynp, Cell::new(0, 0), Cell::new(4, 4)),
            8
        );
    }
}
