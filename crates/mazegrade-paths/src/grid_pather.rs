use mazegrade_core::{Cell, Grid};

use crate::traits::Pather;

/// [`Pather`] over a [`Grid`]: the in-bounds path cells among the four
/// axis-aligned neighbours, in [`Cell::neighbors_4`] order.
///
/// Cells outside the grid have no neighbours.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        if !self.grid.contains(p) {
            return;
        }
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.grid.is_path(n)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;

    #[test]
    fn neighbors_are_in_bounds_path_and_adjacent() {
        let grid = Grid::parse(
            "
            ..#..
            #.#.#
            .....
            .#.#.
            ...#.
            ",
        )
        .unwrap();
        let pather = GridPather::new(&grid);
        let mut buf = Vec::new();
        for p in grid.bounds() {
            buf.clear();
            pather.neighbors(p, &mut buf);
            for &n in &buf {
                assert!(grid.contains(n), "{n} out of bounds");
                assert!(grid.is_path(n), "{n} is a wall");
                assert_eq!(manhattan(p, n), 1);
            }
        }
    }

    #[test]
    fn neighbor_order_is_fixed() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        let mut buf = Vec::new();
        GridPather::new(&grid).neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Cell::new(1, 2),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn cells_outside_the_grid_have_no_neighbors() {
        let grid = Grid::parse("...\n...").unwrap();
        let pather = GridPather::new(&grid);
        let mut buf = Vec::new();
        for p in [
            Cell::new(-1, 0),
            Cell::new(0, 3),
            Cell::new(i32::MAX, 0),
            Cell::new(0, i32::MAX),
            Cell::new(i32::MIN, i32::MIN),
        ] {
            pather.neighbors(p, &mut buf);
            assert!(buf.is_empty(), "{p} has neighbours {buf:?}");
        }
    }
}
