use mazegrade_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Defined for any pair of coordinates; saturates at `u32::MAX`.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

/// Whether `a` and `b` are one axis-aligned step apart.
#[inline]
pub fn is_adjacent(a: Cell, b: Cell) -> bool {
    manhattan(a, b) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8);
        assert_eq!(manhattan(Cell::new(2, -1), Cell::new(0, 1)), 4);
        assert_eq!(manhattan(Cell::new(3, 3), Cell::new(3, 3)), 0);
    }

    #[test]
    fn adjacency_excludes_diagonals_and_repeats() {
        let c = Cell::new(1, 1);
        assert!(is_adjacent(c, Cell::new(1, 2)));
        assert!(is_adjacent(c, Cell::new(0, 1)));
        assert!(!is_adjacent(c, Cell::new(2, 2)));
        assert!(!is_adjacent(c, c));
        assert!(!is_adjacent(c, Cell::new(3, 1)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let lo = Cell::new(i32::MIN, i32::MIN);
        let hi = Cell::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(lo, hi), u32::MAX);
        assert_eq!(manhattan(Cell::new(i32::MIN, 0), Cell::ZERO), 1 << 31);
        assert!(!is_adjacent(Cell::ZERO, Cell::new(i32::MIN, 0)));
        assert!(is_adjacent(Cell::new(i32::MAX, 0), Cell::new(i32::MAX - 1, 0)));
    }
}
