//! Distance estimates injected into environments.
//!
//! A heuristic is a capability object: it is handed to an environment at
//! construction and owns whatever state it needs. Nothing here touches
//! global randomness.

use std::cell::RefCell;

use mazegrade_core::Cell;
use mazegrade_paths::manhattan;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Estimate of the remaining distance between two cells.
///
/// Estimates are non-negative but need not be admissible, and need not be
/// consistent between calls with the same arguments.
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

impl<F: Fn(Cell, Cell) -> f64> Heuristic for F {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self(from, to)
    }
}

/// The exact Manhattan distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        manhattan(from, to) as f64
    }
}

/// Manhattan distance scaled by a fresh random factor on every call.
///
/// The factor is drawn uniformly from `[min_factor, max_factor]`
/// (`[1, 5]` by default), so two calls for the same cell almost never agree
/// and the estimate usually overshoots.
#[derive(Debug)]
pub struct FaultyHeuristic {
    rng: RefCell<StdRng>,
    min_factor: f64,
    max_factor: f64,
}

impl FaultyHeuristic {
    /// Default factor range.
    pub const FACTOR_RANGE: (f64, f64) = (1.0, 5.0);

    /// A faulty heuristic with its own generator seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        let (min_factor, max_factor) = Self::FACTOR_RANGE;
        Self::with_factors(seed, min_factor, max_factor)
    }

    /// Use a custom factor range. The bounds are swapped if given in the
    /// wrong order and clamped to be non-negative.
    pub fn with_factors(seed: u64, min_factor: f64, max_factor: f64) -> Self {
        let lo = min_factor.min(max_factor).max(0.0);
        let hi = min_factor.max(max_factor).max(0.0);
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            min_factor: lo,
            max_factor: hi,
        }
    }
}

impl Heuristic for FaultyHeuristic {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        let k = self
            .rng
            .borrow_mut()
            .random_range(self.min_factor..=self.max_factor);
        manhattan(from, to) as f64 * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_exact() {
        let h = ManhattanHeuristic;
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(4, 4)), 8.0);
        assert_eq!(h.estimate(Cell::new(2, 2), Cell::new(2, 2)), 0.0);
    }

    #[test]
    fn faulty_stays_within_factor_bounds() {
        let h = FaultyHeuristic::new(7);
        let (a, b) = (Cell::new(0, 0), Cell::new(1, 2));
        for _ in 0..200 {
            let e = h.estimate(a, b);
            assert!((3.0..=15.0).contains(&e), "estimate {e} out of range");
        }
    }

    #[test]
    fn faulty_varies_between_calls() {
        let h = FaultyHeuristic::new(11);
        let (a, b) = (Cell::new(0, 0), Cell::new(3, 3));
        let first = h.estimate(a, b);
        assert!((0..50).any(|_| h.estimate(a, b) != first));
    }

    #[test]
    fn faulty_is_reproducible_per_seed() {
        let (a, b) = (Cell::new(0, 0), Cell::new(2, 5));
        let x: Vec<f64> = {
            let h = FaultyHeuristic::new(42);
            (0..5).map(|_| h.estimate(a, b)).collect()
        };
        let y: Vec<f64> = {
            let h = FaultyHeuristic::new(42);
            (0..5).map(|_| h.estimate(a, b)).collect()
        };
        assert_eq!(x, y);
    }

    #[test]
    fn zero_distance_stays_zero() {
        let h = FaultyHeuristic::new(3);
        assert_eq!(h.estimate(Cell::new(1, 1), Cell::new(1, 1)), 0.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let h = |a: Cell, b: Cell| ((a.row - b.row).abs()) as f64;
        assert_eq!(h.estimate(Cell::new(0, 9), Cell::new(3, 0)), 3.0);
    }
}
