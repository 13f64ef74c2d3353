use mazegrade_core::Cell;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append the traversable neighbours of `p` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// Implementations must yield neighbours in a fixed order so that
    /// searches are reproducible.
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>);
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        (**self).neighbors(p, buf);
    }
}
