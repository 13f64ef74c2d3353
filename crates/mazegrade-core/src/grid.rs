//! An immutable obstacle field.
//!
//! A [`Grid`] is a rectangle of [`Tile`]s fixed at construction. It can be
//! built from nested `0`/`1` rows or parsed from an ASCII layout where `.` or
//! `0` is a path and `#` or `1` is a wall.

use std::fmt;

use crate::geom::{Bounds, Cell};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable.
    #[default]
    Path,
    /// Blocked.
    Wall,
}

impl Tile {
    /// Decode a layout character.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' | '0' => Some(Tile::Path),
            '#' | '1' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// Decode a numeric cell value (0 = path, 1 = wall).
    pub fn from_value(v: u8) -> Option<Tile> {
        match v {
            0 => Some(Tile::Path),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    /// Character used when rendering.
    pub fn as_char(self) -> char {
        match self {
            Tile::Path => '.',
            Tile::Wall => '#',
        }
    }
}

/// A rectangle of tiles. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl Grid {
    /// Build a grid from nested rows of `0` (path) / `1` (wall) values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentWidth {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                let tile = Tile::from_value(v).ok_or(GridError::InvalidValue {
                    value: v,
                    pos: Cell::new(r as i32, c as i32),
                })?;
                tiles.push(tile);
            }
        }
        Ok(Self {
            tiles,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// Parse an ASCII layout.
    ///
    /// Leading/trailing whitespace of the whole string and of each line is
    /// trimmed, so layouts can be indented inside string literals. Every line
    /// must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for (r, line) in s.trim().lines().enumerate() {
            let line = line.trim();
            let mut w = 0usize;
            for (c, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Cell::new(r as i32, c as i32),
                })?;
                tiles.push(tile);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::InconsistentWidth {
                        row: r,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        match width {
            Some(w) if w > 0 => Ok(Self {
                tiles,
                bounds: Bounds::new(rows as i32, w as i32),
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is in bounds and traversable.
    #[inline]
    pub fn is_path(&self, c: Cell) -> bool {
        self.at(c) == Some(Tile::Path)
    }

    /// All traversable cells in row-major order.
    pub fn path_cells(&self) -> Vec<Cell> {
        self.bounds.iter().filter(|&c| self.is_path(c)).collect()
    }

    /// Rows as `0`/`1` values, the inverse of [`from_rows`](Self::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.bounds.cols as usize)
            .map(|row| {
                row.iter()
                    .map(|t| match t {
                        Tile::Path => 0,
                        Tile::Wall => 1,
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(self.bounds.cols as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.as_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows or zero-width rows.
    Empty,
    /// A row differs in width from the first one.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A layout character that is neither a path nor a wall.
    InvalidChar { ch: char, pos: Cell },
    /// A numeric cell value other than 0 or 1.
    InvalidValue { value: u8, pos: Cell },
    /// A designated cell lies outside the grid.
    OutOfBounds { pos: Cell },
    /// A designated endpoint sits on a wall.
    BlockedEndpoint { pos: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty layout"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidValue { value, pos } => {
                write!(f, "grid: invalid cell value {value} at {pos}")
            }
            Self::OutOfBounds { pos } => write!(f, "grid: {pos} is out of bounds"),
            Self::BlockedEndpoint { pos } => write!(f, "grid: endpoint {pos} is a wall"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        ..#
        #..
    ";

    #[test]
    fn parse_and_query() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Cell::new(0, 2)), Some(Tile::Wall));
        assert_eq!(g.at(Cell::new(1, 1)), Some(Tile::Path));
        assert_eq!(g.at(Cell::new(2, 0)), None);
        assert!(!g.is_path(Cell::new(-1, 0)));
    }

    #[test]
    fn from_rows_matches_parse() {
        let g = Grid::from_rows(&[[0u8, 0, 1], [1, 0, 0]]).unwrap();
        assert_eq!(g, Grid::parse(ROOM).unwrap());
        assert_eq!(g.to_rows(), vec![vec![0, 0, 1], vec![1, 0, 0]]);
    }

    #[test]
    fn path_cells_skip_walls() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(
            g.path_cells(),
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn display_renders_layout() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), "..#\n#..");
    }

    #[test]
    fn rejects_bad_layouts() {
        assert_eq!(Grid::parse("  \n "), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("..\n..."),
            Err(GridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse(".x"),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Cell::new(0, 1)
            })
        );
        assert!(matches!(
            Grid::from_rows(&[[0u8, 2]]),
            Err(GridError::InvalidValue { value: 2, .. })
        ));
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
    }
}
