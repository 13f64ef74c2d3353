//! Hand-authored maze layouts.
//!
//! `.` is a path, `#` a wall. Layouts are parsed once into a [`Catalog`].

use mazegrade_core::{Cell, Grid, GridError};

/// The fixed teaching maze. Start (0, 0), end (4, 4), shortest path 8.
pub const FIXED_LAYOUT: &str = "
    ..#..
    #.#.#
    .....
    .#.#.
    ...#.
";

/// Start of [`FIXED_LAYOUT`].
pub const FIXED_START: Cell = Cell::new(0, 0);
/// End of [`FIXED_LAYOUT`].
pub const FIXED_END: Cell = Cell::new(4, 4);

/// Built-in layouts as `(name, layout)` pairs.
pub const BUILTIN: &[(&str, &str)] = &[
    ("fixed", FIXED_LAYOUT),
    (
        "hook",
        "
        .....
        .###.
        .#...
        .#.#.
        ...#.
        ",
    ),
    (
        "corridors",
        "
        ..#....
        .##.##.
        ...#...
        ##...#.
        ...#.#.
        .#.#...
        .#...#.
        ",
    ),
    (
        "split",
        "
        ....#...
        .##.#.#.
        .#..#.#.
        ....#...
        ",
    ),
    (
        "open",
        "
        ......
        ......
        ......
        ......
        ",
    ),
];

/// A named collection of parsed layouts.
#[derive(Debug, Clone)]
pub struct Catalog {
    layouts: Vec<(String, Grid)>,
}

impl Catalog {
    /// Parse the [`BUILTIN`] layouts.
    pub fn builtin() -> Result<Self, GridError> {
        Self::parse(BUILTIN.iter().copied())
    }

    /// Parse `(name, layout)` pairs.
    pub fn parse<'a>(
        layouts: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, GridError> {
        let layouts = layouts
            .into_iter()
            .map(|(name, s)| Ok((name.to_string(), Grid::parse(s)?)))
            .collect::<Result<Vec<_>, GridError>>()?;
        Ok(Self { layouts })
    }

    /// Build a catalog from already constructed grids.
    pub fn from_grids(layouts: impl IntoIterator<Item = (String, Grid)>) -> Self {
        Self {
            layouts: layouts.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// The `i`-th layout and its name.
    pub fn get(&self, i: usize) -> Option<(&str, &Grid)> {
        self.layouts.get(i).map(|(n, g)| (n.as_str(), g))
    }

    /// Look a layout up by name.
    pub fn by_name(&self, name: &str) -> Option<&Grid> {
        self.layouts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.layouts.iter().map(|(n, g)| (n.as_str(), g))
    }
}
