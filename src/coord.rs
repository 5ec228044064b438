use std::fmt;

/// Offsets of the eight neighbors: NW, N, NE, W, E, SW, S, SE.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Position of a cell on the unbounded grid.
///
/// Rows grow downwards and columns grow to the right; both may be negative.
/// Ordering is row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate shifted by `(d_row, d_col)`.
    pub const fn moved(self, d_row: i64, d_col: i64) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// All eight adjacent coordinates, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(d_row, d_col)| self.moved(d_row, d_col))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i64, i64) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
