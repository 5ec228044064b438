use crate::error::Result;
use crate::Seed;

/// A named starting configuration.
///
/// `cells` are `(row, col)` pairs inside a `rows x cols` box.
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    pub fn seed(&self) -> Result<Seed> {
        Seed::from_cells(self.rows, self.cols, self.cells.iter().copied())
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        rows: 3,
        cols: 3,
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Block",
        rows: 4,
        cols: 4,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Toad",
        rows: 4,
        cols: 4,
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Beacon",
        rows: 4,
        cols: 4,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        // one dead row and column around the gun, room below for its gliders
        rows: 20,
        cols: 38,
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2), (5, 11), (6, 11), (7, 11),
            (4, 12), (8, 12), (3, 13), (9, 13), (3, 14), (9, 14), (6, 15),
            (4, 16), (8, 16), (5, 17), (6, 17), (7, 17), (6, 18), (3, 21),
            (4, 21), (5, 21), (3, 22), (4, 22), (5, 22), (2, 23), (6, 23),
            (1, 25), (2, 25), (6, 25), (7, 25), (3, 35), (4, 35), (3, 36),
            (4, 36),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
