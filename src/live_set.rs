use std::collections::{hash_set, HashSet};
use std::hash::BuildHasher;

use ahash::RandomState;

use crate::Coord;

/// Fixed keys so that fingerprints agree between runs of the same build.
///
/// ahash output still depends on its version and on the CPU features the
/// binary was compiled for.
const FINGERPRINT_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Coordinates of all live cells of one generation.
///
/// Dead cells are never stored: absence means dead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Coord, RandomState>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Live coordinates in row-major order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut result = self.cells.iter().copied().collect::<Vec<_>>();
        result.sort_unstable();
        result
    }

    /// Smallest box `(top_left, bottom_right)` containing every live cell,
    /// both corners inclusive. `None` for an empty set.
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| {
            (
                Coord::new(lo.row.min(c.row), lo.col.min(c.col)),
                Coord::new(hi.row.max(c.row), hi.col.max(c.col)),
            )
        }))
    }

    /// Copy of the set with every cell shifted by `(d_row, d_col)`.
    pub fn translated(&self, d_row: i64, d_col: i64) -> Self {
        self.cells.iter().map(|c| c.moved(d_row, d_col)).collect()
    }

    /// Order-independent hash of the content, stable within a build.
    pub fn fingerprint(&self) -> u64 {
        let [k0, k1, k2, k3] = FINGERPRINT_SEEDS;
        let state = RandomState::with_seeds(k0, k1, k2, k3);
        self.cells
            .iter()
            .fold(self.cells.len() as u64, |acc, c| {
                acc.wrapping_add(state.hash_one(c))
            })
    }

    /// Approximate heap memory held by the set.
    pub fn bytes_total(&self) -> usize {
        // one control byte per bucket on top of the payload
        self.cells.capacity() * (std::mem::size_of::<Coord>() + 1)
    }
}

impl FromIterator<Coord> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for LiveSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Coord::from).collect()
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for LiveSet {
    type Item = Coord;
    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
