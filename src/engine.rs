use crate::error::Result;
use crate::{Coord, Engine, LiveSet, NiceInt, Seed};

/// Births and deaths caused by one call to [`SparseEngine::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub births: usize,
    pub deaths: usize,
}

/// The life rule: whether a cell is alive in the next generation.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}

/// Game of Life on an unbounded grid, storing only the live cells.
///
/// Every generation is built into a fresh [`LiveSet`] while the previous one
/// is only read, then replaces it wholesale.
#[derive(Clone, Debug)]
pub struct SparseEngine {
    cells: LiveSet,
    rows: usize,
    cols: usize,
    generation: u64,
}

impl SparseEngine {
    pub fn new(seed: Seed) -> Self {
        let ((rows, cols), cells) = seed.into_parts();
        Self {
            cells,
            rows,
            cols,
            generation: 0,
        }
    }

    /// Shorthand for [`Seed::from_matrix`] followed by [`SparseEngine::new`].
    pub fn from_matrix<R, T>(matrix: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        Seed::from_matrix(matrix).map(Self::new)
    }

    /// Number of live neighbors of `coord` in the current generation.
    pub fn count_live_neighbors(&self, coord: Coord) -> u8 {
        coord.neighbors().filter(|n| self.cells.contains(n)).count() as u8
    }

    /// Cells that may be alive in the next generation: live cells and their
    /// neighbors, each listed once. Any other cell has no live neighbor.
    fn candidates(&self) -> LiveSet {
        let mut result = LiveSet::with_capacity(self.cells.len() * 9);
        for &cell in &self.cells {
            result.insert(cell);
            for n in cell.neighbors() {
                result.insert(n);
            }
        }
        result
    }

    /// Replaces the current generation with the next one.
    pub fn advance(&mut self) -> Transition {
        let mut next = LiveSet::with_capacity(self.cells.len());
        let mut transition = Transition::default();

        for cell in self.candidates() {
            let alive = self.cells.contains(&cell);
            let survives = next_state(alive, self.count_live_neighbors(cell));
            match (alive, survives) {
                (true, false) => transition.deaths += 1,
                (false, true) => transition.births += 1,
                _ => {}
            }
            if survives {
                next.insert(cell);
            }
        }

        self.cells = next;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.cells.len(),
            births = transition.births,
            deaths = transition.deaths,
            "advanced"
        );
        transition
    }

    /// Read-only view of the current generation.
    pub fn live_cells(&self) -> &LiveSet {
        &self.cells
    }

    /// `(rows, cols)` of the seed; live cells may lie outside of it.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

impl Engine for SparseEngine {
    fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.clone())
    }

    fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    fn current_state(&self) -> LiveSet {
        self.cells.clone()
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseEngine::dimensions(self)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.cells.len()
    }

    fn hash(&self) -> u64 {
        self.cells.fingerprint()
    }

    fn bytes_total(&self) -> usize {
        self.cells.bytes_total()
    }

    fn statistics(&self) -> String {
        let mut s = format!(
            "Generation: {}\nPopulation: {}\nMemory: {} bytes\n",
            NiceInt::from(self.generation),
            NiceInt::from_usize(self.population()),
            NiceInt::from_usize(self.bytes_total()),
        );
        if let Some((lo, hi)) = self.cells.bounding_box() {
            s += &format!("Bounds: {lo} .. {hi}\n");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(cells: &[(i64, i64)]) -> SparseEngine {
        SparseEngine::new(Seed::from_cells(4, 4, cells.iter().copied().map(Coord::from)).unwrap())
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, {n} neighbors");
            assert_eq!(next_state(false, n), n == 3, "dead, {n} neighbors");
        }
    }

    #[test]
    fn test_count_live_neighbors() {
        let e = engine(&[(0, 0), (0, 1), (1, 0), (5, 5)]);
        assert_eq!(e.count_live_neighbors(Coord::new(1, 1)), 3);
        assert_eq!(e.count_live_neighbors(Coord::new(0, 0)), 2);
        assert_eq!(e.count_live_neighbors(Coord::new(-1, -1)), 1);
        assert_eq!(e.count_live_neighbors(Coord::new(5, 5)), 0);
    }

    #[test]
    fn test_transition_counts() {
        // blinker: two ends die, two cells are born
        let mut e = engine(&[(1, 0), (1, 1), (1, 2)]);
        let t = e.advance();
        assert_eq!(t, Transition { births: 2, deaths: 2 });
        assert_eq!(e.generation(), 1);
        assert_eq!(e.population(), 3);
    }

    #[test]
    fn test_statistics() {
        let mut e = engine(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        e.update(3);
        let stats = e.statistics();
        assert!(stats.contains("Generation: 3"), "{stats}");
        assert!(stats.contains("Population: 4"), "{stats}");
        assert!(stats.contains("Bounds: (0, 0) .. (1, 1)"), "{stats}");
    }
}
