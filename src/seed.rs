use crate::error::{Result, SeedDefect};
use crate::{parse_rle, Coord, LiveSet};

/// Validated initial configuration of an engine: the live cells plus the
/// bootstrap `rows x cols` box they were described in.
///
/// The box only matters for rendering; cells are free to leave it later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    rows: usize,
    cols: usize,
    cells: LiveSet,
}

impl Seed {
    /// Reads a rectangular matrix where `1` marks a live cell and anything
    /// else a dead one. Accepts `u8` and `bool` rows alike.
    ///
    /// Cell `matrix[i][j]` becomes coordinate `(i, j)`.
    pub fn from_matrix<R, T>(matrix: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        let first = matrix.first().ok_or(SeedDefect::NoRows)?;
        let cols = first.as_ref().len();

        let mut cells = LiveSet::new();
        for (i, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(SeedDefect::EmptyRow { row: i }.into());
            }
            if row.len() != cols {
                return Err(SeedDefect::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
            for (j, &value) in row.iter().enumerate() {
                if value.into() == 1 {
                    cells.insert(Coord::new(i as i64, j as i64));
                }
            }
        }

        Ok(Self {
            rows: matrix.len(),
            cols,
            cells,
        })
    }

    /// Seed from an explicit list of live coordinates.
    ///
    /// Coordinates outside the `rows x cols` box are kept as they are.
    pub fn from_cells<I>(rows: usize, cols: usize, cells: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        if rows == 0 || cols == 0 {
            return Err(SeedDefect::ZeroDimensions.into());
        }
        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().map(Into::into).collect(),
        })
    }

    /// Parses a pattern in RLE format.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        parse_rle(data)
    }

    /// Fills a `rows x cols` box, each cell being alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, fill_rate: f64, seed: Option<u64>) -> Result<Self> {
        use rand::{Rng, SeedableRng};

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(SeedDefect::FillRate(fill_rate).into());
        }
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let cells = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| Coord::new(i as i64, j as i64)))
            .filter(|_| rng.gen_bool(fill_rate))
            .collect::<Vec<_>>();
        Self::from_cells(rows, cols, cells)
    }

    /// `(rows, cols)` of the bootstrap box.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    pub fn into_parts(self) -> ((usize, usize), LiveSet) {
        ((self.rows, self.cols), self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LifeError;

    #[test]
    fn test_from_matrix() {
        let seed = Seed::from_matrix(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!(seed.dimensions(), (3, 3));
        assert_eq!(
            seed.cells().sorted(),
            vec![
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );

        let bools = Seed::from_matrix(&[vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(bools.cells().len(), 2);
        assert!(bools.cells().contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_only_ones_are_alive() {
        let seed = Seed::from_matrix(&[[2u8, 1, 255]]).unwrap();
        assert_eq!(seed.cells().sorted(), vec![Coord::new(0, 1)]);
    }

    #[test]
    fn test_invalid_matrices() {
        let no_rows: &[Vec<u8>] = &[];
        assert_eq!(
            Seed::from_matrix(no_rows),
            Err(LifeError::InvalidSeed(SeedDefect::NoRows))
        );
        assert_eq!(
            Seed::from_matrix(&[vec![1u8], vec![]]),
            Err(LifeError::InvalidSeed(SeedDefect::EmptyRow { row: 1 }))
        );
        assert_eq!(
            Seed::from_matrix(&[vec![1u8, 0], vec![1]]),
            Err(LifeError::InvalidSeed(SeedDefect::Ragged {
                row: 1,
                expected: 2,
                found: 1,
            }))
        );
    }

    #[test]
    fn test_from_cells() {
        let seed = Seed::from_cells(2, 2, [Coord::new(5, 5), Coord::new(-1, 0)]).unwrap();
        assert_eq!(seed.dimensions(), (2, 2));
        assert_eq!(seed.cells().len(), 2);
        assert!(Seed::from_cells(0, 4, Vec::<Coord>::new()).is_err());
    }

    #[test]
    fn test_random() {
        let a = Seed::random(32, 48, 0.3, Some(42)).unwrap();
        let b = Seed::random(32, 48, 0.3, Some(42)).unwrap();
        assert_eq!(a, b);
        assert!(!a.cells().is_empty());
        let ((rows, cols), cells) = a.into_parts();
        assert!(cells
            .iter()
            .all(|c| (0..rows as i64).contains(&c.row) && (0..cols as i64).contains(&c.col)));

        assert!(Seed::random(4, 4, 0.0, Some(1)).unwrap().cells().is_empty());
        assert_eq!(Seed::random(4, 4, 1.0, Some(1)).unwrap().cells().len(), 16);
        assert!(Seed::random(4, 4, 1.5, None).is_err());
        assert!(Seed::random(4, 4, f64::NAN, None).is_err());
    }
}
