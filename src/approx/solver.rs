//! Dense linear systems in extended precision.

use std::fmt;

use crate::utils::Extended;

/// Pivots smaller than this fraction of the largest matrix entry are treated
/// as zero.
const SINGULAR_EXPONENT: i64 = -120;

/// A square system `A·x = b` stored as an augmented matrix.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    size: usize,
    rows: Vec<Vec<Extended>>,
}

impl LinearSystem {
    /// Creates a system of `size` equations in `size` unknowns, with every
    /// entry zero.
    pub fn new(size: usize) -> LinearSystem {
        LinearSystem {
            size,
            rows: vec![vec![Extended::ZERO; size + 1]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the coefficient of unknown `col` in equation `row`.
    pub fn set(&mut self, row: usize, col: usize, value: Extended) {
        assert!(col < self.size);

        self.rows[row][col] = value;
    }

    /// Sets the right-hand side of equation `row`.
    pub fn set_rhs(&mut self, row: usize, value: Extended) {
        self.rows[row][self.size] = value;
    }

    fn magnitude(&self) -> Extended {
        self.rows
            .iter()
            .flat_map(|row| &row[..self.size])
            .map(Extended::abs)
            .max()
            .unwrap_or(Extended::ZERO)
    }

    /// Solves the system by Gaussian elimination with partial pivoting.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx_libm::approx::LinearSystem;
    /// # use approx_libm::utils::Extended;
    /// #
    /// let mut system = LinearSystem::new(2);
    ///
    /// system.set(0, 0, Extended::from(2));
    /// system.set(0, 1, Extended::from(1));
    /// system.set_rhs(0, Extended::from(5));
    /// system.set(1, 0, Extended::from(1));
    /// system.set(1, 1, Extended::from(-1));
    /// system.set_rhs(1, Extended::from(1));
    ///
    /// let solution = system.solve().unwrap();
    ///
    /// assert_eq!(solution, [Extended::from(2), Extended::from(1)]);
    /// ```
    pub fn solve(mut self) -> Result<Vec<Extended>, SolveError> {
        let n = self.size;

        if n == 0 {
            return Err(SolveError::Empty);
        }

        let threshold =
            self.magnitude() * Extended::power_of_2(SINGULAR_EXPONENT);

        for col in 0..n {
            let pivot = (col..n)
                .max_by(|&a, &b| {
                    self.rows[a][col].abs().cmp(&self.rows[b][col].abs())
                })
                .unwrap_or(col);

            let magnitude = self.rows[pivot][col].abs();

            if magnitude.is_zero() || magnitude < threshold {
                return Err(SolveError::Singular { column: col });
            }

            self.rows.swap(col, pivot);

            let (upper, lower) = self.rows.split_at_mut(col + 1);
            let pivot_row = &upper[col];

            for row in lower {
                let factor = &row[col] / &pivot_row[col];

                if factor.is_zero() {
                    continue;
                }

                row[col] = Extended::ZERO;

                for j in col + 1..=n {
                    row[j] = &row[j] - &(&factor * &pivot_row[j]);
                }
            }
        }

        let mut solution = vec![Extended::ZERO; n];

        for i in (0..n).rev() {
            let row = &self.rows[i];

            let sum = (i + 1..n).fold(row[n].clone(), |acc, j| {
                acc - &(&row[j] * &solution[j])
            });

            solution[i] = sum / &row[i];
        }

        Ok(solution)
    }
}

/// An error from solving a linear system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// No usable pivot was found while eliminating `column`.
    Singular { column: usize },
    Empty,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Singular { column } => {
                write!(f, "singular system (no pivot in column {column})")
            }
            SolveError::Empty => write!(f, "empty system"),
        }
    }
}

impl std::error::Error for SolveError {}
