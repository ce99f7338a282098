//! Dense rectangular matrices.
//!
//! Row-major storage suits the small matrices these utilities target.
//! Rectangularity is checked at construction; dimension mismatches in
//! arithmetic are reported as errors rather than panics.

use std::ops::{Index, IndexMut, Mul};

use num_traits::{One, Zero};
use thiserror::Error;

/// Errors reported by matrix construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Input rows had differing lengths.
    #[error("rows must all have the same length")]
    RaggedRows,
    /// Operand dimensions are incompatible with the operation.
    #[error("operand dimensions do not match")]
    DimensionMismatch,
    /// The operation requires a square matrix.
    #[error("matrix is not square")]
    NotSquare,
}

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T> Matrix<T> {
    /// Builds a matrix from rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::RaggedRows`] when the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(MatrixError::RaggedRows);
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = T::one();
        }
        matrix
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless both shapes agree.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(MatrixError::DimensionMismatch);
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless the column count of
    /// `self` equals the row count of `other`.
    pub fn mul(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Mul<Output = T>,
    {
        if self.num_cols != other.num_rows {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut product = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut acc = T::zero();
                for k in 0..self.num_cols {
                    acc = acc + self[(i, k)].clone() * other[(k, j)].clone();
                }
                product[(i, j)] = acc;
            }
        }
        Ok(product)
    }

    /// Sums of the main and anti diagonals, in that order.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for non-square matrices.
    pub fn diagonal_sums(&self) -> Result<(T, T), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        let n = self.num_rows;
        let mut main = T::zero();
        let mut anti = T::zero();
        for i in 0..n {
            main = main + self[(i, i)].clone();
            anti = anti + self[(i, n - 1 - i)].clone();
        }
        Ok((main, anti))
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                transposed[(j, i)] = self[(i, j)].clone();
            }
        }
        transposed
    }

    /// Per-row sums.
    #[must_use]
    pub fn row_sums(&self) -> Vec<T> {
        (0..self.num_rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .fold(T::zero(), |acc, value| acc + value.clone())
            })
            .collect()
    }

    /// Per-column sums.
    #[must_use]
    pub fn col_sums(&self) -> Vec<T> {
        (0..self.num_cols)
            .map(|j| {
                (0..self.num_rows).fold(T::zero(), |acc, i| acc + self[(i, j)].clone())
            })
            .collect()
    }
}

impl<T: Zero + Clone + Ord> Matrix<T> {
    /// The largest row sum; `None` for an empty matrix.
    #[must_use]
    pub fn max_row_sum(&self) -> Option<T> {
        self.row_sums().into_iter().max()
    }

    /// The largest column sum; `None` for an empty matrix.
    #[must_use]
    pub fn max_col_sum(&self) -> Option<T> {
        self.col_sums().into_iter().max()
    }
}

impl<T: PartialEq> Matrix<T> {
    /// Whether the matrix equals its transpose.
    ///
    /// Always false for non-square matrices.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.num_rows).all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(result, Err(MatrixError::RaggedRows));
        assert!(Matrix::<i64>::from_rows(Vec::new()).is_ok());
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 2);
        assert!(m.is_square());
        assert_eq!(m.get(1, 0), Some(&3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(0), &[1, 2]);
    }

    #[test]
    fn test_add() {
        let sum = sample().add(&sample()).unwrap();
        assert_eq!(sum, Matrix::from_rows(vec![vec![2, 4], vec![6, 8]]).unwrap());
        let wide = Matrix::<i64>::zeros(2, 3);
        assert_eq!(sample().add(&wide), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_mul() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
        let product = a.mul(&b).unwrap();
        assert_eq!(
            product,
            Matrix::from_rows(vec![vec![58, 64], vec![139, 154]]).unwrap()
        );
        assert_eq!(b.mul(&b), Err(MatrixError::DimensionMismatch));
    }

    #[test]
    fn test_diagonal_sums() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(m.diagonal_sums(), Ok((15, 15)));
        let wide = Matrix::<i64>::zeros(2, 3);
        assert_eq!(wide.diagonal_sums(), Err(MatrixError::NotSquare));
    }

    #[test]
    fn test_transpose_and_symmetry() {
        let m = sample();
        assert_eq!(
            m.transpose(),
            Matrix::from_rows(vec![vec![1, 3], vec![2, 4]]).unwrap()
        );
        assert!(!m.is_symmetric());

        let symmetric = Matrix::from_rows(vec![vec![1, 7], vec![7, 2]]).unwrap();
        assert!(symmetric.is_symmetric());
        assert_eq!(symmetric.transpose(), symmetric);
    }

    #[test]
    fn test_row_and_col_aggregates() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.row_sums(), vec![6, 15]);
        assert_eq!(m.col_sums(), vec![5, 7, 9]);
        assert_eq!(m.max_row_sum(), Some(15));
        assert_eq!(m.max_col_sum(), Some(9));
    }

    #[test]
    fn test_identity() {
        let id = Matrix::<i64>::identity(3);
        assert_eq!(id[(0, 0)], 1);
        assert_eq!(id[(0, 1)], 0);
        assert!(id.is_symmetric());
    }
}
