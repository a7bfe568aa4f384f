//! Dense row-major matrix store
//!
//! Rows are kept as separate vectors so that row exchanges are a pointer swap.
//! All accessors are bounds-checked and report failures as [`MatrixError`].

use std::fmt::{self, Display};
use std::ops::{Index, Range};
use std::str::FromStr;

use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid matrix dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Row {row} out of range for a matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("Row has {found} entries, expected {expected}")]
    RowLength { expected: usize, found: usize },
    #[error("Dimension mismatch: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("Matrix is singular: row {row} has no pivot")]
    Singular { row: usize },
    #[error("Invalid entry {token:?} on line {line}")]
    Parse { line: usize, token: String },
    #[error("No matrix rows found")]
    Empty,
}

/// Dense matrix over `T`, at least 1x1
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Create a zero matrix with given dimensions
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![vec![T::zero(); cols]; rows],
        })
    }

    /// Create an identity matrix of given size
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        Self::padded(size, size, Vec::new())
    }

    /// Create a matrix from a list of equally long rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        check_dimensions(rows.len(), cols)?;
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::RowLength {
                expected: cols,
                found: bad.len(),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows,
        })
    }

    /// Create a `rows x cols` matrix whose top-left corner is `block`.
    ///
    /// Every entry the block does not cover is taken from the identity
    /// matrix: one on the diagonal, zero elsewhere. The block may be empty
    /// or ragged but must fit inside the requested size.
    pub fn padded(rows: usize, cols: usize, block: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        check_dimensions(rows, cols)?;
        let block_cols = block.iter().map(Vec::len).max().unwrap_or(0);
        if block.len() > rows || block_cols > cols {
            return Err(MatrixError::DimensionMismatch {
                left_rows: rows,
                left_cols: cols,
                right_rows: block.len(),
                right_cols: block_cols,
            });
        }

        let mut data = Vec::with_capacity(rows);
        let mut block = block.into_iter();
        for row in 0..rows {
            let values = block.next().unwrap_or_default();
            data.push(conform_row(values, row, cols));
        }
        Ok(Self { rows, cols, data })
    }

    /// Replace a row. With `conform`, a short row is padded with the
    /// identity pattern of that row index.
    pub fn set_row(&mut self, row: usize, values: Vec<T>, conform: bool) -> Result<(), MatrixError> {
        self.check_row(row)?;
        self.data[row] = self.fit_row(values, row, conform)?;
        Ok(())
    }

    /// Insert a row at the top of the matrix
    pub fn push_row(&mut self, values: Vec<T>, conform: bool) -> Result<(), MatrixError> {
        let values = self.fit_row(values, 0, conform)?;
        self.data.insert(0, values);
        self.rows += 1;
        Ok(())
    }

    /// Append a row at the bottom of the matrix
    pub fn append_row(&mut self, values: Vec<T>, conform: bool) -> Result<(), MatrixError> {
        let values = self.fit_row(values, self.rows, conform)?;
        self.data.push(values);
        self.rows += 1;
        Ok(())
    }

    fn fit_row(&self, values: Vec<T>, row: usize, conform: bool) -> Result<Vec<T>, MatrixError> {
        if values.len() > self.cols || (!conform && values.len() != self.cols) {
            return Err(MatrixError::RowLength {
                expected: self.cols,
                found: values.len(),
            });
        }
        Ok(conform_row(values, row, self.cols))
    }

    /// Matrix product `self * other`
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(self.mismatch(other));
        }

        let mut result = Self::zeros(self.rows, other.cols)?;
        for (i, row) in self.iter_rows().enumerate() {
            for j in 0..other.cols {
                result.data[i][j] = row
                    .iter()
                    .zip(other.data.iter())
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b[j].clone());
            }
        }
        Ok(result)
    }

    /// Matrix-vector product `self * x`
    pub fn mul_vector(&self, x: &[T]) -> Result<Vec<T>, MatrixError> {
        if x.len() != self.cols {
            return Err(MatrixError::RowLength {
                expected: self.cols,
                found: x.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }
}

impl<T: Clone> Matrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get the entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_cell(row, col)?;
        Ok(self.data[row][col].clone())
    }

    /// Overwrite the entry at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_cell(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Borrow a full row
    pub fn get_row(&self, row: usize) -> Result<&[T], MatrixError> {
        self.check_row(row)?;
        Ok(&self.data[row])
    }

    /// Mutably borrow a full row. The row length cannot change through it.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T], MatrixError> {
        self.check_row(row)?;
        Ok(&mut self.data[row])
    }

    /// Exchange two rows
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.data.swap(a, b);
        Ok(())
    }

    /// Place `other` to the right of `self`, giving `[self | other]`
    pub fn augment(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.rows != other.rows {
            return Err(self.mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(left, right)| left.iter().chain(right.iter()).cloned().collect())
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols + other.cols,
            data,
        })
    }

    /// Copy out the block covering `rows` x `cols`
    pub fn sub_matrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self, MatrixError> {
        check_dimensions(rows.len(), cols.len())?;
        if rows.end > self.rows || cols.end > self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row: rows.end - 1,
                col: cols.end - 1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let data = self.data[rows.clone()]
            .iter()
            .map(|row| row[cols.clone()].to_vec())
            .collect();
        Ok(Self {
            rows: rows.len(),
            cols: cols.len(),
            data,
        })
    }

    /// Iterate over rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(Vec::as_slice)
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row < self.rows {
            Ok(())
        } else {
            Err(MatrixError::RowOutOfRange {
                row,
                rows: self.rows,
            })
        }
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn mismatch(&self, other: &Self) -> MatrixError {
        MatrixError::DimensionMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        Err(MatrixError::InvalidDimensions { rows, cols })
    } else {
        Ok(())
    }
}

/// Extend `values` to `cols` entries using the identity row for `row`
fn conform_row<T: Zero + One>(mut values: Vec<T>, row: usize, cols: usize) -> Vec<T> {
    for col in values.len()..cols {
        values.push(if col == row { T::one() } else { T::zero() });
    }
    values
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

/// Formats each row as `| a b c |`, one row per line. A precision such as
/// `{:.2}` is applied to every entry.
impl<T: Display + Clone> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for value in row {
                match f.precision() {
                    Some(precision) => write!(f, " {value:.precision$}")?,
                    None => write!(f, " {value}")?,
                }
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

/// Parses one row per line with entries separated by whitespace or commas.
/// Blank lines and lines starting with `#` are skipped.
impl<T: FromStr + Clone + Zero + One> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<T>().map_err(|_| MatrixError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<T>, _>>()?;
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(vec![
            vec![3.0, 4.0, 5.0, 8.0],
            vec![3.0, 4.0, 5.0, 4.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_matrix() {
        let matrix: Matrix<f64> = Matrix::identity(3).unwrap();
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(1, 1)], 1.0);
        assert_eq!(matrix[(2, 2)], 1.0);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(1, 2)], 0.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Matrix::<f64>::zeros(0, 3),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            Matrix::<f64>::from_rows(vec![]),
            Err(MatrixError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::RowLength { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_padded_extends_with_identity() {
        let block = vec![vec![0.0, 4.0, 8.0], vec![0.0, 3.0, 8.0], vec![0.0, 1.0, 8.0]];
        let matrix = Matrix::padded(5, 5, block.clone()).unwrap();

        for (row, values) in block.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                assert_eq!(matrix.get(row, col).unwrap(), *value);
            }
        }
        for row in 3..5 {
            for col in 0..5 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(matrix.get(row, col).unwrap(), expected);
            }
        }
        assert_eq!(matrix.get(0, 4).unwrap(), 0.0);
    }

    #[test]
    fn test_padded_rejects_oversized_block() {
        let block = vec![vec![1.0, 2.0, 3.0]];
        assert!(matches!(
            Matrix::padded(2, 2, block),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_accessors_bounds_checked() {
        let mut matrix = sample();
        assert_eq!(matrix.get(1, 3).unwrap(), 4.0);
        assert!(matches!(
            matrix.get(2, 0),
            Err(MatrixError::IndexOutOfRange { row: 2, col: 0, .. })
        ));
        assert!(matrix.set(0, 4, 1.0).is_err());
        matrix.set(0, 0, 9.0).unwrap();
        assert_eq!(matrix[(0, 0)], 9.0);
        assert_eq!(matrix.get_row(1).unwrap(), &[3.0, 4.0, 5.0, 4.0]);
        assert!(matches!(
            matrix.get_row(2),
            Err(MatrixError::RowOutOfRange { row: 2, rows: 2 })
        ));
    }

    #[test]
    fn test_set_row() {
        let mut matrix = sample();
        matrix.set_row(0, vec![0.0, 4.0, 9.0, 2.0], false).unwrap();
        assert_eq!(matrix.get_row(0).unwrap(), &[0.0, 4.0, 9.0, 2.0]);

        assert!(matrix.set_row(1, vec![1.0], false).is_err());
        assert!(matrix.set_row(1, vec![1.0; 5], true).is_err());
        assert!(matrix.set_row(9, vec![1.0; 4], false).is_err());

        matrix.set_row(1, vec![7.0], true).unwrap();
        assert_eq!(matrix.get_row(1).unwrap(), &[7.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_push_and_append_row() {
        let mut matrix = Matrix::from_rows(vec![vec![3.0, 4.0, 5.0], vec![3.0, 4.0, 5.0]]).unwrap();
        matrix.push_row(vec![4.0], true).unwrap();
        assert_eq!(matrix.get_row(0).unwrap(), &[4.0, 0.0, 0.0]);
        assert_eq!(matrix.rows(), 3);

        matrix.append_row(vec![0.0, 1.0], true).unwrap();
        assert_eq!(matrix.get_row(3).unwrap(), &[0.0, 1.0, 0.0]);
        assert_eq!(matrix.size(), (4, 3));

        assert!(matrix.append_row(vec![1.0], false).is_err());
        assert!(matrix.push_row(vec![1.0, 2.0, 3.0, 4.0], true).is_err());
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap());

        assert!(matches!(
            a.multiply(&sample().sub_matrix(0..1, 0..2).unwrap()),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_mul_vector() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.mul_vector(&[1.0, 2.0, 3.0]).unwrap(), vec![14.0, 32.0]);
        assert!(m.mul_vector(&[1.0]).is_err());
    }

    #[test]
    fn test_augment_and_sub_matrix() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let augmented = a.augment(&Matrix::identity(2).unwrap()).unwrap();
        assert_eq!(augmented.size(), (2, 4));
        assert_eq!(augmented.get_row(1).unwrap(), &[3.0, 4.0, 0.0, 1.0]);

        assert_eq!(augmented.sub_matrix(0..2, 0..2).unwrap(), a);
        assert_eq!(augmented.sub_matrix(0..2, 2..4).unwrap(), Matrix::identity(2).unwrap());
        assert!(augmented.sub_matrix(0..3, 0..2).is_err());
        assert!(augmented.sub_matrix(0..0, 0..2).is_err());
    }

    #[test]
    fn test_display() {
        let matrix = Matrix::from_rows(vec![vec![3, 4, 5], vec![6, 8, 7]]).unwrap();
        assert_eq!(matrix.to_string(), "| 3 4 5 |\n| 6 8 7 |");

        let matrix = Matrix::from_rows(vec![vec![1.0 / 3.0, 2.0]]).unwrap();
        assert_eq!(format!("{matrix:.2}"), "| 0.33 2.00 |");
    }

    #[test]
    fn test_parse() {
        let matrix: Matrix<f64> = "# comment\n1 2, 3\n\n4,5,6\n".parse().unwrap();
        assert_eq!(matrix.size(), (2, 3));
        assert_eq!(matrix.get(1, 2).unwrap(), 6.0);

        assert!(matches!(
            "1 x\n".parse::<Matrix<f64>>(),
            Err(MatrixError::Parse { line: 1, .. })
        ));
        assert!(matches!("\n# only\n".parse::<Matrix<f64>>(), Err(MatrixError::Empty)));
        assert!(matches!(
            "1 2\n3\n".parse::<Matrix<f64>>(),
            Err(MatrixError::RowLength { .. })
        ));
    }
}
