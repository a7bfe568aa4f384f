//! Pivot location: the leftmost nonzero entry of a row

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};

/// Where a row's pivot sits. `col` is `None` for a free (all-zero) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotLocation {
    pub row: usize,
    pub col: Option<usize>,
}

impl PivotLocation {
    pub fn is_free(&self) -> bool {
        self.col.is_none()
    }

    /// Pivot column for ordering purposes; free rows sort after every
    /// real column by taking the value `cols`.
    pub fn sort_key(&self, cols: usize) -> usize {
        self.col.unwrap_or(cols)
    }
}

/// Find the first nonzero entry of `row`, scanning left to right
pub fn find_pivot<T: Field>(matrix: &Matrix<T>, row: usize) -> Result<PivotLocation, MatrixError> {
    let col = matrix.get_row(row)?.iter().position(|value| !value.is_zero());
    Ok(PivotLocation { row, col })
}

/// Sort key of every row's pivot, top to bottom
pub fn pivot_columns<T: Field>(matrix: &Matrix<T>) -> Result<Vec<usize>, MatrixError> {
    (0..matrix.rows())
        .map(|row| find_pivot(matrix, row).map(|pivot| pivot.sort_key(matrix.cols())))
        .collect()
}
