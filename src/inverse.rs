//! Matrix inversion by reducing the augmented matrix `[A | I]`

use log::debug;

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};
use crate::oplog::OperationLog;
use crate::pivot::find_pivot;

impl<T: Field> Matrix<T> {
    /// Compute the inverse of a square, full-rank matrix.
    ///
    /// # Errors
    /// `DimensionMismatch` if the matrix is not square, `Singular` with the
    /// first row lacking a pivot if it is not full rank.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.inverse_logged(None)
    }

    /// Same as [`Matrix::inverse`], recording every row operation applied
    /// to the augmented matrix.
    pub fn inverse_logged(&self, log: Option<&mut OperationLog<T>>) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows(),
                left_cols: self.cols(),
                right_rows: self.rows(),
                right_cols: self.rows(),
            });
        }

        let n = self.rows();
        let mut augmented = self.augment(&Self::identity(n)?)?;
        augmented.to_reduced_row_echelon(log)?;

        // A pivot right of the left block does not count. With no pivot-free
        // row the reduced left block has n sorted pivots, so it is the identity.
        let left = augmented.sub_matrix(0..n, 0..n)?;
        for row in 0..n {
            if find_pivot(&left, row)?.is_free() {
                debug!("Matrix is singular, row {row} has no pivot in the left block");
                return Err(MatrixError::Singular { row });
            }
        }

        augmented.sub_matrix(0..n, n..2 * n)
    }
}
