//! Row ordering by pivot column

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};
use crate::oplog::OperationLog;
use crate::pivot::pivot_columns;
use crate::reduce::Reduction;
use crate::row_op::RowOperation;

/// Order rows by ascending pivot column, free rows last.
///
/// Stable: rows sharing a pivot column keep their relative order. Every
/// exchange is an adjacent `Swap` and is recorded in `log` when given.
/// Returns the pivot column of each row in its final position, with
/// `cols` standing in for free rows.
pub fn sort_rows<T: Field>(
    matrix: &mut Matrix<T>,
    log: Option<&mut OperationLog<T>>,
) -> Result<Vec<usize>, MatrixError> {
    let mut pivots = pivot_columns(matrix)?;
    Reduction::new(matrix, log).sort_from(&mut pivots, 0)?;
    Ok(pivots)
}

impl<T: Field> Reduction<'_, T> {
    /// Insertion sort of rows `start..` keyed by `pivots`, which is kept in
    /// step with the matrix. Rows above `start` are never touched.
    pub(crate) fn sort_from(&mut self, pivots: &mut [usize], start: usize) -> Result<(), MatrixError> {
        for row in start..pivots.len() {
            let mut cursor = row;
            while cursor > start && pivots[cursor - 1] > pivots[cursor] {
                self.apply(RowOperation::Swap {
                    first: cursor - 1,
                    second: cursor,
                })?;
                pivots.swap(cursor - 1, cursor);
                cursor -= 1;
            }
        }
        Ok(())
    }
}
