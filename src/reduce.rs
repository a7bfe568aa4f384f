//! Gaussian elimination to row-echelon and reduced row-echelon form
//!
//! Each reduction comes in two flavours: `to_*` mutates the matrix in place,
//! the plain-named variant clones first and leaves the caller's matrix alone.
//! Both run the same algorithm through [`Reduction`], which applies each
//! elementary operation and records it in the optional log.

use log::{debug, trace};

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};
use crate::oplog::OperationLog;
use crate::pivot::{find_pivot, pivot_columns};
use crate::row_op::RowOperation;

/// A matrix under reduction together with the log its steps go to
pub(crate) struct Reduction<'a, T> {
    matrix: &'a mut Matrix<T>,
    log: Option<&'a mut OperationLog<T>>,
}

impl<'a, T: Field> Reduction<'a, T> {
    pub(crate) fn new(matrix: &'a mut Matrix<T>, log: Option<&'a mut OperationLog<T>>) -> Self {
        Self { matrix, log }
    }

    /// Apply one elementary operation and record it
    pub(crate) fn apply(&mut self, operation: RowOperation<T>) -> Result<(), MatrixError> {
        trace!("{operation:?}");
        operation.apply(self.matrix)?;
        if let Some(log) = self.log.as_deref_mut() {
            log.record(operation);
        }
        Ok(())
    }

    /// Forward elimination. Returns the pivot column of every row, with
    /// `cols` for free rows.
    fn row_echelon(&mut self) -> Result<Vec<usize>, MatrixError> {
        let rows = self.matrix.rows();
        let free = self.matrix.cols();

        let mut pivots = pivot_columns(self.matrix)?;
        self.sort_from(&mut pivots, 0)?;

        for top in 0..rows {
            let pivot_col = pivots[top];
            if pivot_col == free {
                // Sorted, so everything below is free as well
                break;
            }

            let mut collided = false;
            for below in (top + 1)..rows {
                if pivots[below] != pivot_col {
                    continue;
                }
                let scalar = -(self.matrix.get(below, pivot_col)? / self.matrix.get(top, pivot_col)?);
                self.apply(RowOperation::AddScaled {
                    target: below,
                    source: top,
                    pivot_col,
                    scalar,
                })?;
                pivots[below] = find_pivot(self.matrix, below)?.sort_key(free);
                collided = true;
            }

            // Eliminated rows moved right; restore ordering below `top`
            if collided {
                self.sort_from(&mut pivots, top + 1)?;
            }
        }

        Ok(pivots)
    }

    /// Backward elimination and normalisation on top of `row_echelon`
    fn reduced_row_echelon(&mut self) -> Result<(), MatrixError> {
        let free = self.matrix.cols();
        let pivots = self.row_echelon()?;

        // Bottom-up, so each source row is already clear of the pivot
        // columns to its right when it is used.
        for (source, &pivot_col) in pivots.iter().enumerate().rev() {
            if pivot_col == free {
                continue;
            }
            for target in 0..source {
                let entry = self.matrix.get(target, pivot_col)?;
                if entry.is_zero() {
                    continue;
                }
                let scalar = -(entry / self.matrix.get(source, pivot_col)?);
                self.apply(RowOperation::AddScaled {
                    target,
                    source,
                    pivot_col,
                    scalar,
                })?;
            }
        }

        for (row, &pivot_col) in pivots.iter().enumerate() {
            if pivot_col == free {
                continue;
            }
            let pivot = self.matrix.get(row, pivot_col)?;
            if pivot.is_one() {
                continue;
            }
            self.apply(RowOperation::Scale {
                row,
                pivot_col,
                scalar: T::one() / pivot,
            })?;
        }

        let mut pivots = pivot_columns(self.matrix)?;
        self.sort_from(&mut pivots, 0)
    }
}

impl<T: Field> Matrix<T> {
    /// Reduce to row-echelon form in place.
    ///
    /// Afterwards every row's pivot column is strictly greater than that of
    /// the row above, and free rows are at the bottom. Pivots are not
    /// normalised.
    pub fn to_row_echelon(&mut self, log: Option<&mut OperationLog<T>>) -> Result<(), MatrixError> {
        let (rows, cols) = self.size();
        debug!("Reducing {rows}x{cols} matrix to row echelon form");
        let mut reduction = Reduction::new(self, log);
        let pivots = reduction.row_echelon()?;
        debug!(
            "Row echelon form reached with {} pivot rows",
            pivots.iter().filter(|&&col| col < cols).count()
        );
        Ok(())
    }

    /// Row-echelon form of a copy, leaving `self` unchanged
    pub fn row_echelon(&self, log: Option<&mut OperationLog<T>>) -> Result<Self, MatrixError> {
        let mut copy = self.clone();
        copy.to_row_echelon(log)?;
        Ok(copy)
    }

    /// Reduce to reduced row-echelon form in place.
    ///
    /// Afterwards every pivot is one, every pivot column is zero outside its
    /// pivot row, and free rows are all zero and at the bottom. A matrix that
    /// is already reduced is left as is and logs no operations.
    pub fn to_reduced_row_echelon(&mut self, log: Option<&mut OperationLog<T>>) -> Result<(), MatrixError> {
        let (rows, cols) = self.size();
        debug!("Reducing {rows}x{cols} matrix to reduced row echelon form");
        Reduction::new(self, log).reduced_row_echelon()
    }

    /// Reduced row-echelon form of a copy, leaving `self` unchanged
    pub fn reduced_row_echelon(&self, log: Option<&mut OperationLog<T>>) -> Result<Self, MatrixError> {
        let mut copy = self.clone();
        copy.to_reduced_row_echelon(log)?;
        Ok(copy)
    }

    /// Number of pivot rows in row-echelon form
    pub fn rank(&self) -> Result<usize, MatrixError> {
        let mut copy = self.clone();
        let pivots = Reduction::new(&mut copy, None).row_echelon()?;
        Ok(pivots.iter().filter(|&&col| col < self.cols()).count())
    }
}
