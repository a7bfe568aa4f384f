//! Append-only record of the elementary row operations a reduction applied

use std::fmt::{self, Display};

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};
use crate::row_op::RowOperation;

/// Ordered log of row operations, oldest first.
///
/// A reduction borrows the log for the duration of one call and only ever
/// appends to it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationLog<T> {
    operations: Vec<RowOperation<T>>,
}

impl<T> Default for OperationLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperationLog<T> {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Append an operation
    pub fn record(&mut self, operation: RowOperation<T>) {
        self.operations.push(operation);
    }

    /// All recorded operations in application order
    pub fn operations(&self) -> &[RowOperation<T>] {
        &self.operations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowOperation<T>> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<T: Field> OperationLog<T> {
    /// Apply every recorded operation, in order, to `matrix`.
    ///
    /// Replaying onto a copy of the matrix a reduction started from
    /// reproduces that reduction's result.
    pub fn replay(&self, matrix: &mut Matrix<T>) -> Result<(), MatrixError> {
        for operation in &self.operations {
            operation.apply(matrix)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a OperationLog<T> {
    type Item = &'a RowOperation<T>;
    type IntoIter = std::slice::Iter<'a, RowOperation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl<T: Display> Display for OperationLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, operation) in self.operations.iter().enumerate() {
            if step > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>3}: {operation}", step + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut log = OperationLog::new();
        assert!(log.is_empty());

        let swap = RowOperation::Swap { first: 1, second: 2 };
        let scale = RowOperation::Scale {
            row: 2,
            pivot_col: 0,
            scalar: 14.0,
        };
        let add = RowOperation::AddScaled {
            target: 1,
            source: 2,
            pivot_col: 2,
            scalar: 2.0,
        };
        log.record(swap.clone());
        log.record(scale.clone());
        log.record(add.clone());

        assert_eq!(log.len(), 3);
        assert_eq!(log.operations(), &[swap, scale, add]);
    }

    #[test]
    fn test_replay() {
        let mut log = OperationLog::new();
        log.record(RowOperation::Swap { first: 0, second: 1 });
        log.record(RowOperation::Scale {
            row: 0,
            pivot_col: 0,
            scalar: 0.5,
        });

        let mut matrix = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 4.0]]).unwrap();
        log.replay(&mut matrix).unwrap();
        assert_eq!(matrix, Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 1.0]]).unwrap());
    }

    #[test]
    fn test_replay_propagates_range_errors() {
        let mut log = OperationLog::new();
        log.record(RowOperation::<f64>::Swap { first: 0, second: 4 });
        let mut matrix = Matrix::identity(2).unwrap();
        assert!(matches!(
            log.replay(&mut matrix),
            Err(MatrixError::RowOutOfRange { row: 4, .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut log = OperationLog::new();
        log.record(RowOperation::<f64>::Swap { first: 0, second: 1 });
        log.record(RowOperation::Scale {
            row: 1,
            pivot_col: 1,
            scalar: 2.0,
        });
        assert_eq!(log.to_string(), "  1: R0 <-> R1\n  2: R1 *= 2 (from column 1)");
    }
}
