//! Elementary row operations, the atomic steps of Gaussian elimination

use std::fmt::{self, Display};

use crate::field::Field;
use crate::matrix::{Matrix, MatrixError};

/// One atomic transformation of a matrix's rows.
///
/// Each variant carries exactly the fields it needs, so an operation can be
/// logged, inspected and replayed on another matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOperation<T> {
    /// Exchange two rows entirely
    Swap { first: usize, second: usize },
    /// Multiply `row` from `pivot_col` onward by `scalar`, the inverse of
    /// the pivot value
    Scale { row: usize, pivot_col: usize, scalar: T },
    /// `target += scalar * source` across every column, with `scalar`
    /// chosen to clear `target[pivot_col]`
    AddScaled {
        target: usize,
        source: usize,
        pivot_col: usize,
        scalar: T,
    },
}

impl<T: Field> RowOperation<T> {
    /// Apply this operation to `matrix`.
    ///
    /// The entry the operation exists to fix is written exactly: a scaled
    /// pivot becomes one and an eliminated entry becomes zero, so floating
    /// point residue never leaves a phantom pivot behind.
    pub fn apply(&self, matrix: &mut Matrix<T>) -> Result<(), MatrixError> {
        match self {
            Self::Swap { first, second } => matrix.swap_rows(*first, *second),
            Self::Scale {
                row,
                pivot_col,
                scalar,
            } => {
                matrix.get(*row, *pivot_col)?;
                let values = matrix.row_mut(*row)?;
                for value in values.iter_mut().skip(*pivot_col) {
                    *value = value.clone() * scalar.clone();
                }
                values[*pivot_col] = T::one();
                Ok(())
            }
            Self::AddScaled {
                target,
                source,
                pivot_col,
                scalar,
            } => {
                matrix.get(*target, *pivot_col)?;
                let source_row = matrix.get_row(*source)?.to_vec();
                let values = matrix.row_mut(*target)?;
                for (value, addend) in values.iter_mut().zip(source_row) {
                    *value = value.clone() + scalar.clone() * addend;
                }
                values[*pivot_col] = T::zero();
                Ok(())
            }
        }
    }
}

impl<T: Display> Display for RowOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { first, second } => write!(f, "R{first} <-> R{second}"),
            Self::Scale {
                row,
                pivot_col,
                scalar,
            } => write!(f, "R{row} *= {scalar} (from column {pivot_col})"),
            Self::AddScaled {
                target,
                source,
                pivot_col,
                scalar,
            } => write!(f, "R{target} += {scalar} * R{source} (clears column {pivot_col})"),
        }
    }
}
