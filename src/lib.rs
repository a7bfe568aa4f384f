//! Echelon: dense matrix row reduction and inversion
//! Every elementary row operation a reduction applies can be recorded in an
//! [`OperationLog`] and replayed later.

pub mod cli;
pub mod field;
mod inverse;
pub mod matrix;
pub mod oplog;
pub mod pivot;
mod reduce;
pub mod row_op;
pub mod sort;

mod proptests;

pub use crate::cli::Cli;
pub use crate::field::{Field, Gf};
pub use crate::matrix::{Matrix, MatrixError};
pub use crate::oplog::OperationLog;
pub use crate::pivot::{find_pivot, PivotLocation};
pub use crate::row_op::RowOperation;
pub use crate::sort::sort_rows;
