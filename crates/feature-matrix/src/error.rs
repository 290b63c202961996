//! Matrix Error Types

use thiserror::Error;

/// Errors raised while converting a matrix between layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A nested row does not match the width of the first row
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
