//! Error types for tally-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-sheets-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is not an A1-style cell label
    #[error("Invalid cell label: {0}")]
    InvalidLabel(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u16),
}
