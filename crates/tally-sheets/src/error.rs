//! Error types for tally-sheets

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up or storing a calculation
///
/// Evaluation failures are not errors here; they are reported through
/// [`EvaluationOutcome`](crate::EvaluationOutcome) and stored on the cell.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad label or label outside the sheet
    #[error(transparent)]
    Core(#[from] tally_sheets_core::Error),

    /// Formula text could not be tokenized
    #[error("Could not tokenize formula: {0}")]
    Tokenize(#[from] tally_sheets_formula::FormulaError),
}
