//! Formula error types
//!
//! The rendered strings are the error kinds stored on cells and shown to
//! users, so they must not change.

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Why an evaluation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The formula has no tokens
    #[error("EmptyFormula")]
    EmptyFormula,

    /// Trailing operator, or tokens left over after a complete expression
    #[error("InvalidFormula")]
    InvalidFormula,

    /// An operand is neither a cell label nor a number
    #[error("InvalidNumber")]
    InvalidNumber,

    /// Right operand of `/` is zero
    #[error("DivideByZero")]
    DivideByZero,

    /// `(` without a matching `)`
    #[error("MissingParentheses")]
    MissingParentheses,

    /// Referenced cell has no formula
    #[error("InvalidCell")]
    InvalidCell,

    /// Error carried over unchanged from a referenced cell
    #[error("{0}")]
    Referenced(String),
}

impl FormulaError {
    /// The caller-visible error kind
    pub fn as_str(&self) -> &str {
        match self {
            FormulaError::EmptyFormula => "EmptyFormula",
            FormulaError::InvalidFormula => "InvalidFormula",
            FormulaError::InvalidNumber => "InvalidNumber",
            FormulaError::DivideByZero => "DivideByZero",
            FormulaError::MissingParentheses => "MissingParentheses",
            FormulaError::InvalidCell => "InvalidCell",
            FormulaError::Referenced(kind) => kind,
        }
    }

    /// Map a stored error kind back to an error
    ///
    /// Returns `None` for the empty string. Unknown kinds are kept verbatim
    /// as [`FormulaError::Referenced`].
    pub fn from_kind(kind: &str) -> Option<Self> {
        let err = match kind {
            "" => return None,
            "EmptyFormula" => FormulaError::EmptyFormula,
            "InvalidFormula" => FormulaError::InvalidFormula,
            "InvalidNumber" => FormulaError::InvalidNumber,
            "DivideByZero" => FormulaError::DivideByZero,
            "MissingParentheses" => FormulaError::MissingParentheses,
            "InvalidCell" => FormulaError::InvalidCell,
            other => FormulaError::Referenced(other.to_string()),
        };
        Some(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_matches_kind() {
        for err in [
            FormulaError::EmptyFormula,
            FormulaError::InvalidFormula,
            FormulaError::InvalidNumber,
            FormulaError::DivideByZero,
            FormulaError::MissingParentheses,
            FormulaError::InvalidCell,
            FormulaError::Referenced("#REF!".into()),
        ] {
            assert_eq!(err.to_string(), err.as_str());
            assert_eq!(FormulaError::from_kind(err.as_str()), Some(err.clone()));
        }
    }

    #[test]
    fn test_from_empty_kind() {
        assert_eq!(FormulaError::from_kind(""), None);
    }
}
