//! # tally-sheets
//!
//! Spreadsheet cells holding arithmetic formulas.
//!
//! Formulas are token sequences over numbers, cell labels, `+ - * /` and
//! parentheses. Evaluating one always yields a number; failures also yield
//! one of the error kinds `EmptyFormula`, `InvalidFormula`, `InvalidNumber`,
//! `DivideByZero`, `MissingParentheses`, `InvalidCell`, or the error of a
//! referenced cell passed through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let mut memory = SheetMemory::new();
//! memory.set_cell_value("A1", 6.0).unwrap();
//! memory.set_cell_formula_text("B1", "(A1 + 2) * 3").unwrap();
//! memory.set_cell_formula_text("C1", "B1 / 0").unwrap();
//!
//! memory.calculate_cells(["B1", "C1"]).unwrap();
//!
//! let b1 = memory.get_cell("B1").unwrap().unwrap();
//! assert_eq!(b1.value(), 24.0);
//!
//! let c1 = memory.get_cell("C1").unwrap().unwrap();
//! assert_eq!(c1.error(), "DivideByZero");
//! ```

pub mod calculation;
pub mod error;
pub mod prelude;

pub use calculation::{CalculationStats, SheetCalculationExt};
pub use error::{Error, Result};

// Re-export core types
pub use tally_sheets_core::{Cell, CellLabel, SheetMemory, MAX_COLS, MAX_ROWS};

// Re-export formula types
pub use tally_sheets_formula::{
    evaluate_formula, evaluate_with, tokenize, A1Labels, CellSnapshot, CellValueSource,
    EvaluationOutcome, FormulaError, FormulaEvaluator, FormulaResult, LabelValidator, Operator,
};
