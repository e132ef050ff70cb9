//! # tally-sheets-formula
//!
//! Arithmetic formula evaluator for tally-sheets cells.
//!
//! This crate provides:
//! - Formula evaluation over token sequences (`+ - * /`, parentheses,
//!   cell references)
//! - The error kinds stored on cells when evaluation fails
//! - Token classification and a small text tokenizer
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::SheetMemory;
//! use tally_sheets_formula::evaluate_formula;
//!
//! let mut memory = SheetMemory::new();
//! memory.set_cell_value("A1", 10.0).unwrap();
//!
//! let outcome = evaluate_formula(&["A1", "/", "4"], &memory);
//! assert_eq!(outcome.result(), 2.5);
//!
//! let outcome = evaluate_formula(&["A1", "/", "0"], &memory);
//! assert_eq!(outcome.error_str(), "DivideByZero");
//! assert_eq!(outcome.result(), f64::INFINITY);
//! ```

pub mod error;
pub mod evaluator;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate_formula, evaluate_with, EvaluationOutcome, FormulaEvaluator};
pub use source::{A1Labels, CellSnapshot, CellValueSource, LabelValidator};
pub use token::Operator;
pub use tokenizer::tokenize;
