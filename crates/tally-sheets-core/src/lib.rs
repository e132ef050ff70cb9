//! # tally-sheets-core
//!
//! Cell storage for the tally-sheets formula evaluator.
//!
//! This crate provides:
//! - [`CellLabel`] - A1-style cell labels and the label validity check
//! - [`Cell`] - A cell's formula tokens, last computed value and error
//! - [`SheetMemory`] - The label-addressed store formulas read from
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::{CellLabel, SheetMemory};
//!
//! let mut memory = SheetMemory::new();
//! memory.set_cell_value("A1", 42.0).unwrap();
//!
//! assert!(CellLabel::is_valid("B7"));
//! assert_eq!(memory.get_cell("A1").unwrap().unwrap().value(), 42.0);
//! ```

pub mod cell;
pub mod error;
pub mod label;
pub mod memory;

pub use cell::Cell;
pub use error::{Error, Result};
pub use label::CellLabel;
pub use memory::SheetMemory;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
