//! Prelude module - common imports for tally-sheets users
//!
//! ```rust
//! use tally_sheets::prelude::*;
//! ```

pub use crate::{
    // Calculation
    CalculationStats,
    // Cell types
    Cell,
    CellLabel,
    EvaluationOutcome,
    FormulaError,
    FormulaEvaluator,
    SheetCalculationExt,
    SheetMemory,
};
