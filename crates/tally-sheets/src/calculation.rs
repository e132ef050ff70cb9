//! Cell calculation
//!
//! Evaluates a cell's own formula against the memory it lives in and
//! stores the result and error back onto the cell. Cells are calculated in
//! exactly the order the caller gives; deciding that order (and catching
//! circular references) is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let mut memory = SheetMemory::new();
//! memory.set_cell_value("A1", 10.0).unwrap();
//! memory.set_cell_formula_text("A2", "A1 * 2").unwrap();
//!
//! let outcome = memory.calculate_cell("A2").unwrap();
//! assert_eq!(outcome.result(), 20.0);
//! ```

use crate::{EvaluationOutcome, Result, SheetMemory};
use tally_sheets_formula::{evaluate_formula, tokenize};

/// Statistics from a calculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Number of cells calculated
    pub cells_calculated: usize,
    /// Number of cells left with an error
    pub errors: usize,
}

/// Extension trait for SheetMemory to add calculation methods
pub trait SheetCalculationExt {
    /// Tokenize formula text and store it on a cell
    fn set_cell_formula_text(&mut self, label: &str, text: &str) -> Result<()>;

    /// Evaluate one cell's formula and store the outcome on the cell
    fn calculate_cell(&mut self, label: &str) -> Result<EvaluationOutcome>;

    /// Calculate cells one after another, in the given order
    fn calculate_cells<I, S>(&mut self, labels: I) -> Result<CalculationStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl SheetCalculationExt for SheetMemory {
    fn set_cell_formula_text(&mut self, label: &str, text: &str) -> Result<()> {
        let tokens = tokenize(text)?;
        self.set_cell_formula(label, tokens)?;
        Ok(())
    }

    fn calculate_cell(&mut self, label: &str) -> Result<EvaluationOutcome> {
        let formula = self
            .get_cell(label)?
            .map(|cell| cell.formula().to_vec())
            .unwrap_or_default();

        let outcome = evaluate_formula(&formula, &*self);

        let cell = self.get_cell_mut(label)?;
        cell.set_value(outcome.result());
        cell.set_error(outcome.error_str());

        log::debug!(
            "calculated {}: value={} error={:?}",
            label,
            outcome.result(),
            outcome.error_str()
        );
        Ok(outcome)
    }

    fn calculate_cells<I, S>(&mut self, labels: I) -> Result<CalculationStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = CalculationStats::default();

        for label in labels {
            let outcome = self.calculate_cell(label.as_ref())?;
            stats.cells_calculated += 1;
            if outcome.is_error() {
                stats.errors += 1;
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_calculate_cell_stores_outcome() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("A1", 3.0).unwrap();
        memory.set_cell_formula_text("B1", "A1 * A1").unwrap();

        let outcome = memory.calculate_cell("B1").unwrap();
        assert_eq!(outcome.result(), 9.0);

        let cell = memory.get_cell("B1").unwrap().unwrap();
        assert_eq!(cell.value(), 9.0);
        assert_eq!(cell.error(), "");
    }

    #[test]
    fn test_calculate_blank_cell() {
        let mut memory = SheetMemory::new();
        let outcome = memory.calculate_cell("D4").unwrap();
        assert_eq!(outcome.error_str(), "EmptyFormula");
        assert_eq!(memory.get_cell("D4").unwrap().unwrap().error(), "EmptyFormula");
    }

    #[test]
    fn test_recalculation_clears_old_error() {
        let mut memory = SheetMemory::new();
        memory.set_cell_formula_text("A1", "1 / 0").unwrap();
        memory.calculate_cell("A1").unwrap();
        assert_eq!(memory.get_cell("A1").unwrap().unwrap().error(), "DivideByZero");

        memory.set_cell_formula_text("A1", "1 / 4").unwrap();
        memory.calculate_cell("A1").unwrap();
        let cell = memory.get_cell("A1").unwrap().unwrap();
        assert_eq!(cell.error(), "");
        assert_eq!(cell.value(), 0.25);
    }

    #[test]
    fn test_calculate_cells_in_given_order() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("A1", 1.0).unwrap();
        memory.set_cell_formula_text("A2", "A1 + 1").unwrap();
        memory.set_cell_formula_text("A3", "A2 + 1").unwrap();
        memory.set_cell_formula_text("A4", "A3 / 0").unwrap();

        let stats = memory.calculate_cells(["A2", "A3", "A4"]).unwrap();
        assert_eq!(
            stats,
            CalculationStats {
                cells_calculated: 3,
                errors: 1,
            }
        );
        assert_eq!(memory.get_cell("A3").unwrap().unwrap().value(), 3.0);
    }

    #[test]
    fn test_bad_label_is_an_error() {
        let mut memory = SheetMemory::new();
        assert!(matches!(memory.calculate_cell("1A"), Err(Error::Core(_))));
        assert!(matches!(
            memory.set_cell_formula_text("A1", "2 % 3"),
            Err(Error::Tokenize(_))
        ));
    }
}
