//! Where the evaluator gets cell values from
//!
//! [`CellValueSource`] resolves a label to the referenced cell's state and
//! [`LabelValidator`] decides which tokens are labels at all.

use tally_sheets_core::{Cell, CellLabel, SheetMemory};

/// What the evaluator sees of a referenced cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSnapshot {
    /// The cell's current value
    pub value: f64,
    /// Whether the cell has no formula
    pub formula_is_empty: bool,
    /// The cell's current error kind (empty = none)
    pub error: String,
}

impl CellSnapshot {
    /// Snapshot of a cell that was never written
    pub fn blank() -> Self {
        Self {
            value: 0.0,
            formula_is_empty: true,
            error: String::new(),
        }
    }
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            value: cell.value(),
            formula_is_empty: !cell.has_formula(),
            error: cell.error().to_string(),
        }
    }
}

/// Read access to cells by label
pub trait CellValueSource {
    /// Look up a cell
    ///
    /// Unknown cells resolve to [`CellSnapshot::blank`].
    fn lookup(&self, label: &str) -> CellSnapshot;
}

impl CellValueSource for SheetMemory {
    fn lookup(&self, label: &str) -> CellSnapshot {
        match self.get_cell(label) {
            Ok(Some(cell)) => cell.into(),
            _ => CellSnapshot::blank(),
        }
    }
}

impl<S: CellValueSource + ?Sized> CellValueSource for &S {
    fn lookup(&self, label: &str) -> CellSnapshot {
        (**self).lookup(label)
    }
}

/// Decides whether a token is a cell label
pub trait LabelValidator {
    fn is_valid_label(&self, token: &str) -> bool;
}

/// A1-style labels (`A1`, `bc12`)
#[derive(Debug, Clone, Copy, Default)]
pub struct A1Labels;

impl LabelValidator for A1Labels {
    fn is_valid_label(&self, token: &str) -> bool {
        CellLabel::is_valid(token)
    }
}

impl<F> LabelValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_label(&self, token: &str) -> bool {
        self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_lookup() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("A1", 4.0).unwrap();
        memory.get_cell_mut("B1").unwrap().set_error("DivideByZero");

        assert_eq!(
            memory.lookup("A1"),
            CellSnapshot {
                value: 4.0,
                formula_is_empty: false,
                error: String::new(),
            }
        );
        assert_eq!(memory.lookup("B1").error, "DivideByZero");
        assert!(memory.lookup("B1").formula_is_empty);
        assert_eq!(memory.lookup("Z9"), CellSnapshot::blank());
    }

    #[test]
    fn test_validators() {
        assert!(A1Labels.is_valid_label("C3"));
        assert!(!A1Labels.is_valid_label("3"));

        let only_x = |token: &str| token.starts_with('X');
        assert!(only_x.is_valid_label("X1"));
        assert!(!only_x.is_valid_label("A1"));
    }
}
