//! Sheet memory
//!
//! Sparse, label-addressed storage for cells. Only cells that have been
//! written are stored; everything else reads as a blank [`Cell`].

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::label::CellLabel;
use crate::{MAX_COLS, MAX_ROWS};
use ahash::AHashMap;

/// Label-addressed cell store
#[derive(Debug, Clone)]
pub struct SheetMemory {
    cells: AHashMap<CellLabel, Cell>,
    max_rows: u32,
    max_cols: u16,
}

impl SheetMemory {
    /// Create an empty memory sized to the Excel grid
    pub fn new() -> Self {
        Self::with_bounds(MAX_ROWS, MAX_COLS)
    }

    /// Create an empty memory limited to `max_rows` x `max_cols`
    ///
    /// Bounds are clamped to between one cell and the Excel grid.
    pub fn with_bounds(max_rows: u32, max_cols: u16) -> Self {
        Self {
            cells: AHashMap::new(),
            max_rows: max_rows.clamp(1, MAX_ROWS),
            max_cols: max_cols.clamp(1, MAX_COLS),
        }
    }

    /// Number of rows addressable in this memory
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    /// Number of columns addressable in this memory
    pub fn max_cols(&self) -> u16 {
        self.max_cols
    }

    /// Parse a label and check it against this memory's bounds
    pub fn resolve(&self, label: &str) -> Result<CellLabel> {
        let label = CellLabel::parse(label)?;
        if label.row >= self.max_rows {
            return Err(Error::RowOutOfBounds(label.row, self.max_rows - 1));
        }
        if label.col >= self.max_cols {
            return Err(Error::ColumnOutOfBounds(
                label.col as u32,
                self.max_cols - 1,
            ));
        }
        Ok(label)
    }

    /// Get a stored cell by label
    ///
    /// Returns `Ok(None)` for a valid label that was never written.
    pub fn get_cell(&self, label: &str) -> Result<Option<&Cell>> {
        let label = self.resolve(label)?;
        Ok(self.cells.get(&label))
    }

    /// Get a cell by parsed label
    pub fn cell_at(&self, label: CellLabel) -> Option<&Cell> {
        self.cells.get(&label)
    }

    /// Get a mutable cell by label, creating a blank one if needed
    pub fn get_cell_mut(&mut self, label: &str) -> Result<&mut Cell> {
        let label = self.resolve(label)?;
        Ok(self.cells.entry(label).or_default())
    }

    /// Set a cell's formula tokens
    pub fn set_cell_formula<I, S>(&mut self, label: &str, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.get_cell_mut(label)?.set_formula(tokens);
        Ok(())
    }

    /// Store a constant in a cell
    pub fn set_cell_value(&mut self, label: &str, value: f64) -> Result<()> {
        *self.get_cell_mut(label)? = Cell::with_value(value);
        Ok(())
    }

    /// Remove a cell, returning what it held
    pub fn clear_cell(&mut self, label: &str) -> Result<Option<Cell>> {
        let label = self.resolve(label)?;
        Ok(self.cells.remove(&label))
    }

    /// Labels of all stored cells, in row-major order
    pub fn labels(&self) -> Vec<CellLabel> {
        let mut labels: Vec<CellLabel> = self.cells.keys().copied().collect();
        labels.sort_unstable();
        labels
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for SheetMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unwritten_cell_is_none() {
        let memory = SheetMemory::new();
        assert!(memory.get_cell("A1").unwrap().is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("a1", 3.0).unwrap();
        memory.set_cell_formula("B2", ["A1", "*", "2"]).unwrap();

        assert_eq!(memory.get_cell("A1").unwrap().unwrap().value(), 3.0);
        assert_eq!(memory.get_cell("B2").unwrap().unwrap().formula().len(), 3);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_labels_are_row_major() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("B2", 1.0).unwrap();
        memory.set_cell_value("A2", 1.0).unwrap();
        memory.set_cell_value("C1", 1.0).unwrap();

        let labels: Vec<String> = memory.labels().iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["C1", "A2", "B2"]);
    }

    #[test]
    fn test_bounds() {
        let mut memory = SheetMemory::with_bounds(10, 3);
        assert!(memory.set_cell_value("C10", 1.0).is_ok());
        assert_eq!(
            memory.set_cell_value("D1", 1.0),
            Err(Error::ColumnOutOfBounds(3, 2))
        );
        assert_eq!(
            memory.set_cell_value("A11", 1.0),
            Err(Error::RowOutOfBounds(10, 9))
        );
    }

    #[test]
    fn test_clear_cell() {
        let mut memory = SheetMemory::new();
        memory.set_cell_value("A1", 1.0).unwrap();
        assert!(memory.clear_cell("A1").unwrap().is_some());
        assert!(memory.get_cell("A1").unwrap().is_none());
    }
}
