//! Cell type
//!
//! A cell keeps its formula as the token sequence the evaluator consumes,
//! together with the value and error produced the last time it was
//! calculated.

/// A single cell's stored state
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Formula tokens (empty if no formula has been set)
    formula: Vec<String>,
    /// Last computed value
    value: f64,
    /// Last error kind, empty when the last calculation succeeded
    error: String,
}

impl Cell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding a constant
    ///
    /// The constant is also stored as a one-token formula so that
    /// references to the cell resolve to it.
    pub fn with_value(value: f64) -> Self {
        Self {
            formula: vec![value.to_string()],
            value,
            error: String::new(),
        }
    }

    /// Get the formula tokens
    pub fn formula(&self) -> &[String] {
        &self.formula
    }

    /// Get the last computed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the last error kind (empty = none)
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Check if a formula has been set
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }

    /// Check if the last calculation left an error
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Replace the formula tokens
    ///
    /// The stored value and error are left alone until the cell is
    /// calculated again.
    pub fn set_formula<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formula = tokens.into_iter().map(Into::into).collect();
    }

    /// Set the computed value
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Set the error kind (empty string clears it)
    pub fn set_error<S: Into<String>>(&mut self, error: S) {
        self.error = error.into();
    }

    /// Reset to an empty cell
    pub fn clear(&mut self) {
        self.formula.clear();
        self.value = 0.0;
        self.error.clear();
    }
}
