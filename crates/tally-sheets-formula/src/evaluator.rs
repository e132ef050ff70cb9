//! Formula evaluator
//!
//! A recursive descent interpreter over a token sequence:
//!
//! ```text
//! Expression := Term (('+' | '-') Term)*
//! Term       := Factor (('*' | '/') Factor)*
//! Factor     := '(' Expression ')' | Operand
//! Operand    := CellLabel | Number
//! ```
//!
//! Any grammar violation stops the parse at the point of detection. The
//! caller still gets a number to display alongside the error (see
//! [`EvaluationOutcome`]).

use crate::error::{FormulaError, FormulaResult};
use crate::source::{A1Labels, CellValueSource, LabelValidator};
use crate::token::{self, Operator};

/// Result of evaluating one formula
///
/// `result` is always present. When `error` is set it is advisory only:
/// positive infinity for a division by zero, otherwise the partial value or
/// the last number literal seen before the failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationOutcome {
    result: f64,
    error: Option<FormulaError>,
}

impl EvaluationOutcome {
    /// Create an outcome
    pub fn new(result: f64, error: Option<FormulaError>) -> Self {
        Self { result, error }
    }

    /// The numeric result
    pub fn result(&self) -> f64 {
        self.result
    }

    /// The error, if evaluation failed
    pub fn error(&self) -> Option<&FormulaError> {
        self.error.as_ref()
    }

    /// The error kind, empty when there is none
    pub fn error_str(&self) -> &str {
        self.error.as_ref().map_or("", FormulaError::as_str)
    }

    /// Check if evaluation failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Convert to a `Result`, dropping the advisory value on error
    pub fn into_result(self) -> FormulaResult<f64> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}

/// Evaluates formulas against a cell source
///
/// Only the most recent outcome is kept between calls; each call starts
/// from scratch, so one evaluator can be reused for unrelated formulas.
///
/// # Example
/// ```rust
/// use tally_sheets_core::SheetMemory;
/// use tally_sheets_formula::FormulaEvaluator;
///
/// let mut memory = SheetMemory::new();
/// memory.set_cell_value("A1", 4.0).unwrap();
///
/// let mut evaluator = FormulaEvaluator::new(&memory);
/// evaluator.evaluate(&["(", "A1", "+", "2", ")", "*", "3"]);
/// assert_eq!(evaluator.result(), 18.0);
/// assert_eq!(evaluator.error(), "");
/// ```
#[derive(Debug)]
pub struct FormulaEvaluator<'a, S: ?Sized, V = A1Labels> {
    source: &'a S,
    labels: V,
    outcome: EvaluationOutcome,
}

impl<'a, S: CellValueSource + ?Sized> FormulaEvaluator<'a, S> {
    /// Create an evaluator that recognises A1-style labels
    pub fn new(source: &'a S) -> Self {
        Self::with_validator(source, A1Labels)
    }
}

impl<'a, S, V> FormulaEvaluator<'a, S, V>
where
    S: CellValueSource + ?Sized,
    V: LabelValidator,
{
    /// Create an evaluator with a custom label validator
    pub fn with_validator(source: &'a S, labels: V) -> Self {
        Self {
            source,
            labels,
            outcome: EvaluationOutcome::default(),
        }
    }

    /// Evaluate a formula, replacing the previous outcome
    pub fn evaluate<T: AsRef<str>>(&mut self, formula: &[T]) -> EvaluationOutcome {
        self.outcome = evaluate_with(formula, self.source, &self.labels);
        self.outcome.clone()
    }

    /// Result of the last evaluation
    pub fn result(&self) -> f64 {
        self.outcome.result
    }

    /// Error kind of the last evaluation (empty = none)
    pub fn error(&self) -> &str {
        self.outcome.error_str()
    }

    /// The whole last outcome
    pub fn outcome(&self) -> &EvaluationOutcome {
        &self.outcome
    }
}

/// Evaluate a formula once, recognising A1-style labels
pub fn evaluate_formula<T, S>(formula: &[T], source: &S) -> EvaluationOutcome
where
    T: AsRef<str>,
    S: CellValueSource + ?Sized,
{
    evaluate_with(formula, source, &A1Labels)
}

/// Evaluate a formula once with a custom label validator
pub fn evaluate_with<T, S, V>(formula: &[T], source: &S, labels: &V) -> EvaluationOutcome
where
    T: AsRef<str>,
    S: CellValueSource + ?Sized,
    V: LabelValidator + ?Sized,
{
    let Some(last) = formula.last() else {
        log::debug!("empty formula");
        return EvaluationOutcome::new(0.0, Some(FormulaError::EmptyFormula));
    };

    // A trailing operator is flagged, then dropped so the rest can still be shown
    let (tokens, flagged) = if token::is_operator(last.as_ref()) {
        (&formula[..formula.len() - 1], Some(FormulaError::InvalidFormula))
    } else {
        (formula, None)
    };

    let mut parser = Parser::new(tokens, source, labels);
    let mut accumulated = 0.0;

    let parsed = match parser.parse_expression() {
        Ok(value) if parser.is_at_end() => Ok(value),
        Ok(value) => {
            accumulated = value;
            Err(FormulaError::InvalidFormula)
        }
        Err(err) => Err(err),
    };

    let outcome = match parsed {
        Ok(value) => EvaluationOutcome::new(value, flagged),
        Err(err) => {
            let mut result = accumulated;
            if err == FormulaError::DivideByZero {
                result = f64::INFINITY;
            }
            if result == 0.0 {
                if let Some(literal) = parser.last_literal {
                    result = literal;
                }
            }
            log::debug!(
                "formula failed with {} at token {} of {}",
                err,
                parser.pos,
                tokens.len()
            );
            EvaluationOutcome::new(result, Some(err))
        }
    };

    log::trace!(
        "evaluated {} tokens: result={} error={:?}",
        formula.len(),
        outcome.result,
        outcome.error_str()
    );
    outcome
}

/// Per-call parse state
struct Parser<'f, 'e, T, S: ?Sized, V: ?Sized> {
    tokens: &'f [T],
    pos: usize,
    source: &'e S,
    labels: &'e V,
    /// Last number literal read, used as the display fallback on error
    last_literal: Option<f64>,
}

impl<'f, 'e, T, S, V> Parser<'f, 'e, T, S, V>
where
    T: AsRef<str>,
    S: CellValueSource + ?Sized,
    V: LabelValidator + ?Sized,
{
    fn new(tokens: &'f [T], source: &'e S, labels: &'e V) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            labels,
            last_literal: None,
        }
    }

    // === Token cursor ===

    fn peek(&self) -> Option<&'f str> {
        self.tokens.get(self.pos).map(|t| t.as_ref())
    }

    fn advance(&mut self) -> Option<&'f str> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek_operator(&self, allowed: [Operator; 2]) -> Option<Operator> {
        self.peek()
            .and_then(Operator::from_token)
            .filter(|op| allowed.contains(op))
    }

    // === Grammar rules ===

    fn parse_expression(&mut self) -> FormulaResult<f64> {
        let mut value = self.parse_term()?;

        while let Some(op) = self.peek_operator([Operator::Add, Operator::Subtract]) {
            self.advance();
            let right = self.parse_term()?;
            value = op.apply(value, right);
        }

        Ok(value)
    }

    fn parse_term(&mut self) -> FormulaResult<f64> {
        let mut value = self.parse_factor()?;

        while let Some(op) = self.peek_operator([Operator::Multiply, Operator::Divide]) {
            self.advance();
            let right = self.parse_factor()?;
            if op == Operator::Divide && right == 0.0 {
                return Err(FormulaError::DivideByZero);
            }
            value = op.apply(value, right);
        }

        Ok(value)
    }

    fn parse_factor(&mut self) -> FormulaResult<f64> {
        if self.peek().is_some_and(token::is_open_paren) {
            self.advance();
            let value = self.parse_expression()?;
            return match self.advance() {
                Some(t) if token::is_close_paren(t) => Ok(value),
                _ => Err(FormulaError::MissingParentheses),
            };
        }

        self.parse_operand()
    }

    fn parse_operand(&mut self) -> FormulaResult<f64> {
        let token = self.peek().ok_or(FormulaError::InvalidNumber)?;

        if self.labels.is_valid_label(token) {
            self.advance();
            return self.resolve_reference(token);
        }

        let value = token::parse_number(token).ok_or(FormulaError::InvalidNumber)?;
        self.advance();
        self.last_literal = Some(value);
        Ok(value)
    }

    fn resolve_reference(&self, label: &str) -> FormulaResult<f64> {
        let cell = self.source.lookup(label);

        if !cell.error.is_empty() && cell.error != FormulaError::EmptyFormula.as_str() {
            log::trace!("{} carries error {}", label, cell.error);
            return Err(FormulaError::from_kind(&cell.error)
                .unwrap_or_else(|| FormulaError::Referenced(cell.error.clone())));
        }

        if cell.formula_is_empty {
            return Err(FormulaError::InvalidCell);
        }

        Ok(cell.value)
    }
}
