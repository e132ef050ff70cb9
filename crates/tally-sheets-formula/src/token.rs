//! Token classification
//!
//! Formula tokens carry no type tag; these predicates decide what a token
//! is when the evaluator needs to know.

use lazy_regex::regex_is_match;

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Classify a token as an operator
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator's token text
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator
    ///
    /// Division by zero is not checked here.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

/// Opening parenthesis token
pub const OPEN_PAREN: &str = "(";

/// Closing parenthesis token
pub const CLOSE_PAREN: &str = ")";

/// Check if a token is one of `+ - * /`
pub fn is_operator(token: &str) -> bool {
    Operator::from_token(token).is_some()
}

/// Check if a token is `(`
pub fn is_open_paren(token: &str) -> bool {
    token == OPEN_PAREN
}

/// Check if a token is `)`
pub fn is_close_paren(token: &str) -> bool {
    token == CLOSE_PAREN
}

/// Check if a token is a decimal number literal
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction like `.5`), and an optional exponent. Whitespace, hex, `inf`
/// and `NaN` are rejected.
pub fn is_number(token: &str) -> bool {
    regex_is_match!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$", token)
}

/// Parse a number literal
///
/// Returns `None` for anything [`is_number`] rejects.
pub fn parse_number(token: &str) -> Option<f64> {
    if !is_number(token) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_from_token() {
        assert_eq!(Operator::from_token("+"), Some(Operator::Add));
        assert_eq!(Operator::from_token("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_token("^"), None);
        assert_eq!(Operator::from_token("++"), None);
        assert_eq!(Operator::Multiply.symbol(), "*");
    }

    #[test]
    fn test_is_number() {
        for ok in ["0", "42", "3.14", "1.", ".5", "-2", "+7", "1e10", "2.5E-3"] {
            assert!(is_number(ok), "{ok} should be a number");
        }
        for bad in ["", " ", " 1", "1 ", "A1", "+", ".", "1e", "0x10", "inf", "NaN", "1..2"] {
            assert!(!is_number(bad), "{bad:?} should not be a number");
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1."), Some(1.0));
        assert_eq!(parse_number("-1e3"), Some(-1000.0));
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("B2"), None);
    }

    #[test]
    fn test_parens() {
        assert!(is_open_paren("("));
        assert!(is_close_paren(")"));
        assert!(!is_close_paren("("));
        assert!(!is_operator(")"));
    }
}
