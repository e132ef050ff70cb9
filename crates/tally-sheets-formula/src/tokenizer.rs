//! Formula text tokenizer
//!
//! Splits text like `"=(A1 + 2.5) * b3"` into the token strings the
//! evaluator consumes. Labels come out upper-cased.

use crate::error::{FormulaError, FormulaResult};

/// Split formula text into tokens
///
/// # Example
/// ```rust
/// use tally_sheets_formula::tokenize;
///
/// let tokens = tokenize("=(a1 + 2.5)*B3").unwrap();
/// assert_eq!(tokens, ["(", "A1", "+", "2.5", ")", "*", "B3"]);
/// ```
pub fn tokenize(text: &str) -> FormulaResult<Vec<String>> {
    let text = text.trim();
    let text = text.strip_prefix('=').unwrap_or(text);

    let mut scanner = Scanner::new(text);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_token(&mut self) -> FormulaResult<Option<String>> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        let token = match c {
            '+' | '-' | '*' | '/' | '(' | ')' => {
                self.advance();
                c.to_string()
            }
            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            c if c.is_ascii_alphabetic() => self.scan_label(),
            _ => return Err(FormulaError::InvalidFormula),
        };

        Ok(Some(token))
    }

    fn scan_number(&mut self) -> String {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent only when digits follow, so `2e` stays two tokens
        if self.peek_char().is_some_and(|c| c == 'e' || c == 'E') {
            let mut offset = 1;
            if self.peek_char_at(1).is_some_and(|c| c == '+' || c == '-') {
                offset = 2;
            }
            if self.peek_char_at(offset).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..offset {
                    self.advance();
                }
                while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        self.input[start..self.pos].to_string()
    }

    fn scan_label(&mut self) -> String {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        self.input[start..self.pos].to_ascii_uppercase()
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_arithmetic() {
        assert_eq!(tokenize("1+2*3").unwrap(), ["1", "+", "2", "*", "3"]);
        assert_eq!(tokenize("  = 10 / ( 4 - 2 ) ").unwrap(), ["10", "/", "(", "4", "-", "2", ")"]);
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(tokenize(".5 + 1.25").unwrap(), [".5", "+", "1.25"]);
        assert_eq!(tokenize("1e3*2E-2").unwrap(), ["1e3", "*", "2E-2"]);
    }

    #[test]
    fn test_tokenize_labels() {
        assert_eq!(tokenize("a1+Bc22").unwrap(), ["A1", "+", "BC22"]);
        // letters without a row still come through as one token
        assert_eq!(tokenize("abc").unwrap(), ["ABC"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("=").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_rejects_unknown_characters() {
        assert_eq!(tokenize("1 ^ 2"), Err(FormulaError::InvalidFormula));
        assert_eq!(tokenize("$A$1"), Err(FormulaError::InvalidFormula));
    }
}
