//! Cell labels
//!
//! A label names a cell in A1 notation: column letters followed by a
//! 1-based row number (`A1`, `b7`, `XFD1048576`).

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell label (e.g., "A1", "AB12")
///
/// Labels are case-insensitive on input and always render upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellLabel {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellLabel {
    /// Create a new label from 0-based indices
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a label from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tally_sheets_core::CellLabel;
    ///
    /// let label = CellLabel::parse("A1").unwrap();
    /// assert_eq!(label.row, 0);
    /// assert_eq!(label.col, 0);
    ///
    /// let label = CellLabel::parse("c10").unwrap();
    /// assert_eq!(label.to_string(), "C10");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();

        let col_end = bytes
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(bytes.len());

        if col_end == 0 {
            return Err(Error::InvalidLabel(format!("no column letters in '{}'", s)));
        }

        let row_str = &s[col_end..];
        if row_str.is_empty() {
            return Err(Error::InvalidLabel(format!("no row number in '{}'", s)));
        }

        // `u32::from_str` would accept a leading '+'
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidLabel(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..col_end])?;

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::RowOutOfBounds(u32::MAX, MAX_ROWS - 1))?;

        // Labels are 1-based, we use 0-based internally
        if row == 0 {
            return Err(Error::InvalidLabel(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Check whether a token is syntactically a cell label
    ///
    /// This says nothing about whether the cell holds anything.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidLabel("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidLabel(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1))
                .ok_or(Error::ColumnOutOfBounds(u32::MAX, MAX_COLS - 1))?;
        }

        let col = col - 1;
        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(col as u16)
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl FromStr for CellLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellLabel::column_to_letters(0), "A");
        assert_eq!(CellLabel::column_to_letters(25), "Z");
        assert_eq!(CellLabel::column_to_letters(26), "AA");
        assert_eq!(CellLabel::column_to_letters(701), "ZZ");
        assert_eq!(CellLabel::column_to_letters(16383), "XFD");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellLabel::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellLabel::letters_to_column("AB").unwrap(), 27);
        assert_eq!(CellLabel::letters_to_column("XFD").unwrap(), 16383);
        assert_eq!(CellLabel::letters_to_column("xfd").unwrap(), 16383);
        assert!(CellLabel::letters_to_column("XFE").is_err());
        assert!(CellLabel::letters_to_column("ZZZZZZZZZZZZZZ").is_err());
    }

    #[test]
    fn test_label_parse() {
        assert_eq!(CellLabel::parse("A1").unwrap(), CellLabel::new(0, 0));
        assert_eq!(CellLabel::parse("B2").unwrap(), CellLabel::new(1, 1));
        assert_eq!(CellLabel::parse("aa10").unwrap(), CellLabel::new(9, 26));
    }

    #[test]
    fn test_label_parse_errors() {
        assert!(CellLabel::parse("").is_err());
        assert!(CellLabel::parse("A").is_err());
        assert!(CellLabel::parse("1").is_err());
        assert!(CellLabel::parse("A0").is_err());
        assert!(CellLabel::parse("A+1").is_err());
        assert!(CellLabel::parse("A1B").is_err());
        assert!(CellLabel::parse("$A$1").is_err());
        assert!(CellLabel::parse("A1048577").is_err());
        assert!(CellLabel::parse("A99999999999").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(CellLabel::is_valid("A1"));
        assert!(CellLabel::is_valid("z99"));
        assert!(!CellLabel::is_valid("42"));
        assert!(!CellLabel::is_valid("+"));
        assert!(!CellLabel::is_valid("("));
        assert!(!CellLabel::is_valid("1.5"));
    }

    #[test]
    fn test_display_round_trip() {
        let label: CellLabel = "c100".parse().unwrap();
        assert_eq!(label.to_string(), "C100");
        assert_eq!(CellLabel::new(0, 16383).to_string(), "XFD1");
    }
}
