//! Column reader for `^`-separated dictionary lines.
//!
//! This module provides [`LineReader`], a cursor-like type that walks the
//! columns of one table line without copying them.

use memchr::memchr;

use crate::number::{parse_auto, parse_decimal};
use crate::{Error, Result};

/// Column separator used by every dictionary table.
pub const SEPARATOR: u8 = b'^';

const QUOTE: u8 = b'"';

/// Split a line into columns.
///
/// A column that starts with a double quote runs until a quote followed by
/// a separator or the end of the line, so separators inside it do not
/// split. Its wrapping quotes are removed. Any other column ends at the next
/// separator; stray quotes at its edges are dropped, interior ones kept.
pub fn split_columns(line: &str) -> Vec<&str> {
    let mut columns = Vec::new();
    let mut start = 0;

    loop {
        let (column, next) = if line.as_bytes().get(start) == Some(&QUOTE) {
            quoted_column(line, start)
        } else {
            bare_column(line, start)
        };
        columns.push(column);
        match next {
            Some(next) => start = next,
            None => break,
        }
    }

    columns
}

/// Column starting at `start` and the start of the following column, if any.
fn bare_column(line: &str, start: usize) -> (&str, Option<usize>) {
    match memchr(SEPARATOR, &line.as_bytes()[start..]) {
        Some(found) => (trim_quotes(&line[start..start + found]), Some(start + found + 1)),
        None => (trim_quotes(&line[start..]), None),
    }
}

fn quoted_column(line: &str, start: usize) -> (&str, Option<usize>) {
    let bytes = line.as_bytes();
    let mut pos = start + 1;

    while let Some(found) = memchr(QUOTE, &bytes[pos..]) {
        let at = pos + found;
        match bytes.get(at + 1) {
            None => return (&line[start + 1..at], None),
            Some(&SEPARATOR) => return (&line[start + 1..at], Some(at + 2)),
            Some(_) => pos = at + 1,
        }
    }

    // Never closed: read it like an unquoted column.
    bare_column(line, start)
}

fn trim_quotes(column: &str) -> &str {
    column.trim_matches('"')
}

/// A reader over the columns of a single line.
///
/// # Example
///
/// ```
/// use qmidb_common::LineReader;
///
/// let mut reader = LineReader::new(r#"10^"Signal Strength"^0x1F"#);
///
/// assert_eq!(reader.read_i64().unwrap(), 10);
/// assert_eq!(reader.read_str().unwrap(), "Signal Strength");
/// assert_eq!(reader.read_i64_auto().unwrap(), 31);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    columns: Vec<&'a str>,
    position: usize,
}

impl<'a> LineReader<'a> {
    /// Create a new reader from a raw line. Surrounding whitespace is trimmed.
    pub fn new(line: &'a str) -> Self {
        Self {
            columns: split_columns(line.trim()),
            position: 0,
        }
    }

    /// Get the total number of columns on the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no more columns to read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position >= self.columns.len()
    }

    /// Read the next column as a string with wrapping quotes removed.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let column = self
            .columns
            .get(self.position)
            .copied()
            .ok_or(Error::MissingColumn {
                column: self.position,
                available: self.columns.len(),
            })?;
        self.position += 1;
        Ok(column)
    }

    /// Read the next column as a decimal integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        let column = self.position;
        let text = self.read_str()?;
        parse_decimal(text).ok_or_else(|| invalid_number(column, text))
    }

    /// Read the next column as an integer with radix prefix detection.
    pub fn read_i64_auto(&mut self) -> Result<i64> {
        let column = self.position;
        let text = self.read_str()?;
        parse_auto(text).ok_or_else(|| invalid_number(column, text))
    }

    /// Read the next column as a flag (non-zero = true).
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_i64().map(|v| v != 0)
    }

    /// Read an optional trailing integer column.
    ///
    /// Returns `None` when the line has ended or the column is empty.
    pub fn read_optional_i64(&mut self) -> Result<Option<i64>> {
        match self.columns.get(self.position) {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => {
                self.position += 1;
                Ok(None)
            }
            Some(_) => self.read_i64().map(Some),
        }
    }

    /// Read an optional trailing flag column.
    pub fn read_optional_bool(&mut self) -> Result<Option<bool>> {
        self.read_optional_i64().map(|v| v.map(|v| v != 0))
    }
}

fn invalid_number(column: usize, text: &str) -> Error {
    Error::InvalidNumber {
        column,
        value: text.to_string(),
    }
}
