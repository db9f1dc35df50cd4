//! Text encoding of sparse matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Decoding skips blank lines after the header. Encoding writes entries
//! sorted by `(row, col)` and no blank lines, so two matrices with the
//! same content always encode to the same bytes.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use super::constants::{COLS_KEY, ROWS_KEY};
use super::header::Shape;
use crate::config::ParseConfig;
use crate::error::{Field, ParseError, ParseErrorKind};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{check_coordinate, parse_entry_line, parse_header_line};

/// Decode a matrix from its text form
///
/// Every data line is applied through [`SparseMatrix::set`], so a
/// repeated coordinate keeps its last value and zero values are
/// dropped. Errors carry the 1-based number of the offending line.
pub fn parse_matrix<T: MatrixElement>(
    text: &str,
    config: &ParseConfig,
) -> Result<SparseMatrix<T>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line));

    let rows = parse_header(lines.next(), 1, ROWS_KEY, Field::Rows)?;
    let cols = parse_header(lines.next(), 2, COLS_KEY, Field::Cols)?;
    let shape = Shape::new(rows, cols);

    let mut matrix = SparseMatrix::new(rows, cols);
    for (line_number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let at_line = |kind| ParseError::new(line_number, kind);
        let entry = parse_entry_line::<T>(line).map_err(at_line)?;
        if config.bounds_check() {
            check_coordinate(entry.row, entry.col, shape).map_err(at_line)?;
        }
        matrix.set(entry.row, entry.col, entry.value);
    }

    Ok(matrix)
}

fn parse_header(
    line: Option<(usize, &str)>,
    expected_line: usize,
    key: &'static str,
    field: Field,
) -> Result<usize, ParseError> {
    let (line_number, line) =
        line.ok_or(ParseError::new(expected_line, ParseErrorKind::MissingHeader { key }))?;
    parse_header_line(line, key, field).map_err(|kind| ParseError::new(line_number, kind))
}

/// Encode a matrix into any `fmt::Write` sink
pub fn write_text<T, W>(matrix: &SparseMatrix<T>, out: &mut W) -> fmt::Result
where
    T: MatrixElement,
    W: fmt::Write,
{
    matrix.shape().write_header(out)?;
    for entry in matrix.sorted_entries() {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Decode with the default [`ParseConfig`]
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_matrix(text, &ParseConfig::default())
    }

    /// Encode into a freshly allocated string
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails
        let _ = write_text(self, &mut out);
        out
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats the matrix in its text encoding
impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(self, f)
    }
}
