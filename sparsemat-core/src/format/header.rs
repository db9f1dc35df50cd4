//! Shape, entry and element-type definitions
//!
//! This module contains the value types that describe a matrix file:
//! its `rows=`/`cols=` header, its entry lines and the integer type
//! the entries are decoded into.

use core::fmt;

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};

/// Fixed `(rows, cols)` dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` lies inside `[0, rows) x [0, cols)`
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.contains_row(row) && self.contains_col(col)
    }

    pub fn contains_row(&self, row: i64) -> bool {
        usize::try_from(row).is_ok_and(|row| row < self.rows)
    }

    pub fn contains_col(&self, col: i64) -> bool {
        usize::try_from(col).is_ok_and(|col| col < self.cols)
    }

    /// Render the two header lines, each terminated by `\n`
    pub fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{}", self.rows)?;
        writeln!(out, "{COLS_KEY}{HEADER_SEPARATOR}{}", self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A single stored (non-zero) entry
///
/// Coordinates are signed: the text format accepts any integer
/// coordinate, including ones outside the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: i64,
    pub col: i64,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: i64, col: i64, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row-major sort key
    pub const fn key(&self) -> (i64, i64) {
        (self.row, self.col)
    }
}

/// Entry lines are printed as `(<row>, <col>, <value>)`
impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

/// Integer types an entry can be decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::I8 => write!(f, "i8"),
            DataType::I16 => write!(f, "i16"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::I128 => write!(f, "i128"),
        }
    }
}
