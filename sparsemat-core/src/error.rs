//! Error types for sparse matrix operations

use core::fmt;

use crate::format::Shape;

/// Broad classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed text input
    Format,
    /// Incompatible operand shapes
    Dimension,
    /// Integer overflow during arithmetic
    Arithmetic,
}

/// Arithmetic operation that raised a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        };
        f.write_str(name)
    }
}

/// Errors raised by matrix arithmetic
///
/// Both variants are detected before a result is handed back; no
/// partial matrix ever escapes a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },
    /// A result value does not fit the element type
    Overflow {
        operation: Operation,
        row: i64,
        col: i64,
    },
}

impl MatrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            MatrixError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch {
                operation: Operation::Multiplication,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions must match for multiplication: {} (cols) != {} (rows) ({left} x {right})",
                left.cols, right.rows
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions must match for {operation}: {left} != {right}"
            ),
            MatrixError::Overflow {
                operation,
                row,
                col,
            } => write!(f, "Integer overflow during {operation} at ({row}, {col})"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Field of the text format a parse failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rows,
    Cols,
    Row,
    Col,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Rows => "rows",
            Field::Cols => "cols",
            Field::Row => "row",
            Field::Col => "col",
            Field::Value => "value",
        };
        f.write_str(name)
    }
}

/// Specific reason a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before the named header line
    MissingHeader { key: &'static str },
    /// Header line has no `=` separator
    MalformedHeader { key: &'static str },
    /// Header line names a different key than expected
    UnexpectedHeaderKey { expected: &'static str },
    /// A dimension or entry field is not an integer of the right type
    InvalidInteger { field: Field },
    /// Entry line does not start with `(` or end with `)`
    MissingParentheses,
    /// Entry line does not hold exactly three fields
    WrongArity { found: usize },
    /// Entry coordinate lies outside the declared shape (bounds-checked parsing only)
    CoordinateOutOfBounds { row: i64, col: i64, shape: Shape },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingHeader { key } => {
                write!(f, "missing `{key}=<integer>` header line")
            }
            ParseErrorKind::MalformedHeader { key } => {
                write!(f, "expected `{key}=<integer>`")
            }
            ParseErrorKind::UnexpectedHeaderKey { expected } => {
                write!(f, "expected header key `{expected}`")
            }
            ParseErrorKind::InvalidInteger { field } => {
                write!(f, "invalid integer for {field}")
            }
            ParseErrorKind::MissingParentheses => {
                f.write_str("entry must be enclosed in `(` and `)`")
            }
            ParseErrorKind::WrongArity { found } => {
                write!(f, "entry must have 3 comma-separated values, found {found}")
            }
            ParseErrorKind::CoordinateOutOfBounds { row, col, shape } => {
                write!(f, "entry ({row}, {col}) lies outside {shape} matrix")
            }
        }
    }
}

/// A rejected line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub const fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Format
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl core::error::Error for ParseError {}

/// Result type for matrix arithmetic
pub type Result<T> = core::result::Result<T, MatrixError>;
