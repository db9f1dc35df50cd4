//! sparsemat - Sparse Integer Matrices with File I/O
//!
//! This library stores integer matrices sparsely, adds, subtracts and
//! multiplies them exactly, and reads/writes them in a small text format.
//!
//! ## Architecture
//!
//! sparsemat follows a clean specification/implementation separation:
//!
//! - **sparsemat-core**: the matrix type, arithmetic and pure text codec (no I/O)
//! - **sparsemat**: file and stream access, path-aware errors and logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{MatrixFile, SparseMatrix};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let a: SparseMatrix = MatrixFile::read_matrix("a.txt")?;
//!     let b: SparseMatrix = MatrixFile::read_matrix("b.txt")?;
//!
//!     let sum = a.addition(&b)?;
//!     MatrixFile::write_matrix("sum.txt", &sum)?;
//!     Ok(())
//! }
//! ```
//!
//! ## File Format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (2, 2, -1)
//! ```
//!
//! Blank lines after the header are ignored on read. On write, entries
//! come out sorted by `(row, col)`.

// Re-export core abstractions and format definitions
pub use sparsemat_core::{
    // Matrix and element trait
    SparseMatrix, MatrixElement,
    // Format definitions
    DataType, Entry, Shape, ParseConfig,
    // Core errors
    ErrorCategory, Field, MatrixError, Operation, ParseError, ParseErrorKind,
    // Pure codec
    parse_matrix, write_text,
};

pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;

pub use error::{Error, Result};
pub use file_io::{read_from, write_to, MatrixFile, STREAM_PATH};
