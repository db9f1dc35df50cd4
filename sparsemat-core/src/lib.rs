#![no_std]

//! sparsemat-core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix type, its exact-integer
//! arithmetic and the pure text codec. It performs no I/O; the
//! `sparsemat` crate layers file and stream access on top.
//!
//! ```
//! use sparsemat_core::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=1\ncols=2\n(0, 0, 2)\n(0, 1, 3)\n".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=1\n(0, 0, 5)\n(1, 0, 7)\n".parse().unwrap();
//!
//! let product = a.multiplication(&b).unwrap();
//! assert_eq!(product.to_text(), "rows=1\ncols=1\n(0, 0, 31)\n");
//! ```

extern crate alloc;

pub mod config;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod traits;
pub mod validation;

pub use config::ParseConfig;
pub use error::{ErrorCategory, Field, MatrixError, Operation, ParseError, ParseErrorKind};
pub use format::{parse_matrix, write_text, DataType, Entry, Shape};
pub use matrix::SparseMatrix;
pub use traits::MatrixElement;
