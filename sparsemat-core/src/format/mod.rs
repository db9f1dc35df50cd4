//! Text format definitions for sparse matrix files
//!
//! This module contains the data types shared by the codec and the
//! pure string encoder/decoder. No I/O happens here; callers hand in
//! a `&str` and receive a `String` (or render into any `fmt::Write`).

pub mod constants;
pub mod header;
pub mod text;

pub use header::{DataType, Entry, Shape};
pub use text::{parse_matrix, write_text};
