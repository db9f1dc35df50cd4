//! Line-level validation for the matrix text format
//!
//! This module contains pure functions with no I/O dependencies. Each
//! one inspects a single trimmed line (or a decoded coordinate) and
//! either returns the decoded value or the reason it was rejected.

pub mod bounds;
pub mod parsing;

pub use bounds::check_coordinate;
pub use parsing::{parse_entry_line, parse_header_line};
