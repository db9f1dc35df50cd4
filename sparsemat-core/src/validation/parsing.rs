//! Parsing utilities for matrix text lines
//!
//! This module provides pure parsing functions for the two kinds of
//! lines the format knows: `key=<integer>` headers and
//! `(<row>, <col>, <value>)` entries.

use core::str::FromStr;

use crate::error::{Field, ParseErrorKind};
use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR, HEADER_SEPARATOR};
use crate::format::Entry;
use crate::traits::MatrixElement;

/// Parse a header line of the form `key=<integer>`
///
/// Whitespace around the line, the key and the integer is ignored.
pub fn parse_header_line(
    line: &str,
    key: &'static str,
    field: Field,
) -> Result<usize, ParseErrorKind> {
    let (name, value) = line
        .trim()
        .split_once(HEADER_SEPARATOR)
        .ok_or(ParseErrorKind::MalformedHeader { key })?;

    if name.trim() != key {
        return Err(ParseErrorKind::UnexpectedHeaderKey { expected: key });
    }

    parse_field(value, field)
}

/// Parse an entry line of the form `(<row>, <col>, <value>)`
///
/// The line must start with `(` and end with `)` once trimmed, and
/// hold exactly three comma-separated integers. A zero value is
/// returned as-is; dropping it is the matrix setter's job.
pub fn parse_entry_line<T: MatrixElement>(line: &str) -> Result<Entry<T>, ParseErrorKind> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(ParseErrorKind::MissingParentheses)?;

    let mut fields = inner.split(FIELD_SEPARATOR);
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(row), Some(col), Some(value), None) => Ok(Entry::new(
            parse_field(row, Field::Row)?,
            parse_field(col, Field::Col)?,
            parse_field(value, Field::Value)?,
        )),
        _ => Err(ParseErrorKind::WrongArity {
            found: inner.split(FIELD_SEPARATOR).count(),
        }),
    }
}

/// Parse a single trimmed integer field
fn parse_field<V: FromStr>(s: &str, field: Field) -> Result<V, ParseErrorKind> {
    s.trim()
        .parse()
        .map_err(|_| ParseErrorKind::InvalidInteger { field })
}
