//! Text format constants

/// Key of the first header line (`rows=<n>`)
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line (`cols=<n>`)
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';
