//! Parse configuration

/// Options controlling how matrix text is decoded
///
/// ```
/// use sparsemat_core::ParseConfig;
///
/// let config = ParseConfig::default().with_bounds_check(true);
/// assert!(config.bounds_check());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    bounds_check: bool,
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            bounds_check: false,
        }
    }

    /// Reject entries whose coordinates fall outside the declared shape
    ///
    /// Off by default: out-of-range entries are accepted as written.
    pub const fn with_bounds_check(mut self, enabled: bool) -> Self {
        self.bounds_check = enabled;
        self
    }

    pub const fn bounds_check(&self) -> bool {
        self.bounds_check
    }
}
