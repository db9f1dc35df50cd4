//! Sparse matrix storage and entry access

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::format::{Entry, Shape};
use crate::traits::MatrixElement;

/// Integer matrix that stores only its non-zero entries
///
/// The shape is fixed at construction. Entries live in a hash map keyed
/// by `(row, col)`; a key is present exactly when its value is non-zero.
/// Coordinates are signed and not checked against the shape: keeping
/// them inside `[0, rows) x [0, cols)` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    shape: Shape,
    pub(crate) entries: HashMap<(i64, i64), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            entries: HashMap::new(),
        }
    }

    /// Create an empty matrix with room for `capacity` entries
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Build a matrix by calling [`set`](Self::set) for each `(row, col, value)`
    ///
    /// Later triples overwrite earlier ones; zero values remove the key.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, T)>,
    {
        let entries = entries.into_iter();
        let mut matrix = Self::with_capacity(rows, cols, entries.size_hint().0);
        for (row, col, value) in entries {
            matrix.set(row, col, value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write a single entry
    ///
    /// A zero value removes `(row, col)` if present; anything else
    /// inserts or overwrites it.
    pub fn set(&mut self, row: i64, col: i64, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Read a single entry, `0` when absent
    pub fn get(&self, row: i64, col: i64) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Whether `(row, col)` holds a stored entry
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterate over stored entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries sorted by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self.iter().collect();
        entries.sort_unstable_by_key(Entry::key);
        entries
    }
}
