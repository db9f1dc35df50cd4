//! Matrix arithmetic
//!
//! Addition, subtraction and multiplication never mutate an operand
//! and always build a fresh result. Every step uses checked integer
//! arithmetic, so a result is either exact or an [`MatrixError::Overflow`].

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::{MatrixError, Operation, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Elementwise sum
    ///
    /// Both operands must have the same shape. Entries that sum to zero
    /// are not stored.
    pub fn addition(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, Operation::Addition)?;

        let capacity = self.nnz().max(other.nnz());
        let mut result = Self::with_capacity(self.rows(), self.cols(), capacity);
        for (&(row, col), &value) in &self.entries {
            let sum = value
                .checked_add(other.get(row, col))
                .ok_or(overflow(Operation::Addition, row, col))?;
            result.set(row, col, sum);
        }
        for (&(row, col), &value) in &other.entries {
            if !self.entries.contains_key(&(row, col)) {
                result.set(row, col, value);
            }
        }
        Ok(result)
    }

    /// Elementwise difference `self - other`
    ///
    /// Both operands must have the same shape. Entries present only in
    /// `other` come out negated.
    pub fn subtraction(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, Operation::Subtraction)?;

        let capacity = self.nnz().max(other.nnz());
        let mut result = Self::with_capacity(self.rows(), self.cols(), capacity);
        for (&(row, col), &value) in &self.entries {
            let difference = value
                .checked_sub(other.get(row, col))
                .ok_or(overflow(Operation::Subtraction, row, col))?;
            result.set(row, col, difference);
        }
        for (&(row, col), &value) in &other.entries {
            if !self.entries.contains_key(&(row, col)) {
                let negated = value
                    .checked_neg()
                    .ok_or(overflow(Operation::Subtraction, row, col))?;
                result.set(row, col, negated);
            }
        }
        Ok(result)
    }

    /// Matrix product `self x other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`. Only stored entries take part: each
    /// entry `(r, c)` of `self` is combined with the stored entries of
    /// row `c` of `other`.
    ///
    /// Each output cell is summed in `T::Wide` and narrowed once, so a
    /// cell fails with [`MatrixError::Overflow`] only when its exact
    /// value does not fit `T`, whatever order the entries come in.
    pub fn multiplication(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiplication,
                left: self.shape(),
                right: other.shape(),
            });
        }

        // Stored entries of `other` grouped by row, limited to its declared columns
        let mut other_rows: HashMap<i64, Vec<(i64, T)>> = HashMap::new();
        for (&(row, col), &value) in &other.entries {
            if other.shape().contains_col(col) {
                other_rows.entry(row).or_default().push((col, value));
            }
        }

        let mut products: HashMap<(i64, i64), Vec<T::Wide>> = HashMap::new();
        for (&(row, col), &value) in &self.entries {
            let Some(other_row) = other_rows.get(&col) else {
                continue;
            };
            for &(k, other_value) in other_row {
                let product = value
                    .widen()
                    .checked_mul(other_value.widen())
                    .ok_or(overflow(Operation::Multiplication, row, k))?;
                products.entry((row, k)).or_default().push(product);
            }
        }

        let mut result = Self::with_capacity(self.rows(), other.cols(), products.len());
        for ((row, col), terms) in products {
            let value = exact_sum(terms)
                .and_then(T::narrow)
                .ok_or(overflow(Operation::Multiplication, row, col))?;
            result.set(row, col, value);
        }
        Ok(result)
    }

    fn ensure_same_shape(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

/// Sum `terms` so that no partial sum leaves the range spanned by the
/// terms and the total
///
/// A negative term is added while the running sum is non-negative and
/// a positive one while it is negative. Once one sign runs out the
/// remaining partial sums move monotonically toward the total. This
/// returns `None` only if the total itself overflows.
fn exact_sum<W: MatrixElement>(terms: Vec<W>) -> Option<W> {
    let (mut positive, mut negative): (Vec<W>, Vec<W>) =
        terms.into_iter().partition(|&term| term > W::ZERO);

    let mut sum = W::ZERO;
    loop {
        let next = if sum < W::ZERO {
            positive.pop().or_else(|| negative.pop())
        } else {
            negative.pop().or_else(|| positive.pop())
        };
        match next {
            Some(term) => sum = sum.checked_add(term)?,
            None => return Some(sum),
        }
    }
}

fn overflow(operation: Operation, row: i64, col: i64) -> MatrixError {
    MatrixError::Overflow {
        operation,
        row,
        col,
    }
}
