//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as entries of a sparse matrix. Only exact integer types
//! qualify, so every arithmetic step is checked rather than rounded.

use core::fmt::{Debug, Display};
use core::str::FromStr;

use crate::format::DataType;

/// Trait for types that can be stored as matrix entries
///
/// All element types must be:
/// - Copy: entries are read out of the map by value
/// - Ord: zero detection and sign tests are exact comparisons
/// - FromStr/Display: the text codec parses and prints them
pub trait MatrixElement: Copy + Ord + Debug + Display + FromStr + Sized {
    /// The additive identity; never stored in a matrix
    const ZERO: Self;

    /// Accumulator type for sums of products
    ///
    /// Wide enough that the product of any two `Self` values fits.
    /// `i128` is its own accumulator.
    type Wide: MatrixElement;

    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    fn widen(self) -> Self::Wide;

    /// Convert back from the accumulator, `None` when out of range
    fn narrow(wide: Self::Wide) -> Option<Self>;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident, $wide:ty);* $(;)?) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                type Wide = $wide;

                fn data_type() -> DataType {
                    DataType::$tag
                }

                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element! {
    i8 => I8, i128;
    i16 => I16, i128;
    i32 => I32, i128;
    i64 => I64, i128;
    i128 => I128, i128;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        assert_eq!(<i32 as MatrixElement>::data_type(), DataType::I32);
        assert_eq!(<i64 as MatrixElement>::data_type(), DataType::I64);
    }

    #[test]
    fn test_widen_and_narrow() {
        assert_eq!(i64::MIN.widen() * i64::MIN.widen(), 1i128 << 126);
        assert_eq!(<i8 as MatrixElement>::narrow(127), Some(127i8));
        assert_eq!(<i8 as MatrixElement>::narrow(128), None);
        assert_eq!(<i8 as MatrixElement>::narrow(-129), None);
        assert_eq!(<i128 as MatrixElement>::narrow(i128::MAX), Some(i128::MAX));
    }

    #[test]
    fn test_checked_ops_detect_overflow() {
        assert_eq!(MatrixElement::checked_add(i8::MAX, 1), None);
        assert_eq!(MatrixElement::checked_sub(i8::MIN, 1), None);
        assert_eq!(MatrixElement::checked_mul(64i8, 2), None);
        assert_eq!(MatrixElement::checked_neg(i8::MIN), None);
        assert_eq!(MatrixElement::checked_add(40i64, 2), Some(42));
    }

    #[test]
    fn test_is_zero() {
        assert!(0i64.is_zero());
        assert!(!(-1i32).is_zero());
    }
}
