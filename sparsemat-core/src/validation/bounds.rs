//! Coordinate bounds validation

use crate::error::ParseErrorKind;
use crate::format::Shape;

/// Validate that a decoded coordinate lies inside the declared shape
///
/// Only consulted when bounds checking is enabled in
/// [`ParseConfig`](crate::ParseConfig); plain parsing accepts any
/// coordinate.
pub fn check_coordinate(row: i64, col: i64, shape: Shape) -> Result<(), ParseErrorKind> {
    if !shape.contains(row, col) {
        return Err(ParseErrorKind::CoordinateOutOfBounds { row, col, shape });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_coordinate() {
        let shape = Shape::new(2, 3);

        assert_eq!(check_coordinate(0, 0, shape), Ok(()));
        assert_eq!(check_coordinate(1, 2, shape), Ok(()));

        assert_eq!(
            check_coordinate(2, 0, shape),
            Err(ParseErrorKind::CoordinateOutOfBounds { row: 2, col: 0, shape })
        );
        assert_eq!(
            check_coordinate(0, 3, shape),
            Err(ParseErrorKind::CoordinateOutOfBounds { row: 0, col: 3, shape })
        );
        assert_eq!(
            check_coordinate(-1, 0, shape),
            Err(ParseErrorKind::CoordinateOutOfBounds { row: -1, col: 0, shape })
        );
    }

    #[test]
    fn test_empty_shape_rejects_everything() {
        assert!(check_coordinate(0, 0, Shape::new(0, 0)).is_err());
    }
}
