//! Dimension and index validation.
//!
//! Pure functions with no access to element storage. Every error condition
//! the matrix types report is decided here, so storages and algorithms agree
//! on what counts as a valid shape or index.

use crate::error::MatError;

/// Validate a requested shape: both counts must be positive.
pub const fn check_dimensions(nrows: usize, ncols: usize) -> Result<(), MatError> {
    if nrows == 0 || ncols == 0 {
        return Err(MatError::InvalidDimension { nrows, ncols });
    }
    Ok(())
}

/// Validate a shape and return its element count `nrows * ncols`.
///
/// A product that does not fit in `usize` is reported as
/// [`MatError::InvalidDimension`], the same as a zero count.
pub const fn check_element_count(nrows: usize, ncols: usize) -> Result<usize, MatError> {
    if let Err(e) = check_dimensions(nrows, ncols) {
        return Err(e);
    }
    match nrows.checked_mul(ncols) {
        Some(len) => Ok(len),
        None => Err(MatError::InvalidDimension { nrows, ncols }),
    }
}

/// Validate that `(row, col)` lies in `[0, nrows) x [0, ncols)`.
pub fn check_index(
    (nrows, ncols): (usize, usize),
    row: usize,
    col: usize,
) -> Result<(), MatError> {
    if row >= nrows || col >= ncols {
        return Err(MatError::OutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate that two shapes are identical (elementwise operations).
pub fn check_same_shape(
    op: &'static str,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), MatError> {
    if lhs != rhs {
        log::debug!("{op} rejected: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1);
        return Err(mismatch(op, lhs, rhs));
    }
    Ok(())
}

/// Validate that `lhs` columns match `rhs` rows (matrix product).
pub fn check_inner_dims(
    op: &'static str,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), MatError> {
    if lhs.1 != rhs.0 {
        log::debug!(
            "{op} rejected: inner dimensions {} and {} differ",
            lhs.1,
            rhs.0
        );
        return Err(mismatch(op, lhs, rhs));
    }
    Ok(())
}

/// Validate that a shape is square.
pub fn check_square((nrows, ncols): (usize, usize)) -> Result<(), MatError> {
    if nrows != ncols {
        log::debug!("identity rejected: {nrows}x{ncols} is not square");
        return Err(MatError::NotSquare { nrows, ncols });
    }
    Ok(())
}

fn mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> MatError {
    MatError::DimensionMismatch {
        op,
        lhs_rows: lhs.0,
        lhs_cols: lhs.1,
        rhs_rows: rhs.0,
        rhs_cols: rhs.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions() {
        assert_eq!(check_dimensions(1, 1), Ok(()));
        assert_eq!(check_dimensions(3, 7), Ok(()));
        assert_eq!(
            check_dimensions(0, 2),
            Err(MatError::InvalidDimension { nrows: 0, ncols: 2 })
        );
        assert_eq!(
            check_dimensions(2, 0),
            Err(MatError::InvalidDimension { nrows: 2, ncols: 0 })
        );
    }

    #[test]
    fn test_check_element_count() {
        assert_eq!(check_element_count(3, 2), Ok(6));
        assert_eq!(check_element_count(1, usize::MAX), Ok(usize::MAX));
        assert_eq!(
            check_element_count(1 << 33, 1 << 31),
            Err(MatError::InvalidDimension {
                nrows: 1 << 33,
                ncols: 1 << 31
            })
        );
        assert_eq!(
            check_element_count(usize::MAX, 2),
            Err(MatError::InvalidDimension {
                nrows: usize::MAX,
                ncols: 2
            })
        );
        assert_eq!(
            check_element_count(0, 5),
            Err(MatError::InvalidDimension { nrows: 0, ncols: 5 })
        );
    }

    #[test]
    fn test_check_index() {
        for r in 0..3 {
            for c in 0..2 {
                assert_eq!(check_index((3, 2), r, c), Ok(()));
            }
        }
        // one past the end, and the wrapped value of -1
        for (r, c) in [(3, 1), (2, 2), (usize::MAX, 0), (0, usize::MAX)] {
            assert_eq!(
                check_index((3, 2), r, c),
                Err(MatError::OutOfBounds {
                    row: r,
                    col: c,
                    nrows: 3,
                    ncols: 2
                })
            );
        }
    }

    #[test]
    fn test_shape_checks() {
        assert_eq!(check_same_shape("add", (2, 3), (2, 3)), Ok(()));
        assert!(matches!(
            check_same_shape("add", (2, 3), (3, 2)),
            Err(MatError::DimensionMismatch { op: "add", .. })
        ));
        assert_eq!(check_inner_dims("multiply", (3, 2), (2, 5)), Ok(()));
        assert_eq!(
            check_inner_dims("multiply", (3, 2), (4, 4)),
            Err(MatError::DimensionMismatch {
                op: "multiply",
                lhs_rows: 3,
                lhs_cols: 2,
                rhs_rows: 4,
                rhs_cols: 4
            })
        );
        assert_eq!(check_square((4, 4)), Ok(()));
        assert_eq!(
            check_square((3, 2)),
            Err(MatError::NotSquare { nrows: 3, ncols: 2 })
        );
    }
}
