use thiserror::Error;

// Unified error type for matrixkit

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    #[error("invalid dimensions {nrows}x{ncols}: rows and columns must be positive")]
    InvalidDimension { nrows: usize, ncols: usize },
    #[error("index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("dimension mismatch in {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("matrix is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("arithmetic overflow in {op} at ({row}, {col})")]
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },
}
