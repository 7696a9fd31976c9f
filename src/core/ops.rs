//! Dimension-generic matrix algorithms.
//!
//! Everything here is written against the [`Matrix`] accessor contract only,
//! so it works unchanged for every storage backend. The `other` operand of a
//! binary operation may use a different backend than the receiver; results
//! are always allocated fresh through the receiver's `create`.
//!
//! # Usage
//! ```rust,ignore
//! use matrixkit::{DenseMatrix, Matrix, MatrixOps};
//! let mut a = DenseMatrix::<i64>::create(3, 3)?;
//! a.fill_row_wise();
//! let i = DenseMatrix::<i64>::identity(3)?;
//! assert!(a.multiply(&i)?.equals(&a));
//! ```

use crate::config::RenderOptions;
use crate::core::traits::{Element, Matrix};
use crate::error::MatError;
use crate::utils::validation::{check_inner_dims, check_same_shape};
use std::fmt;

/// Algorithms shared by every [`Matrix`] implementation.
pub trait MatrixOps<T: Element>: Matrix<T> {
    /// Elementwise sum `self + other` as a new matrix.
    ///
    /// Fails with [`MatError::DimensionMismatch`] unless both shapes agree,
    /// and with [`MatError::Overflow`] if an integer sum is not representable.
    fn add<O: Matrix<T>>(&self, other: &O) -> Result<Self, MatError> {
        let (nrows, ncols) = self.dims();
        check_same_shape("add", (nrows, ncols), other.dims())?;
        log::trace!("add: allocating {nrows}x{ncols} result");
        let mut out = Self::create(nrows, ncols)?;
        for i in 0..nrows {
            for j in 0..ncols {
                let sum = self
                    .get(i, j)?
                    .add_checked(other.get(i, j)?)
                    .ok_or(MatError::Overflow { op: "add", row: i, col: j })?;
                out.set(i, j, sum)?;
            }
        }
        Ok(out)
    }

    /// Matrix product `self * other` as a new `self.nrows() x other.ncols()` matrix.
    ///
    /// Fails with [`MatError::DimensionMismatch`] if `self.ncols() != other.nrows()`,
    /// and with [`MatError::Overflow`] if an integer product or partial sum
    /// is not representable.
    fn multiply<O: Matrix<T>>(&self, other: &O) -> Result<Self, MatError> {
        check_inner_dims("multiply", self.dims(), other.dims())?;
        let (m, k, n) = (self.nrows(), self.ncols(), other.ncols());
        log::trace!("multiply: allocating {m}x{n} result (inner {k})");
        let mut out = Self::create(m, n)?;
        for i in 0..m {
            for j in 0..n {
                let overflow = MatError::Overflow {
                    op: "multiply",
                    row: i,
                    col: j,
                };
                let mut sum = T::zero();
                for p in 0..k {
                    let term = self
                        .get(i, p)?
                        .mul_checked(other.get(p, j)?)
                        .ok_or(overflow)?;
                    sum = sum.add_checked(term).ok_or(overflow)?;
                }
                out.set(i, j, sum)?;
            }
        }
        Ok(out)
    }

    /// Structural equality: same shape and every element pair equal.
    fn equals<O: Matrix<T>>(&self, other: &O) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        let (nrows, ncols) = self.dims();
        (0..nrows).all(|i| {
            (0..ncols).all(|j| match (self.get(i, j), other.get(i, j)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            })
        })
    }

    /// Human-readable grid, one line per row, elements right-aligned.
    fn render(&self, options: &RenderOptions) -> Result<String, MatError> {
        let width = options.width;
        let mut out = String::new();
        for row in self.to_rows()? {
            for v in row {
                out.push_str(&format!("{v:>width$}"));
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Stream the grid produced by [`render`](Self::render) into a formatter.
    fn write_grid<W: fmt::Write>(&self, out: &mut W, options: &RenderOptions) -> fmt::Result {
        let (nrows, ncols) = self.dims();
        let width = options.width;
        for i in 0..nrows {
            for j in 0..ncols {
                let v = self.get(i, j).map_err(|_| fmt::Error)?;
                write!(out, "{v:>width$}")?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Copy the elements out as row vectors.
    fn to_rows(&self) -> Result<Vec<Vec<T>>, MatError> {
        let (nrows, ncols) = self.dims();
        (0..nrows)
            .map(|i| (0..ncols).map(|j| self.get(i, j)).collect())
            .collect()
    }

    /// Build a matrix from row vectors.
    ///
    /// Fails with [`MatError::InvalidDimension`] for an empty input and with
    /// [`MatError::DimensionMismatch`] when the rows are ragged.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut out = Self::create(nrows, ncols)?;
        for (i, row) in rows.iter().enumerate() {
            check_same_shape("from_rows", (1, ncols), (1, row.len()))?;
            for (j, &v) in row.iter().enumerate() {
                out.set(i, j, v)?;
            }
        }
        Ok(out)
    }

    /// `n x n` identity matrix.
    fn identity(n: usize) -> Result<Self, MatError> {
        let mut out = Self::create(n, n)?;
        out.make_identity()?;
        Ok(out)
    }
}

impl<T: Element, M: Matrix<T>> MatrixOps<T> for M {}
