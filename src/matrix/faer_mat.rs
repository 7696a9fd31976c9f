//! Dense matrix backed by Faer.
//!
//! `FaerMatrix` wraps a `faer::Mat<T>` so floating-point matrices can move
//! between this crate's contract and Faer's own kernels without copying.

use crate::config::RenderOptions;
use crate::core::ops::MatrixOps;
use crate::core::traits::{Element, MatShape, Matrix};
use crate::error::MatError;
use crate::utils::validation::{check_dimensions, check_element_count, check_square};
use faer::Mat;
use num_traits::Float;
use std::fmt;

#[derive(Clone)]
pub struct FaerMatrix<T> {
    inner: Mat<T>,
}

impl<T: Element + Float> FaerMatrix<T> {
    /// Wrap an existing Faer matrix.
    ///
    /// Fails with [`MatError::InvalidDimension`] if `mat` has no rows or no columns.
    pub fn from_mat(mat: Mat<T>) -> Result<Self, MatError> {
        check_dimensions(mat.nrows(), mat.ncols())?;
        Ok(Self { inner: mat })
    }

    pub fn as_mat(&self) -> &Mat<T> {
        &self.inner
    }

    pub fn into_inner(self) -> Mat<T> {
        self.inner
    }
}

impl<T: Element + Float> MatShape for FaerMatrix<T> {
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
}

impl<T: Element + Float> Matrix<T> for FaerMatrix<T> {
    fn create(nrows: usize, ncols: usize) -> Result<Self, MatError> {
        check_element_count(nrows, ncols)?;
        Ok(Self {
            inner: Mat::from_fn(nrows, ncols, |_, _| T::zero()),
        })
    }

    fn get(&self, row: usize, col: usize) -> Result<T, MatError> {
        self.check_bounds(row, col)?;
        Ok(self.inner[(row, col)])
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError> {
        self.check_bounds(row, col)?;
        self.inner[(row, col)] = value;
        Ok(())
    }

    fn clear(&mut self) {
        for j in 0..self.inner.ncols() {
            for i in 0..self.inner.nrows() {
                self.inner[(i, j)] = T::zero();
            }
        }
    }

    fn fill_row_wise(&mut self) {
        let mut next = T::zero();
        for i in 0..self.inner.nrows() {
            for j in 0..self.inner.ncols() {
                next = next.successor();
                self.inner[(i, j)] = next;
            }
        }
    }

    fn fill_col_wise(&mut self) {
        let mut next = T::zero();
        for j in 0..self.inner.ncols() {
            for i in 0..self.inner.nrows() {
                next = next.successor();
                self.inner[(i, j)] = next;
            }
        }
    }

    fn transpose(&self) -> Self {
        let (m, n) = (self.inner.nrows(), self.inner.ncols());
        log::trace!("transpose: allocating {n}x{m} result");
        Self {
            inner: Mat::from_fn(n, m, |i, j| self.inner[(j, i)]),
        }
    }

    fn make_identity(&mut self) -> Result<(), MatError> {
        check_square(self.dims())?;
        let n = self.inner.nrows();
        for j in 0..n {
            for i in 0..n {
                self.inner[(i, j)] = if i == j { T::one() } else { T::zero() };
            }
        }
        Ok(())
    }
}

impl<T: Element + Float> PartialEq for FaerMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element + Float> fmt::Debug for FaerMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaerMatrix")
            .field("nrows", &self.nrows())
            .field("ncols", &self.ncols())
            .field("rows", &self.to_rows().map_err(|_| fmt::Error)?)
            .finish()
    }
}

impl<T: Element + Float> fmt::Display for FaerMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &RenderOptions::default())
    }
}
