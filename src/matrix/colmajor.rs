//! Flat column-major dense matrix.
//!
//! Elements live in one contiguous buffer, column after column, so element
//! `(i, j)` sits at `j * nrows + i`. This is the same layout `from_raw`
//! constructors in faer-style APIs expect.

use crate::config::RenderOptions;
use crate::core::ops::MatrixOps;
use crate::core::traits::{Element, MatShape, Matrix};
use crate::error::MatError;
use crate::utils::validation::{check_element_count, check_same_shape, check_square};
use std::fmt;

#[derive(Clone, Debug)]
pub struct ColMajorMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Element> ColMajorMatrix<T> {
    /// Construct from raw column-major storage.
    ///
    /// `data.len()` must equal `nrows * ncols`.
    pub fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatError> {
        let len = check_element_count(nrows, ncols)?;
        check_same_shape("from_raw", (len, 1), (data.len(), 1))?;
        Ok(Self { nrows, ncols, data })
    }

    /// The column-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        col * self.nrows + row
    }
}

impl<T> MatShape for ColMajorMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Element> Matrix<T> for ColMajorMatrix<T> {
    fn create(nrows: usize, ncols: usize) -> Result<Self, MatError> {
        let len = check_element_count(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            data: vec![T::zero(); len],
        })
    }

    fn get(&self, row: usize, col: usize) -> Result<T, MatError> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError> {
        self.check_bounds(row, col)?;
        let k = self.offset(row, col);
        self.data[k] = value;
        Ok(())
    }

    fn clear(&mut self) {
        self.data.fill(T::zero());
    }

    fn fill_row_wise(&mut self) {
        let mut next = T::zero();
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                next = next.successor();
                let k = self.offset(i, j);
                self.data[k] = next;
            }
        }
    }

    fn fill_col_wise(&mut self) {
        // storage order is already column-wise
        let mut next = T::zero();
        for v in &mut self.data {
            next = next.successor();
            *v = next;
        }
    }

    fn transpose(&self) -> Self {
        log::trace!("transpose: allocating {}x{} result", self.ncols, self.nrows);
        let (m, n) = (self.nrows, self.ncols);
        // result is n x m; its column i is row i of self
        let data = (0..m)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.data[j * m + i])
            .collect();
        Self {
            nrows: n,
            ncols: m,
            data,
        }
    }

    fn make_identity(&mut self) -> Result<(), MatError> {
        check_square(self.dims())?;
        self.clear();
        for i in 0..self.nrows {
            let k = self.offset(i, i);
            self.data[k] = T::one();
        }
        Ok(())
    }
}

impl<T: Element> PartialEq for ColMajorMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> fmt::Display for ColMajorMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_is_column_major() {
        let m = ColMajorMatrix::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.to_rows().unwrap(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn from_raw_rejects_bad_input() {
        assert!(matches!(
            ColMajorMatrix::from_raw(2, 2, vec![1, 2, 3]),
            Err(MatError::DimensionMismatch { op: "from_raw", .. })
        ));
        assert!(matches!(
            ColMajorMatrix::<i32>::from_raw(0, 2, vec![]),
            Err(MatError::InvalidDimension { .. })
        ));
    }

    /// A shape whose element count overflows `usize` is rejected up front
    /// instead of producing an undersized buffer.
    #[test]
    fn oversized_shape_is_rejected() {
        let (r, c) = (1usize << 33, 1usize << 31);
        assert_eq!(
            ColMajorMatrix::<u8>::create(r, c).err(),
            Some(MatError::InvalidDimension { nrows: r, ncols: c })
        );
        assert_eq!(
            ColMajorMatrix::<u8>::from_raw(r, c, vec![]).err(),
            Some(MatError::InvalidDimension { nrows: r, ncols: c })
        );
    }

    #[test]
    fn fill_col_wise_matches_buffer_order() {
        let mut m = ColMajorMatrix::<u32>::create(2, 3).unwrap();
        m.fill_col_wise();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        m.fill_row_wise();
        assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn transpose_swaps_layout() {
        let mut m = ColMajorMatrix::<i64>::create(2, 3).unwrap();
        m.fill_row_wise();
        let t = m.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.to_rows().unwrap(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }
}
