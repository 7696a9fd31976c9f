//! Row-array dense matrix.
//!
//! `DenseMatrix` keeps one `Vec<T>` per row, indexed directly by row and then
//! column. It is the reference storage: every other backend must produce the
//! same observable results.

use crate::config::RenderOptions;
use crate::core::ops::MatrixOps;
use crate::core::traits::{Element, MatShape, Matrix};
use crate::error::MatError;
use crate::utils::validation::{check_element_count, check_square};
use std::fmt;

#[derive(Clone, Debug)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    rows: Vec<Vec<T>>,
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    fn create(nrows: usize, ncols: usize) -> Result<Self, MatError> {
        check_element_count(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            rows: vec![vec![T::zero(); ncols]; nrows],
        })
    }

    fn get(&self, row: usize, col: usize) -> Result<T, MatError> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col])
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError> {
        self.check_bounds(row, col)?;
        self.rows[row][col] = value;
        Ok(())
    }

    fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(T::zero());
        }
    }

    fn fill_row_wise(&mut self) {
        let mut next = T::zero();
        for row in &mut self.rows {
            for v in row.iter_mut() {
                next = next.successor();
                *v = next;
            }
        }
    }

    fn fill_col_wise(&mut self) {
        let mut next = T::zero();
        for j in 0..self.ncols {
            for row in &mut self.rows {
                next = next.successor();
                row[j] = next;
            }
        }
    }

    fn transpose(&self) -> Self {
        log::trace!("transpose: allocating {}x{} result", self.ncols, self.nrows);
        let rows = (0..self.ncols)
            .map(|j| self.rows.iter().map(|row| row[j]).collect())
            .collect();
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            rows,
        }
    }

    fn make_identity(&mut self) -> Result<(), MatError> {
        check_square(self.dims())?;
        for (i, row) in self.rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = if i == j { T::one() } else { T::zero() };
            }
        }
        Ok(())
    }
}

impl<T: Element> PartialEq for DenseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &RenderOptions::default())
    }
}
