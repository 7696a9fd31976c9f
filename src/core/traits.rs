//! Core matrix traits for matrixkit.

use crate::error::MatError;
use crate::utils::validation::check_index;
use std::fmt::{Debug, Display};

/// Scalar types a matrix can hold.
///
/// Implemented for the primitive integers and floats. Integer arithmetic in
/// `add`/`multiply` is checked and reports overflow as an error; fill
/// patterns wrap, like two's-complement counters. Floats follow IEEE rules.
pub trait Element: Copy + PartialEq + Debug + Display + num_traits::Num {
    /// `self + rhs`, or `None` if the result is not representable.
    fn add_checked(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if the result is not representable.
    fn mul_checked(self, rhs: Self) -> Option<Self>;

    /// `self + 1`, wrapping on integer overflow.
    fn successor(self) -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn add_checked(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
                #[inline]
                fn mul_checked(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }
                #[inline]
                fn successor(self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn add_checked(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
                #[inline]
                fn mul_checked(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
                #[inline]
                fn successor(self) -> Self {
                    self + 1.0
                }
            }
        )*
    };
}

impl_int_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_element!(f32, f64);

/// Shape of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(rows, columns)`.
    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Storage contract every matrix backend satisfies.
///
/// A backend supplies construction, element access and the whole-matrix
/// mutators; everything dimension-generic (add, multiply, equality,
/// rendering) lives in [`MatrixOps`](crate::core::ops::MatrixOps) and works
/// against any implementor.
pub trait Matrix<T: Element>: MatShape + Sized {
    /// Allocate a `nrows x ncols` matrix of zeros.
    ///
    /// Fails with [`MatError::InvalidDimension`] if either count is zero.
    fn create(nrows: usize, ncols: usize) -> Result<Self, MatError>;

    /// Validate an index pair against this matrix's shape.
    ///
    /// All indexed accessors go through this check.
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatError> {
        check_index(self.dims(), row, col)
    }

    /// Read the element at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Result<T, MatError>;

    /// Overwrite the element at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError>;

    /// Set every element to zero.
    fn clear(&mut self);

    /// Number the elements `1..=rows*cols` left to right, top to bottom.
    fn fill_row_wise(&mut self);

    /// Number the elements `1..=rows*cols` top to bottom, left to right.
    fn fill_col_wise(&mut self);

    /// New matrix with rows and columns swapped.
    fn transpose(&self) -> Self;

    /// Overwrite with the identity; fails with [`MatError::NotSquare`] unless square.
    fn make_identity(&mut self) -> Result<(), MatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic_is_checked() {
        assert_eq!(2i32.add_checked(3), Some(5));
        assert_eq!(i32::MAX.add_checked(1), None);
        assert_eq!(i64::MIN.mul_checked(-1), None);
        assert_eq!(0u8.add_checked(0).and_then(|v| v.mul_checked(7)), Some(0));
    }

    #[test]
    fn successor_wraps_integers() {
        assert_eq!(41u16.successor(), 42);
        assert_eq!(u8::MAX.successor(), 0);
        assert_eq!(i32::MAX.successor(), i32::MIN);
    }

    #[test]
    fn float_arithmetic_never_fails() {
        assert_eq!(1.5f64.add_checked(2.0), Some(3.5));
        assert_eq!(f32::MAX.mul_checked(2.0), Some(f32::INFINITY));
        assert_eq!(0.0f64.successor(), 1.0);
    }
}
