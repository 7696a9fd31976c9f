//! Core matrix traits and the algorithms built on them.

pub mod ops;
pub mod traits;

pub use ops::MatrixOps;
pub use traits::{Element, MatShape, Matrix};
