//! Matrix module: interchangeable dense storage strategies.

pub mod colmajor;
pub mod dense;
pub mod faer_mat;

pub use colmajor::ColMajorMatrix;
pub use dense::DenseMatrix;
pub use faer_mat::FaerMatrix;
