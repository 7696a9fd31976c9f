//! matrixkit: a small dense-matrix abstraction over pluggable storage
//!
//! The [`Matrix`] trait is the storage contract (construction, bounds-checked
//! element access, clear/fill, transpose, identity). [`MatrixOps`] supplies
//! addition, multiplication, equality and rendering for every implementor,
//! so a new storage strategy only has to provide the primitives.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use self::config::*;
pub use self::core::*;
pub use self::error::*;
pub use self::matrix::*;
