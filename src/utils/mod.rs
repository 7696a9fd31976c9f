//! Validation helpers shared by the storages and algorithms.

pub mod validation;
