//! Options for the debug text rendering of a matrix.
//!
//! This module provides the `RenderOptions` struct consumed by
//! [`MatrixOps::render`](crate::core::ops::MatrixOps::render) and by the
//! `Display` impls of the storage types. Rendering is purely cosmetic, so
//! the column width is the only knob.

/// Rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Minimum characters per element; values are right-aligned within it.
    pub width: usize,
}

impl RenderOptions {
    /// Default column width.
    pub const DEFAULT_WIDTH: usize = 6;

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }
}
