//! Errors raised by matrix access and arithmetic

use std::fmt;
use thiserror::Error;

/// Dimensions of a matrix, `rows x cols`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Error type for matrix operations
///
/// Indices carried by these variants are the 1-based indices supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange { row: usize, col: usize, rows: usize, cols: usize },

    #[error("Linear index {index} out of range for matrix of length {len}")]
    LinearOutOfRange { index: usize, len: usize },

    #[error("Shape mismatch in {op}: {left} vs {right}")]
    ShapeMismatch { op: &'static str, left: Shape, right: Shape },

    #[error("Invalid matrix multiplication: {left} * {right}")]
    IncompatibleDimensions { left: Shape, right: Shape },

    #[error("Can't apply {op} to a {shape} matrix, expected {expected}")]
    InvalidShape { op: &'static str, expected: &'static str, shape: Shape },

    #[error("Row {row} has {len} columns, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
}
