//! Matrix properties: length, vector checks, small-shape accessors

use descent_core::{MatrixError, Shape};
use crate::types::Matrix;
use crate::helpers::ensure_shape;

impl Matrix {
    /// Number of elements, `rows * cols`
    pub fn length(&self) -> usize {
        self.rows() * self.cols()
    }

    /// True for a row vector or a column vector
    pub fn is_vector(&self) -> bool {
        self.rows() == 1 || self.cols() == 1
    }

    /// True for a matrix with exactly one column
    pub fn is_column_vector(&self) -> bool {
        self.cols() == 1
    }

    /// Determinant of a 2x2 matrix
    pub fn det2(&self) -> Result<f64, MatrixError> {
        ensure_shape("det2", self, Shape::new(2, 2), "2x2")?;
        Ok(self.data[(0, 0)] * self.data[(1, 1)] - self.data[(0, 1)] * self.data[(1, 0)])
    }

    /// Sole element of a 1x1 matrix
    pub fn x(&self) -> Result<f64, MatrixError> {
        ensure_shape("x", self, Shape::new(1, 1), "1x1")?;
        Ok(self.data[(0, 0)])
    }

    /// First element of a 2x1 column vector
    pub fn x1(&self) -> Result<f64, MatrixError> {
        ensure_shape("x1", self, Shape::new(2, 1), "2x1 column vector")?;
        Ok(self.data[(0, 0)])
    }

    /// Second element of a 2x1 column vector
    pub fn x2(&self) -> Result<f64, MatrixError> {
        ensure_shape("x2", self, Shape::new(2, 1), "2x1 column vector")?;
        Ok(self.data[(1, 0)])
    }
}
