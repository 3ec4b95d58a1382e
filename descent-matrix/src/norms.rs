//! Euclidean norm and inner product

use descent_core::MatrixError;
use crate::types::Matrix;
use crate::helpers::ensure_same_shape;

impl Matrix {
    /// Euclidean norm over all elements in linear order
    ///
    /// `sqrt(sum of get_linear(k)^2)` for `k = 1..=length()`; 0 for an empty matrix.
    pub fn modulus(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Inner product of two column vectors, `selfᵀ other`
    pub fn dot(&self, other: &Matrix) -> Result<f64, MatrixError> {
        if !self.is_column_vector() {
            return Err(MatrixError::InvalidShape {
                op: "dot",
                expected: "column vector",
                shape: self.shape(),
            });
        }
        ensure_same_shape("dot", self, other)?;
        Ok(self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum())
    }
}
