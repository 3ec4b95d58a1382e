//! Matrix construction

use descent_core::MatrixError;
use nalgebra::DMatrix;
use crate::types::Matrix;

impl Matrix {
    /// Create a `rows x cols` matrix filled with `value`
    pub fn new(rows: usize, cols: usize, value: f64) -> Self {
        Matrix { data: DMatrix::from_element(rows, cols, value) }
    }

    /// Create an empty (0x0) matrix
    pub fn empty() -> Self {
        Matrix::new(0, 0, 0.0)
    }

    /// Create a `rows x cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::new(rows, cols, 0.0)
    }

    /// Create a column vector from a flat sequence of values
    pub fn from_column(values: &[f64]) -> Self {
        Matrix { data: DMatrix::from_column_slice(values.len(), 1, values) }
    }

    /// Create a matrix from a sequence of rows
    ///
    /// The column count is taken from the first row; an empty sequence
    /// yields a 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);

        // Validate all rows have same length
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows { row: i + 1, len: row.len(), expected: cols });
            }
        }

        Ok(Matrix { data: DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]) })
    }
}

impl From<Vec<f64>> for Matrix {
    fn from(values: Vec<f64>) -> Self {
        Matrix { data: DMatrix::from_vec(values.len(), 1, values) }
    }
}

/// Create the `n x n` identity matrix
pub fn eye(n: usize) -> Matrix {
    Matrix { data: DMatrix::identity(n, n) }
}
