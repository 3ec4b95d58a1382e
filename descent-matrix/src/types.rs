//! Core matrix type

use std::fmt;
use descent_core::{MatrixError, Shape};
use nalgebra::DMatrix;
use serde::{Serialize, Deserialize};

/// Dense matrix of `f64` values
///
/// Storage is a column-major `nalgebra::DMatrix`, so the linear index
/// `k` of the public API addresses the `(k-1)`-th stored element.
/// All public indices are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    pub(crate) data: DMatrix<f64>,
}

/// Serialized form: explicit shape plus row-major nested rows
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Wrap an nalgebra matrix
    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Borrow the underlying nalgebra matrix
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `rows x cols`
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    /// Convert to nested rows
    pub fn to_nested_list(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Elements in linear (column-major) order
    pub fn as_column_vec(&self) -> Vec<f64> {
        self.data.as_slice().to_vec()
    }

    /// Log a human-readable dump of shape and contents
    pub fn debug(&self) {
        tracing::info!("Matrix debug");
        tracing::info!("\t#rows={}, #cols={}", self.rows(), self.cols());
        for row in self.data.row_iter() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            tracing::info!("\t{}", line.join(" "));
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::empty()
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(m: Matrix) -> Self {
        MatrixRepr {
            rows: m.rows(),
            cols: m.cols(),
            data: m.to_nested_list(),
        }
    }
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        if repr.data.len() != repr.rows {
            return Err(MatrixError::InvalidShape {
                op: "deserialize",
                expected: "rows equal to the number of data rows",
                shape: Shape::new(repr.rows, repr.cols),
            });
        }
        for (i, row) in repr.data.iter().enumerate() {
            if row.len() != repr.cols {
                return Err(MatrixError::RaggedRows { row: i + 1, len: row.len(), expected: repr.cols });
            }
        }
        let data = DMatrix::from_fn(repr.rows, repr.cols, |i, j| repr.data[i][j]);
        Ok(Matrix { data })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.row_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
