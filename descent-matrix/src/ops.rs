//! Matrix operations: access, arithmetic, transformations

use std::ops::{Add, Div, Mul, Neg, Sub};
use descent_core::MatrixError;
use nalgebra::DMatrix;
use crate::types::Matrix;
use crate::helpers::{checked_coords, checked_linear, ensure_same_shape};

// ============ access ============

impl Matrix {
    /// Get element `(i, j)`, 1-based
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let pos = checked_coords(self, i, j)?;
        Ok(self.data[pos])
    }

    /// Set element `(i, j)`, 1-based
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        let pos = checked_coords(self, i, j)?;
        self.data[pos] = value;
        Ok(())
    }

    /// Get the `k`-th element in column-major order, 1-based
    pub fn get_linear(&self, k: usize) -> Result<f64, MatrixError> {
        let pos = checked_linear(self, k)?;
        Ok(self.data[pos])
    }

    /// Set the `k`-th element in column-major order, 1-based
    pub fn set_linear(&mut self, k: usize, value: f64) -> Result<(), MatrixError> {
        let pos = checked_linear(self, k)?;
        self.data[pos] = value;
        Ok(())
    }
}

// ============ arithmetic ============

impl Matrix {
    /// Elementwise sum; shapes must match
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ensure_same_shape("add", self, other)?;
        Ok(Matrix { data: &self.data + &other.data })
    }

    /// Elementwise difference; shapes must match
    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        ensure_same_shape("sub", self, other)?;
        Ok(Matrix { data: &self.data - &other.data })
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::IncompatibleDimensions { left: self.shape(), right: other.shape() });
        }
        let inner = self.cols();
        let data = DMatrix::from_fn(self.rows(), other.cols(), |i, j| {
            (0..inner).map(|k| self.data[(i, k)] * other.data[(k, j)]).sum::<f64>()
        });
        Ok(Matrix { data })
    }

    /// Multiply every element by `s`
    pub fn scale(&self, s: f64) -> Matrix {
        Matrix { data: self.data.map(|v| s * v) }
    }

    /// Divide `s` by every element: yields `s / a_ij`
    ///
    /// This is the semantics of the `/` operator on `Matrix`. Use
    /// [`Matrix::div_scalar`] for the conventional `a_ij / s`.
    pub fn reciprocal_scale(&self, s: f64) -> Matrix {
        Matrix { data: self.data.map(|v| s / v) }
    }

    /// Divide every element by `s`: yields `a_ij / s`
    pub fn div_scalar(&self, s: f64) -> Matrix {
        Matrix { data: self.data.map(|v| v / s) }
    }

    /// Return the transpose
    pub fn transpose(&self) -> Matrix {
        Matrix { data: self.data.transpose() }
    }

    /// Transpose alias
    pub fn t(&self) -> Matrix {
        self.transpose()
    }
}

// ============ operators ============
//
// The matrix-valued operators panic on shape violations, the same as
// nalgebra's. `checked_add`, `checked_sub` and `matmul` are the checked forms.

fn unwrap_op(result: Result<Matrix, MatrixError>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Matrix> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                unwrap_op(Matrix::$checked(self, rhs))
            }
        }

        impl $trait<Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                unwrap_op(Matrix::$checked(&self, &rhs))
            }
        }

        impl $trait<&Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                unwrap_op(Matrix::$checked(&self, rhs))
            }
        }

        impl $trait<Matrix> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                unwrap_op(Matrix::$checked(self, &rhs))
            }
        }
    };
}

forward_binop!(Add, add, checked_add);
forward_binop!(Sub, sub, checked_sub);
forward_binop!(Mul, mul, matmul);

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: &Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: Matrix) -> Matrix {
        m.scale(self)
    }
}

/// `A / s` yields `s / a_ij`, see [`Matrix::reciprocal_scale`]
impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, s: f64) -> Matrix {
        self.reciprocal_scale(s)
    }
}

/// `A / s` yields `s / a_ij`, see [`Matrix::reciprocal_scale`]
impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, s: f64) -> Matrix {
        self.reciprocal_scale(s)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eye;
    use descent_core::Shape;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    fn assert_close(a: &Matrix, b: &Matrix) {
        assert_eq!(a.shape(), b.shape());
        for k in 1..=a.length() {
            let (x, y) = (a.get_linear(k).unwrap(), b.get_linear(k).unwrap());
            assert!((x - y).abs() < 1e-9, "element {}: {} vs {}", k, x, y);
        }
    }

    #[test]
    fn test_get_set() {
        let mut m = sample();
        assert_eq!(m.get(2, 3), Ok(6.0));
        m.set(2, 3, -1.0).unwrap();
        assert_eq!(m.get(2, 3), Ok(-1.0));
    }

    #[test]
    fn test_get_out_of_range() {
        let m = sample();
        assert_eq!(m.get(0, 1), Err(MatrixError::OutOfRange { row: 0, col: 1, rows: 2, cols: 3 }));
        assert_eq!(m.get(3, 1), Err(MatrixError::OutOfRange { row: 3, col: 1, rows: 2, cols: 3 }));
        assert!(m.get(1, 0).is_err());
        assert!(m.get(1, 4).is_err());
        assert!(Matrix::empty().get(1, 1).is_err());
    }

    #[test]
    fn test_set_out_of_range_leaves_matrix_untouched() {
        let mut m = sample();
        assert!(m.set(3, 3, 9.0).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_linear_access() {
        let w = [1.0, 2.0, 3.0, 4.0];
        let v = Matrix::from_column(&w);
        for k in 1..=w.len() {
            assert_eq!(v.get_linear(k), Ok(w[k - 1]));
        }

        let mut m = sample();
        // column-major: 1, 4, 2, 5, 3, 6
        assert_eq!(m.get_linear(2), Ok(4.0));
        assert_eq!(m.get_linear(5), Ok(3.0));
        m.set_linear(6, 0.5).unwrap();
        assert_eq!(m.get(2, 3), Ok(0.5));

        assert_eq!(m.get_linear(0), Err(MatrixError::LinearOutOfRange { index: 0, len: 6 }));
        assert_eq!(m.get_linear(7), Err(MatrixError::LinearOutOfRange { index: 7, len: 6 }));
        assert!(Matrix::empty().get_linear(1).is_err());
    }

    #[test]
    fn test_add_sub() {
        let a = sample();
        let b = Matrix::new(2, 3, 1.0);
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.get(1, 1), Ok(2.0));
        assert_eq!(sum.checked_sub(&b).unwrap(), a);
        assert_eq!(&a + &b, sum);
        assert_eq!(sum - b, a);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let err = sample().checked_add(&Matrix::new(3, 2, 0.0)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch { op: "add", left: Shape::new(2, 3), right: Shape::new(3, 2) }
        );
        assert!(sample().checked_sub(&Matrix::new(2, 2, 0.0)).is_err());
    }

    #[test]
    #[should_panic(expected = "Shape mismatch in add")]
    fn test_add_operator_panics_on_mismatch() {
        let _ = sample() + Matrix::new(1, 1, 0.0);
    }

    #[test]
    fn test_matmul() {
        let a = sample();
        let b = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![4.0, 5.0], vec![10.0, 11.0]]).unwrap());
        assert_eq!(&a * &b, c);
    }

    #[test]
    fn test_matmul_incompatible() {
        let err = sample().matmul(&sample()).unwrap_err();
        assert_eq!(
            err,
            MatrixError::IncompatibleDimensions { left: Shape::new(2, 3), right: Shape::new(2, 3) }
        );
    }

    #[test]
    fn test_matmul_associative() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.5, -1.0, 2.0], vec![1.5, 0.25, -3.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![1.0], vec![-2.0], vec![0.1]]).unwrap();
        let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
        let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
        assert_close(&left, &right);
    }

    #[test]
    fn test_identity_product() {
        let a = sample();
        assert_eq!(&eye(2) * &a, a);
        assert_eq!(&a * &eye(3), a);
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let a = sample();
        let left = 2.5 * &a;
        let right = &a * 2.5;
        assert_eq!(left, right);
        for i in 1..=2 {
            for j in 1..=3 {
                assert_eq!(left.get(i, j).unwrap(), 2.5 * a.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_div_is_reciprocal_scale() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![4.0, 8.0]]).unwrap();
        let q = &a / 8.0;
        assert_eq!(q, Matrix::from_rows(vec![vec![8.0, 4.0], vec![2.0, 1.0]]).unwrap());
        assert_eq!(a.reciprocal_scale(8.0), q);
        assert_eq!(a.div_scalar(2.0), Matrix::from_rows(vec![vec![0.5, 1.0], vec![2.0, 4.0]]).unwrap());
    }

    #[test]
    fn test_neg() {
        let a = sample();
        assert_eq!(-&a, (-1.0) * &a);
        assert_eq!((-a.clone()).get(1, 1), Ok(-1.0));
    }

    #[test]
    fn test_transpose() {
        let a = sample();
        let at = a.transpose();
        assert_eq!(at.rows(), 3);
        assert_eq!(at.cols(), 2);
        for i in 1..=2 {
            for j in 1..=3 {
                assert_eq!(at.get(j, i), a.get(i, j));
            }
        }
        assert_eq!(a.t().t(), a);
        assert_eq!(Matrix::empty().t(), Matrix::empty());
    }

    #[test]
    fn test_value_semantics() {
        let a = sample();
        let mut b = a.clone();
        b.set(1, 1, 100.0).unwrap();
        assert_eq!(a.get(1, 1), Ok(1.0));

        let c = &a + &a;
        assert_eq!(a, sample());
        assert_eq!(c.get(1, 1), Ok(2.0));
    }
}
