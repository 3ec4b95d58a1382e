//! Test problems for the optimizer

use descent_core::MatrixError;
use descent_matrix::Matrix;

/// `fa(x) = x1² + (e^{x1} - x2)²` on a 2x1 column vector
pub fn try_fa(x: &Matrix) -> Result<f64, MatrixError> {
    let (x1, x2) = (x.x1()?, x.x2()?);
    Ok(x1 * x1 + (x1.exp() - x2).powi(2))
}

/// Gradient of [`try_fa`]: `(2 x1 + 2 e^{x1} (e^{x1} - x2), -2 (e^{x1} - x2))`
pub fn try_grad_fa(x: &Matrix) -> Result<Matrix, MatrixError> {
    let (x1, x2) = (x.x1()?, x.x2()?);
    let r = x1.exp() - x2;
    Ok(Matrix::from_column(&[2.0 * x1 + 2.0 * x1.exp() * r, -2.0 * r]))
}

/// [`try_fa`] in the shape the optimizer expects
///
/// # Panics
///
/// If `x` is not a 2x1 column vector.
pub fn fa(x: &Matrix) -> f64 {
    match try_fa(x) {
        Ok(v) => v,
        Err(e) => panic!("fa: {}", e),
    }
}

/// [`try_grad_fa`] in the shape the optimizer expects
///
/// # Panics
///
/// If `x` is not a 2x1 column vector.
pub fn grad_fa(x: &Matrix) -> Matrix {
    match try_grad_fa(x) {
        Ok(g) => g,
        Err(e) => panic!("grad_fa: {}", e),
    }
}
