//! Index mapping and precondition checks

use descent_core::{MatrixError, Shape};
use crate::types::Matrix;

/// Map a 1-based column-major linear index to 1-based `(row, col)`
///
/// `k` maps to row `((k-1) mod rows) + 1`, column `((k-1) div rows) + 1`.
/// Returns `None` for `k == 0` or `rows == 0`. The column is not bounded
/// here; callers check it against their own column count.
pub fn linear_to_coords(k: usize, rows: usize) -> Option<(usize, usize)> {
    if k == 0 || rows == 0 {
        return None;
    }
    Some(((k - 1) % rows + 1, (k - 1) / rows + 1))
}

/// Translate 1-based `(i, j)` into a 0-based storage position
pub(crate) fn checked_coords(m: &Matrix, i: usize, j: usize) -> Result<(usize, usize), MatrixError> {
    if i == 0 || j == 0 || i > m.rows() || j > m.cols() {
        return Err(MatrixError::OutOfRange { row: i, col: j, rows: m.rows(), cols: m.cols() });
    }
    Ok((i - 1, j - 1))
}

/// Translate a 1-based linear index into a 0-based storage position
pub(crate) fn checked_linear(m: &Matrix, k: usize) -> Result<(usize, usize), MatrixError> {
    let out_of_range = MatrixError::LinearOutOfRange { index: k, len: m.length() };
    let (i, j) = linear_to_coords(k, m.rows()).ok_or_else(|| out_of_range.clone())?;
    checked_coords(m, i, j).map_err(|_| out_of_range)
}

/// Require identical shapes for elementwise operations
pub(crate) fn ensure_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch { op, left: a.shape(), right: b.shape() });
    }
    Ok(())
}

/// Require an exact shape
pub(crate) fn ensure_shape(
    op: &'static str,
    m: &Matrix,
    expected: Shape,
    description: &'static str,
) -> Result<(), MatrixError> {
    if m.shape() != expected {
        return Err(MatrixError::InvalidShape { op, expected: description, shape: m.shape() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_coords_column_major() {
        // 3 rows: 1..=3 fill column 1, 4..=6 fill column 2
        assert_eq!(linear_to_coords(1, 3), Some((1, 1)));
        assert_eq!(linear_to_coords(3, 3), Some((3, 1)));
        assert_eq!(linear_to_coords(4, 3), Some((1, 2)));
        assert_eq!(linear_to_coords(6, 3), Some((3, 2)));
    }

    #[test]
    fn test_linear_to_coords_degenerate() {
        assert_eq!(linear_to_coords(0, 3), None);
        assert_eq!(linear_to_coords(1, 0), None);
    }

    #[test]
    fn test_checked_linear_past_end() {
        let m = Matrix::new(2, 2, 0.0);
        assert_eq!(checked_linear(&m, 4), Ok((1, 1)));
        assert_eq!(
            checked_linear(&m, 5),
            Err(MatrixError::LinearOutOfRange { index: 5, len: 4 })
        );
    }

    #[test]
    fn test_ensure_same_shape() {
        let a = Matrix::new(2, 1, 0.0);
        let b = Matrix::new(1, 2, 0.0);
        assert!(ensure_same_shape("add", &a, &a).is_ok());
        assert_eq!(
            ensure_same_shape("add", &a, &b),
            Err(MatrixError::ShapeMismatch { op: "add", left: Shape::new(2, 1), right: Shape::new(1, 2) })
        );
    }
}
