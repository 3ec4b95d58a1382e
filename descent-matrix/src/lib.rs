//! Descent Matrix - Dense matrices for the optimizer
//!
//! Provides a dense `f64` matrix with value semantics:
//! - Construction (dimensions + fill, column vector, rows, identity)
//! - Element access, 1-based 2-D and 1-based column-major linear
//! - Arithmetic (add, sub, matmul, scalar scale, reciprocal scale)
//! - Properties (shape, length, is_vector, det2, x, x1, x2)
//! - Euclidean norm and column-vector dot product
//!
//! Every operation returns a fresh, independently owned matrix.
//! Shape violations are reported as `MatrixError` values by the checked
//! methods; the operator traits panic on them.

mod types;
mod helpers;
mod construct;
mod ops;
mod props;
mod norms;

pub use types::Matrix;
pub use helpers::linear_to_coords;
pub use construct::eye;

pub use descent_core::{MatrixError, Shape};
