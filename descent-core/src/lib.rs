//! Descent Core - Fundamental types
//!
//! This crate provides the error types used throughout Descent:
//! - `MatrixError`: Failures raised by matrix access and arithmetic
//! - `OptimError`: Failures raised by the line search and descent loops
//! - `DescentError`: Structured, serializable error with machine-readable codes

mod error;
mod matrix_error;
mod optim_error;

pub use error::{DescentError, codes};
pub use matrix_error::{MatrixError, Shape};
pub use optim_error::OptimError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DescentError, MatrixError, OptimError, Shape};
    pub use crate::error::codes;
}
