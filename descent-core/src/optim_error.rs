//! Errors raised by the line search and the descent driver

use thiserror::Error;
use crate::MatrixError;

/// Error type for optimization routines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// A matrix operation on the iterate, direction or gradient failed
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Armijo condition not satisfied after {max_backtracks} backtracks (last step {step})")]
    LineSearchExhausted { max_backtracks: usize, step: f64 },

    #[error("Not a descent direction: directional derivative {slope} is not negative")]
    NotDescent { slope: f64 },

    #[error("Gradient method did not converge in {max_iterations} iterations (gradient norm {gradient_norm})")]
    NotConverged { max_iterations: usize, gradient_norm: f64 },

    #[error("Invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter { name: &'static str, value: f64, expected: &'static str },

    #[error("Non-finite {what} at iteration {iteration}")]
    NonFinite { what: &'static str, iteration: usize },
}
