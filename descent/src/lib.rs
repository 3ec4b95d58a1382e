//! Descent - Dense matrices and Armijo gradient descent
//!
//! Re-exports the workspace crates:
//! - `matrix`: the dense `Matrix` type and `eye`
//! - `optim`: `armijo_call`, `gradient_method` and their configuration
//! - `errors`: error types
//!
//! ```ignore
//! use descent::prelude::*;
//!
//! let x = gradient_method(fa, grad_fa, Matrix::from_column(&[0.0, 0.0]), 1e-3)?;
//! ```

pub use descent_core as errors;
pub use descent_matrix as matrix;
pub use descent_optim as optim;

/// Prelude for convenient imports
pub mod prelude {
    pub use descent_core::prelude::*;
    pub use descent_matrix::{eye, Matrix};
    pub use descent_optim::{
        armijo_call, armijo_search, gradient_method,
        ArmijoParams, ArmijoStep, GradientConfig, GradientMethod, GradientReport,
    };
    pub use descent_optim::problems::{fa, grad_fa};
}
