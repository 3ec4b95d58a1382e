//! Descent Optim - Line search and gradient descent
//!
//! Provides:
//! - Armijo backtracking line search (`armijo_call`, `armijo_search`)
//! - Steepest descent with Armijo step lengths (`gradient_method`, `GradientMethod`)
//! - Configuration with optional iteration caps (`ArmijoParams`, `GradientConfig`)
//! - The `fa` test problem and its gradient
//!
//! Objectives and gradients are plain closures, `Fn(&Matrix) -> f64` and
//! `Fn(&Matrix) -> Matrix`, so they may capture problem data.
//! Progress is reported through `tracing`; installing a subscriber is up to the caller.

mod config;
mod line_search;
mod gradient;
pub mod problems;

pub use config::{
    ArmijoParams, GradientConfig,
    DEFAULT_BETA, DEFAULT_EPSILON, DEFAULT_SIGMA, DEFAULT_STEP,
};
pub use line_search::{armijo_call, armijo_search, ArmijoStep};
pub use gradient::{gradient_method, GradientMethod, GradientReport};
