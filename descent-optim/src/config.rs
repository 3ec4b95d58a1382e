//! Line search and descent configuration
//!
//! A `None` iteration cap means the loop runs until its acceptance test
//! passes. `Some(n)` turns non-convergence into an error.

use descent_core::OptimError;
use serde::{Deserialize, Serialize};

/// Initial step, backtracking ratio and sufficient-decrease fraction
pub const DEFAULT_STEP: f64 = 0.8;
pub const DEFAULT_BETA: f64 = 0.8;
pub const DEFAULT_SIGMA: f64 = 0.8;

/// Gradient norm below which the descent stops
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Parameters of the Armijo backtracking line search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmijoParams {
    /// Initial trial step, `s > 0`
    pub s: f64,
    /// Backtracking ratio, `0 < beta < 1`
    pub beta: f64,
    /// Sufficient-decrease fraction, `0 < sigma < 1`
    pub sigma: f64,
    /// Maximum number of trial steps; `None` is unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_backtracks: Option<usize>,
}

impl Default for ArmijoParams {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_BETA, DEFAULT_SIGMA)
    }
}

impl ArmijoParams {
    pub fn new(s: f64, beta: f64, sigma: f64) -> Self {
        Self { s, beta, sigma, max_backtracks: None }
    }

    pub fn with_max_backtracks(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = Some(max_backtracks);
        self
    }

    /// Check `s > 0` and `beta`, `sigma` in `(0, 1)`
    pub fn validate(&self) -> Result<(), OptimError> {
        if !(self.s > 0.0 && self.s.is_finite()) {
            return Err(OptimError::InvalidParameter { name: "s", value: self.s, expected: "s > 0" });
        }
        if !(self.beta > 0.0 && self.beta < 1.0) {
            return Err(OptimError::InvalidParameter {
                name: "beta",
                value: self.beta,
                expected: "0 < beta < 1",
            });
        }
        if !(self.sigma > 0.0 && self.sigma < 1.0) {
            return Err(OptimError::InvalidParameter {
                name: "sigma",
                value: self.sigma,
                expected: "0 < sigma < 1",
            });
        }
        Ok(())
    }
}

/// Configuration of the gradient method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Stop once the gradient norm falls below this value
    pub epsilon: f64,
    /// Line search used to pick every step length
    pub line_search: ArmijoParams,
    /// Maximum number of descent steps; `None` is unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl GradientConfig {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon, line_search: ArmijoParams::default(), max_iterations: None }
    }

    pub fn with_line_search(mut self, line_search: ArmijoParams) -> Self {
        self.line_search = line_search;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), OptimError> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(OptimError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
                expected: "epsilon > 0",
            });
        }
        self.line_search.validate()
    }
}
