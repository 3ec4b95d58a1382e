//! Steepest-descent driver with Armijo step lengths

use descent_core::OptimError;
use descent_matrix::Matrix;
use tracing::{debug, info};
use crate::config::GradientConfig;
use crate::line_search::search_with_gradient;

/// Outcome of a gradient method run
#[derive(Debug, Clone, PartialEq)]
pub struct GradientReport {
    /// Approximate minimizer
    pub minimizer: Matrix,
    /// Objective value at the minimizer
    pub value: f64,
    /// Gradient norm at the minimizer, below epsilon
    pub gradient_norm: f64,
    /// Number of descent steps taken
    pub iterations: usize,
    /// Number of line searches run, one per descent step
    pub armijo_calls: usize,
}

/// Gradient method with a validated configuration
#[derive(Debug, Clone)]
pub struct GradientMethod {
    config: GradientConfig,
}

impl GradientMethod {
    pub fn new(config: GradientConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Minimize `f` starting from the column vector `x0`
    pub fn minimize<F, G>(&self, f: F, gradf: G, x0: Matrix) -> Result<GradientReport, OptimError>
    where
        F: Fn(&Matrix) -> f64,
        G: Fn(&Matrix) -> Matrix,
    {
        run(&self.config, f, gradf, x0)
    }
}

/// Approximate minimizer of `f` from `x0`, stopping once `|∇f(x)| < epsilon`
///
/// Uses the fixed line search `s = beta = sigma = 0.8` and no iteration cap.
pub fn gradient_method<F, G>(f: F, gradf: G, x0: Matrix, epsilon: f64) -> Result<Matrix, OptimError>
where
    F: Fn(&Matrix) -> f64,
    G: Fn(&Matrix) -> Matrix,
{
    run(&GradientConfig::new(epsilon), f, gradf, x0).map(|report| report.minimizer)
}

fn run<F, G>(config: &GradientConfig, f: F, gradf: G, x0: Matrix) -> Result<GradientReport, OptimError>
where
    F: Fn(&Matrix) -> f64,
    G: Fn(&Matrix) -> Matrix,
{
    info!("gradient_method run");
    info!("initial point: {}", format_point(&x0));
    info!("epsilon: {}", config.epsilon);

    let mut xk = x0;
    let mut iterations = 0usize;
    let mut armijo_calls = 0usize;

    let gradient_norm = loop {
        let gk = gradf(&xk);
        let norm = gk.modulus();
        if !norm.is_finite() {
            return Err(OptimError::NonFinite { what: "gradient norm", iteration: iterations });
        }
        debug!(iteration = iterations, gradient_norm = norm, "gradient_method step");

        if norm < config.epsilon {
            break norm;
        }
        if let Some(max) = config.max_iterations {
            if iterations >= max {
                return Err(OptimError::NotConverged { max_iterations: max, gradient_norm: norm });
            }
        }
        iterations += 1;

        let dk = -&gk;
        let step = search_with_gradient(&config.line_search, &f, &xk, &gk, &dk)?;
        armijo_calls += 1;

        xk = xk.checked_add(&dk.scale(step.t))?;
    };

    let value = f(&xk);
    info!("n_iterations: {}", iterations + 1);
    info!("n_call_armijo: {}", armijo_calls);
    info!("optimal point: {}", format_point(&xk));
    info!("optimal value: {}", value);

    Ok(GradientReport { minimizer: xk, value, gradient_norm, iterations, armijo_calls })
}

/// Render a point as `(x1, x2, ...)` in linear order
fn format_point(x: &Matrix) -> String {
    let coords: Vec<String> = x.as_column_vec().iter().map(|v| v.to_string()).collect();
    format!("({})", coords.join(", "))
}
