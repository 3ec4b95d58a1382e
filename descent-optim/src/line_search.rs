//! Armijo backtracking line search
//!
//! Finds the largest step `t = s * beta^m`, `m = 0, 1, 2, ...`, satisfying
//! the sufficient-decrease condition
//!
//! ```text
//! f(x) - f(x + t*d) >= -sigma * t * ∇f(x)ᵀd
//! ```
//!
//! Requires `s > 0`, `0 < beta < 1`, `0 < sigma < 1` and a descent direction
//! (`∇f(x)ᵀd < 0`). None of these are checked here; see [`ArmijoParams::validate`].

use descent_core::OptimError;
use descent_matrix::Matrix;
use tracing::{info, trace};
use crate::config::ArmijoParams;

/// Accepted step of a line search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmijoStep {
    /// Step length `s * beta^m`
    pub t: f64,
    /// Number of trial steps evaluated, `m + 1`
    pub iterations: usize,
}

/// Run the backtracking search with the given parameters
///
/// With `max_backtracks: Some(n)` at most `n` trial steps are evaluated
/// before failing with [`OptimError::LineSearchExhausted`], and a direction
/// with `∇f(x)ᵀd >= 0` fails up front with [`OptimError::NotDescent`].
pub fn armijo_search<F, G>(
    params: &ArmijoParams,
    f: F,
    gradf: G,
    x: &Matrix,
    d: &Matrix,
) -> Result<ArmijoStep, OptimError>
where
    F: Fn(&Matrix) -> f64,
    G: Fn(&Matrix) -> Matrix,
{
    search_with_gradient(params, f, x, &gradf(x), d)
}

/// Backtracking search given `∇f(x)` already evaluated at `x`
pub(crate) fn search_with_gradient<F>(
    params: &ArmijoParams,
    f: F,
    x: &Matrix,
    gx: &Matrix,
    d: &Matrix,
) -> Result<ArmijoStep, OptimError>
where
    F: Fn(&Matrix) -> f64,
{
    info!("armijo_call run");

    let fx = f(x);
    if !fx.is_finite() {
        return Err(OptimError::NonFinite { what: "objective value", iteration: 0 });
    }

    // ∇f(x)ᵀd as a 1x1 product
    let slope = gx.t().matmul(d)?.x()?;
    if !slope.is_finite() {
        return Err(OptimError::NonFinite { what: "directional derivative", iteration: 0 });
    }

    // Once x + t*d rounds back to x the condition holds trivially,
    // so an ascent direction would be accepted with a null step.
    if params.max_backtracks.is_some() && slope >= 0.0 {
        return Err(OptimError::NotDescent { slope });
    }

    let mut m = 0usize;
    loop {
        let t = params.s * params.beta.powf(m as f64);
        if let Some(max) = params.max_backtracks {
            if m >= max {
                return Err(OptimError::LineSearchExhausted { max_backtracks: max, step: t });
            }
        }

        let trial = x.checked_add(&d.scale(t))?;
        let decrease = fx - f(&trial);
        if decrease >= -params.sigma * t * slope {
            info!(iter = m + 1, t, "armijo_call accepted step");
            return Ok(ArmijoStep { t, iterations: m + 1 });
        }

        trace!(m, t, decrease, "armijo_call rejected step");
        m += 1;
    }
}

/// Armijo step length for `f` at `x` along `d`
///
/// Unbounded: the loop ends only when the condition holds.
/// For a non-descent direction this is once `x + t*d` rounds back to `x`.
pub fn armijo_call<F, G>(
    s: f64,
    beta: f64,
    sigma: f64,
    f: F,
    gradf: G,
    x: &Matrix,
    d: &Matrix,
) -> Result<f64, OptimError>
where
    F: Fn(&Matrix) -> f64,
    G: Fn(&Matrix) -> Matrix,
{
    let params = ArmijoParams::new(s, beta, sigma);
    armijo_search(&params, f, gradf, x, d).map(|step| step.t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use descent_core::MatrixError;

    fn quadratic(x: &Matrix) -> f64 {
        x.modulus().powi(2)
    }

    fn grad_quadratic(x: &Matrix) -> Matrix {
        x.scale(2.0)
    }

    #[test]
    fn test_full_step_accepted() {
        // f = |x|^2 at x = (1, 1), d = -∇f/4 halves x exactly
        let x = Matrix::from_column(&[1.0, 1.0]);
        let d = Matrix::from_column(&[-0.5, -0.5]);
        let step = armijo_search(&ArmijoParams::new(1.0, 0.5, 0.1), quadratic, grad_quadratic, &x, &d).unwrap();
        assert_eq!(step, ArmijoStep { t: 1.0, iterations: 1 });
    }

    #[test]
    fn test_backtracks_until_sufficient_decrease() {
        let x = Matrix::from_column(&[1.0, 0.0]);
        let d = Matrix::from_column(&[-2.0, 0.0]);
        // t = 1 lands on x = -1: no decrease. t = 0.5 lands on the minimizer.
        let step = armijo_search(&ArmijoParams::new(1.0, 0.5, 0.5), quadratic, grad_quadratic, &x, &d).unwrap();
        assert_eq!(step.t, 0.5);
        assert_eq!(step.iterations, 2);

        let fx = quadratic(&x);
        let slope = grad_quadratic(&x).dot(&d).unwrap();
        let fnext = quadratic(&x.checked_add(&d.scale(step.t)).unwrap());
        assert!(fx - fnext >= -0.5 * step.t * slope);
    }

    #[test]
    fn test_armijo_call_returns_step() {
        let x = Matrix::from_column(&[3.0, -4.0]);
        let d = -grad_quadratic(&x);
        let t = armijo_call(0.8, 0.8, 0.8, quadratic, grad_quadratic, &x, &d).unwrap();
        assert!(t > 0.0 && t <= 0.8);
        let next = x.checked_add(&d.scale(t)).unwrap();
        assert!(quadratic(&next) < quadratic(&x));
    }

    #[test]
    fn test_ascent_direction_rejected_when_bounded() {
        let x = Matrix::from_column(&[1.0, 2.0]);
        let d = grad_quadratic(&x);
        for cap in [50, 10_000] {
            let params = ArmijoParams::default().with_max_backtracks(cap);
            let err = armijo_search(&params, quadratic, grad_quadratic, &x, &d).unwrap_err();
            assert_eq!(err, OptimError::NotDescent { slope: 20.0 });
        }
    }

    #[test]
    fn test_orthogonal_direction_rejected_when_bounded() {
        let x = Matrix::from_column(&[1.0, 0.0]);
        let d = Matrix::from_column(&[0.0, 1.0]);
        let params = ArmijoParams::default().with_max_backtracks(10_000);
        assert_eq!(
            armijo_search(&params, quadratic, grad_quadratic, &x, &d),
            Err(OptimError::NotDescent { slope: 0.0 })
        );
    }

    #[test]
    fn test_search_with_gradient_skips_gradient_evaluation() {
        let x = Matrix::from_column(&[1.0, 0.0]);
        let d = Matrix::from_column(&[-2.0, 0.0]);
        let step = search_with_gradient(&ArmijoParams::new(1.0, 0.5, 0.5), quadratic, &x, &grad_quadratic(&x), &d)
            .unwrap();
        assert_eq!(step, ArmijoStep { t: 0.5, iterations: 2 });
    }

    #[test]
    fn test_zero_guard_fails_immediately() {
        let x = Matrix::from_column(&[1.0, 2.0]);
        let d = -grad_quadratic(&x);
        let params = ArmijoParams::default().with_max_backtracks(0);
        assert!(matches!(
            armijo_search(&params, quadratic, grad_quadratic, &x, &d),
            Err(OptimError::LineSearchExhausted { max_backtracks: 0, .. })
        ));
    }

    #[test]
    fn test_shape_errors_propagate() {
        let x = Matrix::from_column(&[1.0, 2.0]);
        let d = Matrix::from_column(&[1.0, 2.0, 3.0]);
        let err = armijo_call(1.0, 0.5, 0.5, quadratic, grad_quadratic, &x, &d).unwrap_err();
        assert!(matches!(err, OptimError::Matrix(MatrixError::IncompatibleDimensions { .. })));
    }

    #[test]
    fn test_non_finite_objective() {
        let x = Matrix::from_column(&[1.0]);
        let d = Matrix::from_column(&[-1.0]);
        let err = armijo_call(1.0, 0.5, 0.5, |_: &Matrix| f64::NAN, grad_quadratic, &x, &d).unwrap_err();
        assert_eq!(err, OptimError::NonFinite { what: "objective value", iteration: 0 });
    }

    #[test]
    fn test_stateful_objective() {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let f = |x: &Matrix| {
            calls.set(calls.get() + 1);
            quadratic(x)
        };
        let x = Matrix::from_column(&[1.0, 0.0]);
        let d = Matrix::from_column(&[-2.0, 0.0]);
        armijo_search(&ArmijoParams::new(1.0, 0.5, 0.5), &f, grad_quadratic, &x, &d).unwrap();
        // f(x) once, then one evaluation per trial step
        assert_eq!(calls.get(), 3);
    }
}
