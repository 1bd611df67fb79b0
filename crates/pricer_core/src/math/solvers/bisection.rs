//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves a sign-changing bracket until the residual or the bracket
/// half-width drops below the configured tolerance. Slower than
/// interpolating methods but unconditionally convergent for continuous
/// functions, and insensitive to flat regions such as deep out-of-the-money
/// option prices where the vega is tiny.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (or that one of
    /// them is exactly zero). The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Point where `|f(x)| < tolerance` or the bracket half-width is below tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo.is_nan() || f_hi.is_nan() {
            return Err(SolverError::NumericalInstability(
                "objective is NaN at a bracket endpoint".to_string(),
            ));
        }

        if f_lo == T::zero() {
            return Ok(lo);
        }
        if f_hi == T::zero() {
            return Ok(hi);
        }

        if f_lo * f_hi > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::one() + T::one();
        let tol = self.config.tolerance;

        for _iteration in 0..self.config.max_iterations {
            let mid = lo + (hi - lo) / two;
            let f_mid = f(mid);

            if f_mid.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "objective is NaN at x = {}",
                    mid.to_f64().unwrap_or(f64::NAN)
                )));
            }

            if f_mid.abs() < tol || (hi - lo) / two < tol {
                return Ok(mid);
            }

            // Keep the half whose endpoints still straddle the root
            if (f_mid > T::zero()) == (f_lo > T::zero()) {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
