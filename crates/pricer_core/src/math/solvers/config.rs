//! Bracketing solver settings.

use num_traits::Float;

/// Stopping rule for bracketing root finders.
///
/// Iteration ends as soon as the residual `|f(x)|` or the half-width of the
/// remaining bracket drops below `tolerance`, or after `max_iterations`
/// halvings.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::new(1e-12, 200);
/// // a unit bracket needs 40 halvings to shrink below 1e-12
/// assert_eq!(config.halvings_for(1.0), 40);
/// assert!(config.can_resolve(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SolverConfig<T: Float> {
    /// Residual and half-width tolerance.
    pub tolerance: T,

    /// Halving budget before `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// 1e-10 tolerance, 100 halvings.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// 1e-14 tolerance, 500 halvings. Used for implied volatility.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }

    /// Halvings needed before the half-width of a bracket of `width` falls
    /// below the tolerance.
    pub fn halvings_for(&self, width: T) -> usize {
        let ratio = width.abs() / self.tolerance;
        if !(ratio >= T::one()) {
            return 0;
        }
        ratio.log2().floor().to_usize().map_or(usize::MAX, |m| m + 1)
    }

    /// Whether the halving budget suffices for a bracket of `width`, ignoring
    /// any earlier exit on the residual.
    pub fn can_resolve(&self, width: T) -> bool {
        self.halvings_for(width) <= self.max_iterations
    }
}
