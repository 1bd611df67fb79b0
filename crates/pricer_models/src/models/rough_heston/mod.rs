//! Rough Heston characteristic function.
//!
//! The characteristic function of `ln(S_T / S_0)` is
//!
//! ```text
//! φ(a) = exp(κθ · I¹ h(a, ·)(T) + V0 · I^(1-α) h(a, ·)(T))
//! ```
//!
//! where `h` solves the fractional Riccati equation
//! `D^α h = F(a, h)`, `I^(1-α) h(0) = 0`. Evaluation is split into:
//!
//! - [`FractionalWeights`]: predictor/corrector convolution weights, built once
//! - [`RiccatiKernel`]: the nonlinearity `F(a, x)`
//! - [`FractionalRiccatiSolver`]: the O(n²) Adams recursion for `ĥ`
//! - [`CharacteristicFunctionAssembler`]: trapezoid plus fractional tail, then `exp`
//!
//! [`RoughHestonCharacteristicFunction`] owns the first, second and fourth and
//! runs a fresh solve for every argument.

mod assembler;
mod riccati;
mod solver;
mod weights;

pub use assembler::CharacteristicFunctionAssembler;
pub use riccati::RiccatiKernel;
pub use solver::FractionalRiccatiSolver;
pub use weights::FractionalWeights;

use num_complex::Complex64;
use pricer_core::traits::CharacteristicFunction;
use pricer_core::types::PricingError;

use super::{ModelParameters, TimeGrid};

/// Rough Heston characteristic function on a fixed time grid.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pricer_core::traits::CharacteristicFunction;
/// use pricer_models::models::rough_heston::RoughHestonCharacteristicFunction;
/// use pricer_models::models::{HestonParameters, ModelParameters, TimeGrid};
///
/// let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// let params = ModelParameters::new(heston, 0.6).unwrap();
/// let grid = TimeGrid::new(100, 1.0).unwrap();
/// let cf = RoughHestonCharacteristicFunction::new(params, grid);
///
/// // φ(-i) = E[S_T / S_0] = 1
/// let phi = cf.evaluate(Complex64::new(0.0, -1.0)).unwrap();
/// assert!((phi - Complex64::new(1.0, 0.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct RoughHestonCharacteristicFunction {
    params: ModelParameters,
    grid: TimeGrid,
    kernel: RiccatiKernel,
    weights: FractionalWeights,
    assembler: CharacteristicFunctionAssembler,
}

impl RoughHestonCharacteristicFunction {
    /// Builds the weights and tail factors for `params` on `grid`.
    pub fn new(params: ModelParameters, grid: TimeGrid) -> Self {
        let weights = FractionalWeights::new(&grid, params.alpha());
        let assembler = CharacteristicFunctionAssembler::new(&grid, &params);
        Self {
            kernel: RiccatiKernel::from_params(&params),
            params,
            grid,
            weights,
            assembler,
        }
    }

    /// Model parameters.
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Shared convolution weights.
    pub fn weights(&self) -> &FractionalWeights {
        &self.weights
    }

    /// Solver borrowing this function's weights.
    pub fn solver(&self) -> FractionalRiccatiSolver<'_> {
        FractionalRiccatiSolver::new(&self.weights, self.kernel)
    }

    /// Solves for `ĥ` at argument `a`.
    pub fn solve(&self, a: Complex64) -> Vec<Complex64> {
        self.solver().solve(a)
    }
}

impl CharacteristicFunction for RoughHestonCharacteristicFunction {
    fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError> {
        let h = self.solve(u);
        if h.iter().any(|z| !(z.re.is_finite() && z.im.is_finite())) {
            return Err(PricingError::overflow("fractional Riccati solution", u.re, u.im));
        }

        let exponent = self.assembler.exponent(&h);
        let value = exponent.exp();
        if !(value.re.is_finite() && value.im.is_finite()) {
            return Err(PricingError::overflow(
                "rough Heston characteristic exponent",
                u.re,
                u.im,
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HestonParameters;
    use approx::assert_relative_eq;

    fn reference_cf() -> RoughHestonCharacteristicFunction {
        let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
        let params = ModelParameters::new(heston, 0.6).unwrap();
        RoughHestonCharacteristicFunction::new(params, TimeGrid::new(100, 1.0).unwrap())
    }

    #[test]
    fn test_unit_at_zero() {
        let phi = reference_cf().evaluate(Complex64::new(0.0, 0.0)).unwrap();
        assert_eq!(phi, Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_modulus_bounded_on_real_axis() {
        let cf = reference_cf();
        for u in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let phi = cf.evaluate(Complex64::new(u, 0.0)).unwrap();
            assert!(phi.norm() <= 1.0 + 1e-10, "|φ({})| = {}", u, phi.norm());
        }
    }

    #[test]
    fn test_conjugate_symmetry() {
        // φ(-ū) = conj(φ(u)) for a real-valued log-return
        let cf = reference_cf();
        let u = Complex64::new(1.7, -0.5);
        let lhs = cf.evaluate(-u.conj()).unwrap();
        let rhs = cf.evaluate(u).unwrap().conj();
        assert_relative_eq!(lhs.re, rhs.re, epsilon = 1e-13);
        assert_relative_eq!(lhs.im, rhs.im, epsilon = 1e-13);
    }

    #[test]
    fn test_solution_starts_at_zero() {
        let cf = reference_cf();
        let h = cf.solve(Complex64::new(3.0, -0.5));
        assert_eq!(h[0], Complex64::new(0.0, 0.0));
        assert_eq!(h.len(), cf.grid().steps() + 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
        let params = ModelParameters::new(heston, 0.6).unwrap();
        let cf = RoughHestonCharacteristicFunction::new(params, TimeGrid::new(20, 1.0).unwrap());
        // A huge imaginary shift drives the quadratic term past f64 range
        let err = cf.evaluate(Complex64::new(0.0, -1e8)).unwrap_err();
        assert!(matches!(err, PricingError::NumericOverflow { .. }));
    }
}
