//! Collapses a solved `ĥ` into the characteristic-function exponent.
//!
//! ```text
//! I_trap = dt · (Σ ĥ_i - ½(ĥ_0 + ĥ_n))
//! I_frac = 1/(Γ(1-α)(1-α)) · Σ_{i<n} [(T-t_i)^(1-α) - (T-t_{i+1})^(1-α)] · ĥ_i
//! φ      = exp(κθ · I_trap + V0 · I_frac)
//! ```
//!
//! `I_frac` integrates the singular kernel `(T-s)^(-α)` exactly against the
//! left-endpoint, piecewise-constant reading of `ĥ`. The bracketed factors
//! depend only on the grid, so they are precomputed.

use num_complex::Complex64;
use statrs::function::gamma::gamma;

use crate::models::{ModelParameters, TimeGrid};

/// Trapezoidal and fractional-tail integration of `ĥ`.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicFunctionAssembler {
    dt: f64,
    kappa_theta: f64,
    v0: f64,
    tail_weights: Vec<f64>,
}

impl CharacteristicFunctionAssembler {
    /// Precomputes the tail weights for `grid` and the model constants.
    pub fn new(grid: &TimeGrid, params: &ModelParameters) -> Self {
        let alpha = params.alpha();
        let maturity = grid.maturity();
        let exponent = 1.0 - alpha;
        let scale = 1.0 / (gamma(exponent) * exponent);

        let tail_weights = grid
            .points()
            .windows(2)
            .map(|t| {
                let left = (maturity - t[0]).max(0.0).powf(exponent);
                let right = (maturity - t[1]).max(0.0).powf(exponent);
                scale * (left - right)
            })
            .collect();

        Self {
            dt: grid.dt(),
            kappa_theta: params.kappa() * params.theta(),
            v0: params.v0(),
            tail_weights,
        }
    }

    /// Trapezoidal integral of `ĥ` over the grid.
    pub fn trapezoid(&self, h: &[Complex64]) -> Complex64 {
        match (h.first(), h.last()) {
            (Some(&first), Some(&last)) => {
                let total: Complex64 = h.iter().sum();
                self.dt * (total - 0.5 * (first + last))
            }
            _ => Complex64::new(0.0, 0.0),
        }
    }

    /// Fractional integral of `ĥ` against `(T-s)^(-α)`, left-endpoint rule.
    pub fn fractional_tail(&self, h: &[Complex64]) -> Complex64 {
        self.tail_weights
            .iter()
            .zip(h)
            .map(|(&w, &hi)| w * hi)
            .sum()
    }

    /// `κθ · I_trap + V0 · I_frac`.
    pub fn exponent(&self, h: &[Complex64]) -> Complex64 {
        self.kappa_theta * self.trapezoid(h) + self.v0 * self.fractional_tail(h)
    }

    /// `exp` of [`exponent`](Self::exponent).
    pub fn assemble(&self, h: &[Complex64]) -> Complex64 {
        self.exponent(h).exp()
    }

    /// The precomputed factors `[(T-t_i)^(1-α) - (T-t_{i+1})^(1-α)] / (Γ(1-α)(1-α))`.
    pub fn tail_weights(&self) -> &[f64] {
        &self.tail_weights
    }
}
