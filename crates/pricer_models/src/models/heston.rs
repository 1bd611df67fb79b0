//! Closed-form Heston characteristic function.
//!
//! The classical Heston model (zero rate)
//!
//! ```text
//! dS = sqrt(V) · S · dW_S
//! dV = κ(θ - V) dt + ν sqrt(V) dW_V,   d⟨W_S, W_V⟩ = ρ dt
//! ```
//!
//! has the log-return characteristic function
//!
//! ```text
//! dif = κ - iρνu
//! d   = sqrt(dif² + ν²(iu + u²))
//! g   = (dif - d) / (dif + d)
//! C   = κθ/ν² · ((dif - d)T - 2 ln((1 - g e^(-dT)) / (1 - g)))
//! D   = (dif - d)/ν² · (1 - e^(-dT)) / (1 - g e^(-dT))
//! φ   = exp(C + V0 · D)
//! ```
//!
//! This "little trap" form keeps the logarithm on its principal branch for
//! the maturities and frequencies the Fourier pricer uses. It is the α = 1
//! limit of the rough model and serves as its reference.

use num_complex::Complex64;
use pricer_core::traits::CharacteristicFunction;
use pricer_core::types::PricingError;

use super::error::ModelError;
use super::params::HestonParameters;

/// Heston characteristic function for a fixed maturity.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pricer_core::traits::CharacteristicFunction;
/// use pricer_models::models::{HestonCharacteristicFunction, HestonParameters};
///
/// let params = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// let cf = HestonCharacteristicFunction::new(params, 1.0).unwrap();
/// let phi = cf.evaluate(Complex64::new(0.0, -1.0)).unwrap();
/// assert!((phi - Complex64::new(1.0, 0.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HestonCharacteristicFunction {
    params: HestonParameters,
    maturity: f64,
}

impl HestonCharacteristicFunction {
    /// Creates the characteristic function at maturity `maturity`.
    pub fn new(params: HestonParameters, maturity: f64) -> Result<Self, ModelError> {
        if !maturity.is_finite() {
            return Err(ModelError::NonFinite("maturity".to_string()));
        }
        if maturity <= 0.0 {
            return Err(ModelError::InvalidMaturity(maturity));
        }
        Ok(Self { params, maturity })
    }

    /// Model parameters.
    pub fn params(&self) -> &HestonParameters {
        &self.params
    }

    /// Maturity T.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Log of the characteristic function, `C + V0 · D`.
    pub fn exponent(&self, u: Complex64) -> Complex64 {
        let p = &self.params;
        let i = Complex64::i();
        let t = self.maturity;
        let nu2 = p.nu() * p.nu();

        let dif = p.kappa() - i * (p.rho() * p.nu()) * u;
        let d = (dif * dif + nu2 * (i * u + u * u)).sqrt();
        let g = (dif - d) / (dif + d);
        let e = (-d * t).exp();

        let c = p.kappa() * p.theta() / nu2
            * ((dif - d) * t - 2.0 * ((1.0 - g * e) / (1.0 - g)).ln());
        let big_d = (dif - d) / nu2 * (1.0 - e) / (1.0 - g * e);

        c + p.v0() * big_d
    }
}

impl CharacteristicFunction for HestonCharacteristicFunction {
    fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError> {
        let value = self.exponent(u).exp();
        if !(value.re.is_finite() && value.im.is_finite()) {
            return Err(PricingError::overflow(
                "Heston characteristic exponent",
                u.re,
                u.im,
            ));
        }
        Ok(value)
    }
}
