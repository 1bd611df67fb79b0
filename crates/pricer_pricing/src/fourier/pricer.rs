//! Dampened Fourier inversion over a characteristic function.

use num_complex::Complex64;
use pricer_core::math::quadrature::AdaptiveQuadrature;
use pricer_core::traits::CharacteristicFunction;
use pricer_core::types::PricingError;
use tracing::warn;

use super::config::FourierConfig;

/// Upper limit of the frequency integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationRange {
    /// Integrate over `[0, U]`.
    Finite(f64),
    /// Integrate over `[0, ∞)`.
    SemiInfinite,
}

/// Slack, relative to spot, allowed on the static call bounds.
const BOUND_SLACK: f64 = 1e-8;

/// Whether an undiscounted call lies within `[max(S0 - K, 0), S0]`.
///
/// Truncating the frequency integral can push far-wing prices outside this
/// range; the `sqrt(S0·K)` factor amplifies the truncation error as K grows.
pub fn within_static_bounds(price: f64, spot: f64, strike: f64) -> bool {
    let slack = BOUND_SLACK * spot;
    price >= (spot - strike).max(0.0) - slack && price <= spot + slack
}

/// Prices calls from any [`CharacteristicFunction`] of the log-return.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pricer_core::traits::CharacteristicFunction;
/// use pricer_core::types::PricingError;
/// use pricer_pricing::fourier::{FourierConfig, FourierPricer, IntegrationRange};
///
/// struct Lognormal(f64);
///
/// impl CharacteristicFunction for Lognormal {
///     fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError> {
///         let i = Complex64::i();
///         Ok((-0.5 * self.0 * self.0 * (u * u + i * u)).exp())
///     }
/// }
///
/// let pricer = FourierPricer::new(Lognormal(0.2), 1.0, FourierConfig::default());
/// let atm = pricer.price_call(0.0, IntegrationRange::SemiInfinite).unwrap();
/// // Black-Scholes ATM call with σ = 0.2, T = 1
/// assert!((atm - 0.07965567455405798).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct FourierPricer<C> {
    cf: C,
    spot: f64,
    quadrature: AdaptiveQuadrature,
}

impl<C: CharacteristicFunction> FourierPricer<C> {
    /// Creates a pricer for spot `spot`.
    pub fn new(cf: C, spot: f64, config: FourierConfig) -> Self {
        Self {
            cf,
            spot,
            quadrature: AdaptiveQuadrature::new(config.quadrature),
        }
    }

    /// The characteristic function being inverted.
    pub fn characteristic_function(&self) -> &C {
        &self.cf
    }

    /// Spot price S0.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Real integrand `Re[e^(-iuk) φ(u - i/2)] / (u² + 1/4)`.
    pub fn integrand(&self, u: f64, log_moneyness: f64) -> Result<f64, PricingError> {
        let phi = self.cf.evaluate(Complex64::new(u, -0.5))?;
        let rotation = Complex64::new(0.0, -u * log_moneyness).exp();
        let value = (rotation * phi).re / (u * u + 0.25);
        if !value.is_finite() {
            return Err(PricingError::overflow("Fourier integrand", u, -0.5));
        }
        Ok(value)
    }

    /// Undiscounted call price at log-moneyness `k = ln(K / S0)`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a non-finite `k` or a non-positive finite cutoff
    /// - `NumericOverflow` from the characteristic function or the integrand
    /// - `QuadratureNonConvergence` if the tolerance is not met in budget
    pub fn price_call(
        &self,
        log_moneyness: f64,
        range: IntegrationRange,
    ) -> Result<f64, PricingError> {
        if !log_moneyness.is_finite() {
            return Err(PricingError::InvalidParameter(format!(
                "log-moneyness must be finite, got {}",
                log_moneyness
            )));
        }

        let integrand = |u: f64| self.integrand(u, log_moneyness);
        let integral = match range {
            IntegrationRange::Finite(cutoff) => {
                if !(cutoff > 0.0 && cutoff.is_finite()) {
                    return Err(PricingError::InvalidParameter(format!(
                        "integration cutoff must be positive and finite, got {}",
                        cutoff
                    )));
                }
                self.quadrature.integrate(integrand, 0.0, cutoff)
            }
            IntegrationRange::SemiInfinite => {
                self.quadrature.integrate_semi_infinite(integrand, 0.0)
            }
        };

        let integral = integral.inspect_err(|err| {
            if let PricingError::QuadratureNonConvergence { estimated_error, .. } = err {
                warn!(log_moneyness, estimated_error, "Fourier inversion did not converge");
            }
        })?;

        let strike = self.spot * log_moneyness.exp();
        let price = self.spot - (self.spot * strike).sqrt() / std::f64::consts::PI * integral;
        if !within_static_bounds(price, self.spot, strike) {
            warn!(
                log_moneyness,
                price,
                spot = self.spot,
                strike,
                "Fourier call price outside no-arbitrage bounds"
            );
        }
        Ok(price)
    }
}
