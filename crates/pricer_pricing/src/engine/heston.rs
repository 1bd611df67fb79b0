//! Classical Heston pricing engine.

use pricer_core::types::PricingError;
use pricer_models::models::{HestonCharacteristicFunction, HestonParameters};
use tracing::trace;

use super::PricingEngine;
use crate::fourier::{FourierConfig, FourierPricer, IntegrationRange};

/// Prices European options under classical Heston over `[0, ∞)`.
///
/// # Examples
///
/// ```
/// use pricer_models::models::HestonParameters;
/// use pricer_pricing::engine::{HestonEngine, PricingEngine};
///
/// let params = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// let engine = HestonEngine::new(1.0, params).unwrap();
///
/// // The cutoff is ignored
/// let price = engine.price(-0.1, 5.0).unwrap();
/// assert!((price - 0.1174).abs() < 5e-4);
/// ```
#[derive(Debug, Clone)]
pub struct HestonEngine {
    pricer: FourierPricer<HestonCharacteristicFunction>,
}

impl HestonEngine {
    /// Builds the engine for options expiring at `maturity`.
    pub fn new(maturity: f64, params: HestonParameters) -> Result<Self, PricingError> {
        Self::with_config(maturity, params, FourierConfig::default())
    }

    /// As [`new`](Self::new) with explicit Fourier settings.
    pub fn with_config(
        maturity: f64,
        params: HestonParameters,
        config: FourierConfig,
    ) -> Result<Self, PricingError> {
        let cf = HestonCharacteristicFunction::new(params, maturity)?;
        Ok(Self {
            pricer: FourierPricer::new(cf, params.spot(), config),
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &HestonParameters {
        self.pricer.characteristic_function().params()
    }

    /// Call price integrated up to `cutoff` instead of infinity.
    pub fn price_truncated(&self, log_moneyness: f64, cutoff: f64) -> Result<f64, PricingError> {
        self.pricer
            .price_call(log_moneyness, IntegrationRange::Finite(cutoff))
    }
}

impl PricingEngine for HestonEngine {
    fn spot(&self) -> f64 {
        self.pricer.spot()
    }

    fn maturity(&self) -> f64 {
        self.pricer.characteristic_function().maturity()
    }

    fn price(&self, log_moneyness: f64, _cutoff: f64) -> Result<f64, PricingError> {
        let price = self
            .pricer
            .price_call(log_moneyness, IntegrationRange::SemiInfinite)?;
        trace!(log_moneyness, price, "Heston call");
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> HestonParameters {
        HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap()
    }

    #[test]
    fn test_rejects_bad_maturity() {
        assert!(matches!(
            HestonEngine::new(-1.0, params()),
            Err(PricingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_cutoff_is_ignored() {
        let engine = HestonEngine::new(1.0, params()).unwrap();
        let a = engine.price(0.0, 1.0).unwrap();
        let b = engine.price(0.0, 100.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncated_price_at_cutoff_five() {
        let engine = HestonEngine::new(1.0, params()).unwrap();
        let truncated = engine.price_truncated(-0.1, 5.0).unwrap();
        assert_relative_eq!(truncated, 0.128715587, epsilon = 1e-6);
    }

    #[test]
    fn test_put_call_parity() {
        let engine = HestonEngine::new(1.0, params()).unwrap();
        let k = 0.1;
        let call = engine.price(k, 0.0).unwrap();
        let put = engine.price_put(k, 0.0).unwrap();
        assert_relative_eq!(call - put, 1.0 - k.exp(), epsilon = 1e-14);
    }
}
