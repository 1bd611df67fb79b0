//! Rough Heston pricing engine.

use pricer_core::types::PricingError;
use pricer_models::models::rough_heston::RoughHestonCharacteristicFunction;
use pricer_models::models::{ModelParameters, TimeGrid};
use tracing::{debug, trace};

use super::PricingEngine;
use crate::fourier::{FourierConfig, FourierPricer, IntegrationRange};

/// Prices European options under rough Heston with a finite frequency cutoff.
///
/// The convolution weights for `(n, T, α)` are built once in
/// [`new`](Self::new) and reused by every price query.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{HestonParameters, ModelParameters};
/// use pricer_pricing::engine::{PricingEngine, RoughHestonEngine};
///
/// let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// let params = ModelParameters::new(heston, 0.6).unwrap();
/// let engine = RoughHestonEngine::new(100, 1.0, params).unwrap();
///
/// let price = engine.price(-0.1, 5.0).unwrap();
/// assert!((price - 0.1282).abs() < 5e-4);
/// ```
#[derive(Debug, Clone)]
pub struct RoughHestonEngine {
    pricer: FourierPricer<RoughHestonCharacteristicFunction>,
}

impl RoughHestonEngine {
    /// Builds the engine on an `steps`-interval grid over `[0, maturity]`.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` if `steps < 1` or `maturity <= 0`.
    pub fn new(
        steps: usize,
        maturity: f64,
        params: ModelParameters,
    ) -> Result<Self, PricingError> {
        Self::with_config(steps, maturity, params, FourierConfig::default())
    }

    /// As [`new`](Self::new) with explicit Fourier settings.
    pub fn with_config(
        steps: usize,
        maturity: f64,
        params: ModelParameters,
        config: FourierConfig,
    ) -> Result<Self, PricingError> {
        let grid = TimeGrid::new(steps, maturity)?;
        debug!(
            steps,
            maturity,
            alpha = params.alpha(),
            "building rough Heston convolution weights"
        );
        let cf = RoughHestonCharacteristicFunction::new(params, grid);
        Ok(Self {
            pricer: FourierPricer::new(cf, params.spot(), config),
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &ModelParameters {
        self.pricer.characteristic_function().params()
    }

    /// The underlying characteristic function.
    pub fn characteristic_function(&self) -> &RoughHestonCharacteristicFunction {
        self.pricer.characteristic_function()
    }
}

impl PricingEngine for RoughHestonEngine {
    fn spot(&self) -> f64 {
        self.pricer.spot()
    }

    fn maturity(&self) -> f64 {
        self.characteristic_function().grid().maturity()
    }

    /// Integrates over `[0, cutoff]`; `cutoff` must be positive and finite.
    fn price(&self, log_moneyness: f64, cutoff: f64) -> Result<f64, PricingError> {
        let price = self
            .pricer
            .price_call(log_moneyness, IntegrationRange::Finite(cutoff))?;
        trace!(log_moneyness, cutoff, price, "rough Heston call");
        Ok(price)
    }
}
