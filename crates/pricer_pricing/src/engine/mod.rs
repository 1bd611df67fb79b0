//! Pricing engines and the shared engine interface.
//!
//! An engine binds a characteristic function to a [`FourierPricer`](crate::fourier::FourierPricer)
//! and answers price queries by log-moneyness. Calls are priced directly;
//! puts follow from zero-rate parity `P = C - S0 + K`.

mod heston;
mod rough_heston;

pub use heston::HestonEngine;
pub use rough_heston::RoughHestonEngine;

/// Zero-rate call-put parity: `P = C - S0 + K`.
#[inline]
pub fn put_from_call(call: f64, spot: f64, strike: f64) -> f64 {
    call - spot + strike
}

use pricer_core::types::PricingError;
use rayon::prelude::*;

/// European option pricer keyed by log-moneyness `k = ln(K / S0)`.
///
/// Implementations hold only read-only state, so strikes can be priced
/// concurrently through [`price_strip`](Self::price_strip).
pub trait PricingEngine: Send + Sync {
    /// Spot price S0.
    fn spot(&self) -> f64;

    /// Option maturity T.
    fn maturity(&self) -> f64;

    /// Undiscounted call price.
    ///
    /// `cutoff` bounds the frequency integral for engines that need a finite
    /// range; engines that integrate to infinity ignore it.
    fn price(&self, log_moneyness: f64, cutoff: f64) -> Result<f64, PricingError>;

    /// Strike for log-moneyness `k`.
    fn strike(&self, log_moneyness: f64) -> f64 {
        self.spot() * log_moneyness.exp()
    }

    /// Undiscounted put price from call-put parity.
    fn price_put(&self, log_moneyness: f64, cutoff: f64) -> Result<f64, PricingError> {
        let call = self.price(log_moneyness, cutoff)?;
        Ok(put_from_call(call, self.spot(), self.strike(log_moneyness)))
    }

    /// Prices every strike in parallel; results follow the input order.
    fn price_strip(&self, log_moneyness: &[f64], cutoff: f64) -> Vec<Result<f64, PricingError>> {
        log_moneyness
            .par_iter()
            .map(|&k| self.price(k, cutoff))
            .collect()
    }
}
