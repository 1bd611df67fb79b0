//! Rough versus classical Heston, reported in implied volatility.

use pricer_core::types::PricingError;
use pricer_models::analytical::{ImpliedVolSolver, OptionType};
use tracing::warn;

use crate::engine::PricingEngine;

/// One strike priced under both models.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelComparison {
    /// `ln(K / S0)`.
    pub log_moneyness: f64,
    /// Strike K.
    pub strike: f64,
    /// Rough Heston call price.
    pub rough_price: f64,
    /// Black-Scholes implied volatility of `rough_price`.
    pub rough_implied_vol: f64,
    /// Classical Heston call price.
    pub heston_price: f64,
    /// Black-Scholes implied volatility of `heston_price`.
    pub heston_implied_vol: f64,
}

impl ModelComparison {
    /// Rough minus classical implied volatility.
    pub fn implied_vol_spread(&self) -> f64 {
        self.rough_implied_vol - self.heston_implied_vol
    }
}

/// Prices every strike under both engines and inverts each price to a
/// Black-Scholes implied volatility at zero rate.
///
/// Both strips are priced in parallel. The first failing strike aborts the
/// comparison with its error.
///
/// # Errors
///
/// - `InvalidParameter` if the engines disagree on spot or maturity
/// - any pricing error from either engine
/// - `RootNotBracketed` if a price has no implied volatility in the bracket
pub fn compare_models<R, H>(
    rough: &R,
    classical: &H,
    log_moneyness: &[f64],
    cutoff: f64,
    solver: &ImpliedVolSolver,
) -> Result<Vec<ModelComparison>, PricingError>
where
    R: PricingEngine + ?Sized,
    H: PricingEngine + ?Sized,
{
    let spot = rough.spot();
    let maturity = rough.maturity();
    if spot != classical.spot() || maturity != classical.maturity() {
        return Err(PricingError::InvalidParameter(format!(
            "engines disagree: spot {} vs {}, maturity {} vs {}",
            spot,
            classical.spot(),
            maturity,
            classical.maturity()
        )));
    }

    let (rough_prices, heston_prices) = rayon::join(
        || rough.price_strip(log_moneyness, cutoff),
        || classical.price_strip(log_moneyness, cutoff),
    );

    log_moneyness
        .iter()
        .zip(rough_prices)
        .zip(heston_prices)
        .map(|((&k, rough_price), heston_price)| {
            let row = comparison_row(
                k,
                rough.strike(k),
                maturity,
                spot,
                rough_price,
                heston_price,
                solver,
            );
            if let Err(err) = &row {
                warn!(log_moneyness = k, error = %err, "model comparison aborted at strike");
            }
            row
        })
        .collect()
}

fn comparison_row(
    log_moneyness: f64,
    strike: f64,
    maturity: f64,
    spot: f64,
    rough_price: Result<f64, PricingError>,
    heston_price: Result<f64, PricingError>,
    solver: &ImpliedVolSolver,
) -> Result<ModelComparison, PricingError> {
    let implied_vol = |price: f64| {
        solver
            .implied_vol(spot, strike, maturity, 0.0, price, OptionType::Call)
            .map_err(PricingError::from)
    };

    let rough_price = rough_price?;
    let heston_price = heston_price?;
    Ok(ModelComparison {
        log_moneyness,
        strike,
        rough_price,
        rough_implied_vol: implied_vol(rough_price)?,
        heston_price,
        heston_implied_vol: implied_vol(heston_price)?,
    })
}
