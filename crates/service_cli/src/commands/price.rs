//! Price command implementation
//!
//! Prices European options at every configured strike under rough Heston.

use pricer_models::analytical::OptionType;
use pricer_pricing::engine::{put_from_call, PricingEngine, RoughHestonEngine};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// One priced strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// `ln(K / S0)`
    pub log_moneyness: f64,
    /// Strike K
    pub strike: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Undiscounted price
    pub price: f64,
}

/// Builds the rough Heston engine described by `config`.
pub fn engine(config: &CliConfig) -> Result<RoughHestonEngine> {
    Ok(RoughHestonEngine::with_config(
        config.grid.steps,
        config.grid.maturity,
        config.model_parameters()?,
        config.fourier_config(),
    )?)
}

/// Prices every configured strike; the first failure aborts.
pub fn quote(config: &CliConfig, option_type: OptionType) -> Result<Vec<Quote>> {
    let engine = engine(config)?;
    let strikes = &config.pricing.log_moneyness;
    let cutoff = config.pricing.cutoff;

    let calls = engine.price_strip(strikes, cutoff);
    strikes
        .iter()
        .zip(calls)
        .map(|(&k, call)| -> Result<Quote> {
            let call = call?;
            let strike = engine.strike(k);
            let price = match option_type {
                OptionType::Call => call,
                OptionType::Put => put_from_call(call, engine.spot(), strike),
            };
            Ok(Quote {
                log_moneyness: k,
                strike,
                option_type,
                price,
            })
        })
        .collect()
}

/// Run the price command
pub fn run(config: &CliConfig, put: bool) -> Result<()> {
    let option_type = if put { OptionType::Put } else { OptionType::Call };
    info!(strikes = config.pricing.log_moneyness.len(), ?option_type, "pricing");

    let quotes = quote(config, option_type)?;

    println!("{:>10}  {:>10}  {:>6}  {:>14}", "ln(K/S0)", "strike", "type", "price");
    for q in &quotes {
        let kind = match q.option_type {
            OptionType::Call => "call",
            OptionType::Put => "put",
        };
        println!(
            "{:>10.4}  {:>10.6}  {:>6}  {:>14.10}",
            q.log_moneyness, q.strike, kind, q.price
        );
    }

    info!("Pricing complete");
    Ok(())
}
