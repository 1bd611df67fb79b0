//! Compare command implementation
//!
//! Prints one JSON object per strike with both model prices and their
//! Black-Scholes implied volatilities.

use pricer_models::analytical::ImpliedVolSolver;
use pricer_pricing::comparison::{compare_models, ModelComparison};
use pricer_pricing::engine::HestonEngine;
use tracing::info;

use super::price::engine;
use crate::config::CliConfig;
use crate::Result;

/// Prices the configured strikes under both models.
pub fn comparisons(config: &CliConfig) -> Result<Vec<ModelComparison>> {
    let rough = engine(config)?;
    let classical = HestonEngine::with_config(
        config.grid.maturity,
        config.heston_parameters()?,
        config.fourier_config(),
    )?;

    Ok(compare_models(
        &rough,
        &classical,
        &config.pricing.log_moneyness,
        config.pricing.cutoff,
        &ImpliedVolSolver::default(),
    )?)
}

/// Run the compare command
pub fn run(config: &CliConfig) -> Result<()> {
    let rows = comparisons(config)?;
    for row in &rows {
        println!("{}", serde_json::to_string(row)?);
    }
    info!(strikes = rows.len(), "Comparison complete");
    Ok(())
}
