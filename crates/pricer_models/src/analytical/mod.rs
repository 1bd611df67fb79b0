//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes call and put prices
//! - Black-Scholes implied volatility by bisection
//! - Standard normal CDF on the `statrs` erfc
//!
//! Model prices from the Fourier engines are reported through these as
//! implied volatilities.

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, OptionType};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
pub use implied_vol::{ImpliedVolSolver, DEFAULT_LOWER_VOL, DEFAULT_UPPER_VOL};
