//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from the Black-Scholes pricer and implied volatility solver

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidExpiry`: Negative or non-finite expiry
/// - `InvalidPrice`: Non-finite target price
/// - `NoRootFound`: Target price outside the attainable range of the volatility bracket
/// - `Solver`: Root finder failed inside a valid bracket
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (negative or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Target price is NaN or infinite.
    #[error("Invalid target price: {price}")]
    InvalidPrice {
        /// The invalid price value
        price: f64,
    },

    /// No implied volatility in the search bracket reproduces the price.
    #[error("No root found: price {price} not attainable for σ in [{lower}, {upper}]")]
    NoRootFound {
        /// Price that could not be inverted
        price: f64,
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Root finder failed.
    #[error("Implied volatility solver failed: {0}")]
    Solver(#[from] SolverError),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NoRootFound {
                price,
                lower,
                upper,
            } => PricingError::RootNotBracketed {
                price,
                lower,
                upper,
            },
            AnalyticalError::Solver(inner) => PricingError::Solver(inner),
            other => PricingError::InvalidParameter(other.to_string()),
        }
    }
}
