//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by a pricing call
//! - `SolverError`: Errors from root-finding solvers
//! - `QuadratureError`: Errors from adaptive numerical integration

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure detected while building an engine or pricing a strike is
/// reported through one of these variants. The core performs no internal
/// retries; callers decide whether to narrow the cutoff, tighten the
/// tolerance or flag the strike.
///
/// # Variants
/// - `InvalidParameter`: Model, grid or query input violates its domain
/// - `NumericOverflow`: A characteristic-function exponent left the f64 range
/// - `QuadratureNonConvergence`: Fourier inversion missed its tolerance
/// - `RootNotBracketed`: Implied volatility has no root in the search bracket
/// - `Solver`: Any other root-finder failure
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter("alpha = 1.2 outside (0.5, 1)".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: alpha = 1.2 outside (0.5, 1)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid model, grid or query parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Non-finite or overflowing value in a characteristic-function evaluation.
    #[error("Numeric overflow in {context} at u = {frequency_re}{frequency_im:+}i")]
    NumericOverflow {
        /// Where the overflow was detected
        context: String,
        /// Real part of the Fourier argument
        frequency_re: f64,
        /// Imaginary part of the Fourier argument
        frequency_im: f64,
    },

    /// Adaptive quadrature exhausted its budget without meeting tolerance.
    #[error(
        "Quadrature did not converge: error estimate {estimated_error:.3e} > tolerance {tolerance:.3e} after {subdivisions} subdivisions"
    )]
    QuadratureNonConvergence {
        /// Final error estimate
        estimated_error: f64,
        /// Requested tolerance
        tolerance: f64,
        /// Number of subdivisions performed
        subdivisions: usize,
    },

    /// Price lies outside the attainable Black-Scholes range of the bracket.
    #[error("No implied volatility root for price {price} in [{lower}, {upper}]")]
    RootNotBracketed {
        /// Price that could not be inverted
        price: f64,
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Root-finder failure other than a missing bracket.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl PricingError {
    /// Create an overflow error for the given context and Fourier argument.
    pub fn overflow(context: impl Into<String>, re: f64, im: f64) -> Self {
        PricingError::NumericOverflow {
            context: context.into(),
            frequency_re: re,
            frequency_im: im,
        }
    }
}

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Objective returned a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Adaptive quadrature errors.
///
/// # Examples
/// ```
/// use pricer_core::types::QuadratureError;
///
/// let err = QuadratureError::InvalidInterval { a: 1.0, b: f64::NAN };
/// assert!(format!("{}", err).contains("Invalid integration interval"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureError {
    /// Subdivision budget exhausted before the tolerance was met.
    #[error(
        "Quadrature did not converge: error estimate {estimated_error:.3e} > tolerance {tolerance:.3e} after {subdivisions} subdivisions"
    )]
    NonConvergence {
        /// Final error estimate
        estimated_error: f64,
        /// Tolerance that was requested
        tolerance: f64,
        /// Number of subdivisions performed
        subdivisions: usize,
    },

    /// Interval endpoints are non-finite or reversed.
    #[error("Invalid integration interval [{a}, {b}]")]
    InvalidInterval {
        /// Lower limit
        a: f64,
        /// Upper limit
        b: f64,
    },
}

impl From<QuadratureError> for PricingError {
    fn from(err: QuadratureError) -> Self {
        match err {
            QuadratureError::NonConvergence {
                estimated_error,
                tolerance,
                subdivisions,
            } => PricingError::QuadratureNonConvergence {
                estimated_error,
                tolerance,
                subdivisions,
            },
            QuadratureError::InvalidInterval { .. } => {
                PricingError::InvalidParameter(err.to_string())
            }
        }
    }
}
