//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing, solver and quadrature operations
//!
//! # Re-exports
//!
//! For convenience, the error types are re-exported at this module level:
//! [`PricingError`], [`SolverError`], [`QuadratureError`].

pub mod error;

// Re-export commonly used types at module level
pub use error::{PricingError, QuadratureError, SolverError};
