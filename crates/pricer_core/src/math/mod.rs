//! Numerical methods.
//!
//! - [`solvers`]: Bracketing root finders used to recover implied volatility
//! - [`quadrature`]: Adaptive Gauss–Kronrod integration for Fourier inversion

pub mod quadrature;
pub mod solvers;
