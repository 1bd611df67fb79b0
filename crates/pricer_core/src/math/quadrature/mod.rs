//! Adaptive numerical integration.
//!
//! This module provides a globally adaptive Gauss–Kronrod integrator used by
//! the Fourier pricer to invert characteristic functions.
//!
//! ## Available Integrators
//!
//! - [`AdaptiveQuadrature`]: 7/15-point Gauss–Kronrod with largest-error-first bisection
//!
//! ## Configuration
//!
//! [`QuadratureConfig`] controls:
//! - `abs_tolerance`: Absolute error target (default: 1e-10)
//! - `rel_tolerance`: Relative error target (default: 1e-10)
//! - `max_subdivisions`: Interval budget (default: 200)
//!
//! ## Fallible Integrands
//!
//! Integrands return `Result<f64, E>`; the first error aborts the
//! integration and is handed back unchanged. This lets a characteristic
//! function report an overflow from deep inside the quadrature loop.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::quadrature::{AdaptiveQuadrature, QuadratureConfig};
//! use pricer_core::types::QuadratureError;
//!
//! let quad = AdaptiveQuadrature::new(QuadratureConfig::default());
//!
//! // ∫₀^∞ e^{-x} dx = 1
//! let value = quad
//!     .integrate_semi_infinite(|x: f64| Ok::<_, QuadratureError>((-x).exp()), 0.0)
//!     .unwrap();
//! assert!((value - 1.0).abs() < 1e-10);
//! ```

mod config;
mod gauss_kronrod;

pub use crate::types::QuadratureError;
pub use config::QuadratureConfig;
pub use gauss_kronrod::{AdaptiveQuadrature, QuadratureResult};
