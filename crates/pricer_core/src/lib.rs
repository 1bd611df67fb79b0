//! # pricer_core: Numerical Foundation for Fourier Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the layered architecture, providing:
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//! - The characteristic-function capability shared by every Fourier pricer (`traits`)
//! - Root-finding solvers used by implied volatility recovery (`math::solvers`)
//! - Adaptive Gauss–Kronrod quadrature over finite and semi-infinite ranges (`math::quadrature`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-complex: Complex arithmetic for characteristic functions
//! - serde: Serialisation support for configuration types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::quadrature::{AdaptiveQuadrature, QuadratureConfig};
//! use pricer_core::math::quadrature::QuadratureError;
//!
//! let quad = AdaptiveQuadrature::new(QuadratureConfig::default());
//!
//! // ∫₀^π sin(x) dx = 2
//! let value = quad
//!     .integrate(|x: f64| Ok::<_, QuadratureError>(x.sin()), 0.0, std::f64::consts::PI)
//!     .unwrap();
//! assert!((value - 2.0).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable deserialisation of solver and quadrature configuration

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
