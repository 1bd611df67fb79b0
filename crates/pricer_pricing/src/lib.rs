//! # Pricer Pricing (Layer 3: Pricing Engines)
//!
//! Fourier-inversion engines for the rough and classical Heston models.
//!
//! ## Layer 3 Role
//!
//! - [`fourier`]: the dampened inversion integral over any characteristic function
//! - [`engine`]: `RoughHestonEngine` (finite cutoff) and `HestonEngine`
//!   (semi-infinite), behind the [`engine::PricingEngine`] trait
//! - [`comparison`]: both models side by side in Black-Scholes implied volatility
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::ImpliedVolSolver;
//! use pricer_models::models::{HestonParameters, ModelParameters};
//! use pricer_pricing::comparison::compare_models;
//! use pricer_pricing::engine::{HestonEngine, RoughHestonEngine};
//!
//! let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
//! let rough = RoughHestonEngine::new(100, 1.0, ModelParameters::new(heston, 0.6).unwrap()).unwrap();
//! let classical = HestonEngine::new(1.0, heston).unwrap();
//!
//! let rows = compare_models(&rough, &classical, &[-0.1], 5.0, &ImpliedVolSolver::default()).unwrap();
//! assert!((rows[0].rough_implied_vol - 0.1863).abs() < 5e-4);
//! assert!((rows[0].heston_implied_vol - 0.1523).abs() < 5e-4);
//! ```
//!
//! ## Concurrency
//!
//! Convolution weights are built once per engine and only read afterwards.
//! Each characteristic-function evaluation owns its solution array, so
//! strike strips are priced on the rayon pool without locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod comparison;
pub mod engine;
pub mod fourier;

pub use comparison::{compare_models, ModelComparison};
pub use engine::{HestonEngine, PricingEngine, RoughHestonEngine};
pub use fourier::{FourierConfig, FourierPricer, IntegrationRange};
