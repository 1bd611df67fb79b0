//! Heston-family models expressed through their characteristic functions.
//!
//! This module provides:
//! - `HestonParameters` / `ModelParameters`: validated, immutable parameter records
//! - `TimeGrid`: the uniform grid the fractional scheme runs on
//! - `rough_heston`: fractional Riccati machinery and its characteristic function
//! - `HestonCharacteristicFunction`: the closed-form classical reference
//!
//! ## Example
//!
//! ```
//! use num_complex::Complex64;
//! use pricer_core::traits::CharacteristicFunction;
//! use pricer_models::models::rough_heston::RoughHestonCharacteristicFunction;
//! use pricer_models::models::{
//!     HestonCharacteristicFunction, HestonParameters, ModelParameters, TimeGrid,
//! };
//!
//! let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
//! let rough = RoughHestonCharacteristicFunction::new(
//!     ModelParameters::new(heston, 0.6).unwrap(),
//!     TimeGrid::new(100, 1.0).unwrap(),
//! );
//! let classical = HestonCharacteristicFunction::new(heston, 1.0).unwrap();
//!
//! let u = Complex64::new(1.0, -0.5);
//! assert!(rough.evaluate(u).is_ok());
//! assert!(classical.evaluate(u).is_ok());
//! ```

pub mod error;
pub mod heston;
pub mod params;
pub mod rough_heston;
pub mod time_grid;

pub use error::ModelError;
pub use heston::HestonCharacteristicFunction;
pub use params::{HestonParameters, ModelParameters};
pub use rough_heston::RoughHestonCharacteristicFunction;
pub use time_grid::TimeGrid;
