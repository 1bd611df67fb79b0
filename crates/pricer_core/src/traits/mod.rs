//! Core traits shared by the model and pricing layers.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Characteristic-function evaluation (`CharacteristicFunction` trait)
//!
//! Pricers are generic over these traits and resolve them by static
//! dispatch, so the Fourier inversion loop monomorphises per model.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn midpoint<T: Float>(a: T, b: T) -> T {
///     (a + b) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(1.0_f64, 3.0), 2.0);
/// ```
pub use num_traits::Float;

pub mod characteristic;

pub use characteristic::CharacteristicFunction;
