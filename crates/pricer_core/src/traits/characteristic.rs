//! Characteristic-function capability.
//!
//! Any model that can evaluate the characteristic function of the log-return
//! `ln(S_T / S_0)` at a complex argument plugs into the Fourier pricer
//! through [`CharacteristicFunction`].

use num_complex::Complex64;

use crate::types::PricingError;

/// Characteristic function of the log-return of the underlying.
///
/// Implementations evaluate `φ(u) = E[exp(i·u·ln(S_T/S_0))]` for a complex
/// argument `u`. The Fourier pricer calls [`evaluate`](Self::evaluate) at
/// `u - i/2` for every quadrature node, so implementations must be free of
/// shared mutable state; the `Send + Sync` bound lets strikes be priced on
/// worker threads.
///
/// # Errors
///
/// Implementations return [`PricingError::NumericOverflow`] when the exponent
/// or an intermediate state is not finite, instead of handing NaN or infinity
/// to the integrator.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pricer_core::traits::CharacteristicFunction;
/// use pricer_core::types::PricingError;
///
/// /// Log-return of a Black-Scholes model with zero rate.
/// struct Lognormal {
///     sigma: f64,
///     expiry: f64,
/// }
///
/// impl CharacteristicFunction for Lognormal {
///     fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError> {
///         let i = Complex64::i();
///         let var = self.sigma * self.sigma * self.expiry;
///         Ok((-0.5 * var * (u * u + i * u)).exp())
///     }
/// }
///
/// let cf = Lognormal { sigma: 0.2, expiry: 1.0 };
/// let phi0 = cf.evaluate(Complex64::new(0.0, 0.0)).unwrap();
/// assert!((phi0 - Complex64::new(1.0, 0.0)).norm() < 1e-15);
/// ```
pub trait CharacteristicFunction: Send + Sync {
    /// Evaluate the characteristic function at the complex argument `u`.
    fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError>;
}

impl<C: CharacteristicFunction + ?Sized> CharacteristicFunction for &C {
    #[inline]
    fn evaluate(&self, u: Complex64) -> Result<Complex64, PricingError> {
        (**self).evaluate(u)
    }
}
