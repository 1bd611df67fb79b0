//! Fourier-inversion pricing of European options.
//!
//! With zero rate and log-moneyness `k = ln(K / S0)`, the call price is
//!
//! ```text
//! C = S0 - sqrt(S0·K)/π · ∫₀^U Re[e^(-iuk) · φ(u - i/2)] / (u² + 1/4) du
//! ```
//!
//! The `-i/2` shift in the characteristic-function argument and the `1/4`
//! in the denominator belong together. `U` is a finite cutoff for the rough
//! model and `∞` for the classical closed form.

mod config;
mod pricer;

pub use config::{FourierConfig, DEFAULT_CUTOFF};
pub use pricer::{within_static_bounds, FourierPricer, IntegrationRange};
