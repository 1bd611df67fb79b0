//! Heston and rough Heston model parameters.
//!
//! Both records are immutable once constructed and validated eagerly:
//!
//! ```text
//! S0 > 0, V0 > 0, nu > 0, rho ∈ [-1, 1], kappa and theta finite
//! alpha ∈ (0.5, 1)   (rough model only)
//! ```
//!
//! The variance dynamics are
//!
//! ```text
//! V_t = V0 + 1/Γ(α) ∫₀ᵗ (t-s)^(α-1) κ(θ - V_s) ds + 1/Γ(α) ∫₀ᵗ (t-s)^(α-1) ν √V_s dW_s
//! ```
//!
//! and reduce to the classical Heston model at α = 1.

use super::error::ModelError;

fn require_finite(value: f64, name: &str) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite(name.to_string()))
    }
}

/// Classical Heston parameters with zero interest rate.
///
/// # Examples
///
/// ```
/// use pricer_models::models::HestonParameters;
///
/// let params = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// assert_eq!(params.rho(), -0.7);
/// assert!(HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HestonParameters {
    spot: f64,
    v0: f64,
    kappa: f64,
    theta: f64,
    nu: f64,
    rho: f64,
}

impl HestonParameters {
    /// Creates validated Heston parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price S0 (> 0)
    /// * `v0` - Initial variance V0 (> 0)
    /// * `kappa` - Mean-reversion speed
    /// * `theta` - Long-run variance
    /// * `nu` - Vol-of-vol (> 0)
    /// * `rho` - Spot/variance correlation in [-1, 1]
    pub fn new(
        spot: f64,
        v0: f64,
        kappa: f64,
        theta: f64,
        nu: f64,
        rho: f64,
    ) -> Result<Self, ModelError> {
        require_finite(spot, "spot")?;
        require_finite(v0, "v0")?;
        require_finite(kappa, "kappa")?;
        require_finite(theta, "theta")?;
        require_finite(nu, "nu")?;
        require_finite(rho, "rho")?;

        if spot <= 0.0 {
            return Err(ModelError::InvalidSpot(spot));
        }
        if v0 <= 0.0 {
            return Err(ModelError::InvalidV0(v0));
        }
        if nu <= 0.0 {
            return Err(ModelError::InvalidVolOfVol(nu));
        }
        if !(-1.0..=1.0).contains(&rho) {
            return Err(ModelError::InvalidRho(rho));
        }

        Ok(Self {
            spot,
            v0,
            kappa,
            theta,
            nu,
            rho,
        })
    }

    /// Spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Initial variance V0.
    #[inline]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Mean-reversion speed κ.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run variance θ.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Vol-of-vol ν.
    #[inline]
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Correlation ρ.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns a copy with a different initial variance.
    pub fn with_v0(&self, v0: f64) -> Result<Self, ModelError> {
        Self::new(self.spot, v0, self.kappa, self.theta, self.nu, self.rho)
    }

    /// Strike for a log-moneyness `k = ln(K / S0)`.
    #[inline]
    pub fn strike(&self, log_moneyness: f64) -> f64 {
        self.spot * log_moneyness.exp()
    }
}

/// Rough Heston parameters: the Heston record plus the fractional order α.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{HestonParameters, ModelParameters};
///
/// let heston = HestonParameters::new(1.0, 0.02, 0.3, 0.02, 0.3, -0.7).unwrap();
/// let params = ModelParameters::new(heston, 0.6).unwrap();
/// assert_eq!(params.alpha(), 0.6);
/// assert!(ModelParameters::new(heston, 0.5).is_err());
/// assert!(ModelParameters::new(heston, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelParameters {
    heston: HestonParameters,
    alpha: f64,
}

impl ModelParameters {
    /// Creates validated rough Heston parameters.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidAlpha` unless `0.5 < alpha < 1`.
    pub fn new(heston: HestonParameters, alpha: f64) -> Result<Self, ModelError> {
        require_finite(alpha, "alpha")?;
        if !(alpha > 0.5 && alpha < 1.0) {
            return Err(ModelError::InvalidAlpha(alpha));
        }
        Ok(Self { heston, alpha })
    }

    /// The underlying Heston parameters.
    #[inline]
    pub fn heston(&self) -> &HestonParameters {
        &self.heston
    }

    /// Fractional order α. The Hurst exponent is α - 1/2.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.heston.spot
    }

    /// Initial variance V0.
    #[inline]
    pub fn v0(&self) -> f64 {
        self.heston.v0
    }

    /// Mean-reversion speed κ.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.heston.kappa
    }

    /// Long-run variance θ.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.heston.theta
    }

    /// Vol-of-vol ν.
    #[inline]
    pub fn nu(&self) -> f64 {
        self.heston.nu
    }

    /// Correlation ρ.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.heston.rho
    }
}
