//! Model parameter and grid validation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while validating model parameters or the time grid.
///
/// # Examples
///
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidAlpha(0.4);
/// assert!(format!("{}", err).contains("0.4"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: S0 = {0} (must be positive)")]
    InvalidSpot(f64),

    /// Initial variance must be strictly positive.
    #[error("Invalid initial variance: V0 = {0} (must be positive)")]
    InvalidV0(f64),

    /// Vol-of-vol must be strictly positive.
    #[error("Invalid vol-of-vol: nu = {0} (must be positive)")]
    InvalidVolOfVol(f64),

    /// Correlation must lie in [-1, 1].
    #[error("Invalid correlation: rho = {0} (must lie in [-1, 1])")]
    InvalidRho(f64),

    /// Roughness order must lie strictly inside (0.5, 1).
    #[error("Invalid fractional order: alpha = {0} (must lie in (0.5, 1))")]
    InvalidAlpha(f64),

    /// The time grid needs at least one step.
    #[error("Invalid step count: n = {0} (must be at least 1)")]
    InvalidSteps(usize),

    /// Maturity must be strictly positive.
    #[error("Invalid maturity: T = {0} (must be positive)")]
    InvalidMaturity(f64),

    /// A parameter was NaN or infinite.
    #[error("Non-finite value for {0}")]
    NonFinite(String),
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", ModelError::InvalidRho(1.5)),
            "Invalid correlation: rho = 1.5 (must lie in [-1, 1])"
        );
        assert_eq!(
            format!("{}", ModelError::InvalidSteps(0)),
            "Invalid step count: n = 0 (must be at least 1)"
        );
        assert_eq!(
            format!("{}", ModelError::NonFinite("kappa".to_string())),
            "Non-finite value for kappa"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        match PricingError::from(ModelError::InvalidAlpha(1.0)) {
            PricingError::InvalidParameter(msg) => assert!(msg.contains("alpha = 1")),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }
}
