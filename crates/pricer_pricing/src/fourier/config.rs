//! Fourier inversion settings.

use pricer_core::math::quadrature::QuadratureConfig;

/// Default truncation of the rough-model frequency integral.
pub const DEFAULT_CUTOFF: f64 = 5.0;

/// Settings for [`FourierPricer`](super::FourierPricer).
///
/// # Examples
///
/// ```
/// use pricer_pricing::fourier::FourierConfig;
///
/// let config = FourierConfig::default();
/// assert_eq!(config.quadrature.max_subdivisions, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FourierConfig {
    /// Adaptive Gauss–Kronrod tolerances and subdivision budget.
    pub quadrature: QuadratureConfig,
}

impl FourierConfig {
    /// Config with the given quadrature settings.
    pub fn new(quadrature: QuadratureConfig) -> Self {
        Self { quadrature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wraps_quadrature_default() {
        assert_eq!(FourierConfig::default().quadrature, QuadratureConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_round_trip_through_json() {
        let config = FourierConfig::new(QuadratureConfig::new(1e-8, 1e-9, 64));
        let json = serde_json::to_string(&config).unwrap();
        let back: FourierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_fields_use_defaults() {
        let config: FourierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FourierConfig::default());
    }
}
