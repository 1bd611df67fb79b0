//! Quadrature configuration types.

/// Configuration for adaptive quadrature.
///
/// Integration stops once the summed error estimate over all subintervals
/// is at most `max(abs_tolerance, rel_tolerance * |integral|)`.
///
/// # Example
///
/// ```
/// use pricer_core::math::quadrature::QuadratureConfig;
///
/// let config = QuadratureConfig::default();
/// assert_eq!(config.max_subdivisions, 200);
///
/// let loose = QuadratureConfig::new(1e-8, 1e-8, 50);
/// assert!(loose.abs_tolerance > config.abs_tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadratureConfig {
    /// Absolute error target.
    pub abs_tolerance: f64,

    /// Relative error target.
    pub rel_tolerance: f64,

    /// Maximum number of interval bisections.
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    /// Default values:
    /// - `abs_tolerance`: 1e-10
    /// - `rel_tolerance`: 1e-10
    /// - `max_subdivisions`: 200
    fn default() -> Self {
        Self {
            abs_tolerance: 1e-10,
            rel_tolerance: 1e-10,
            max_subdivisions: 200,
        }
    }
}

impl QuadratureConfig {
    /// Create a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if both tolerances are non-positive.
    pub fn new(abs_tolerance: f64, rel_tolerance: f64, max_subdivisions: usize) -> Self {
        assert!(
            abs_tolerance > 0.0 || rel_tolerance > 0.0,
            "at least one tolerance must be positive"
        );
        Self {
            abs_tolerance,
            rel_tolerance,
            max_subdivisions,
        }
    }

    /// Error target for an integral of the given magnitude.
    #[inline]
    pub fn target(&self, integral: f64) -> f64 {
        self.abs_tolerance.max(self.rel_tolerance * integral.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuadratureConfig::default();
        assert_eq!(config.abs_tolerance, 1e-10);
        assert_eq!(config.rel_tolerance, 1e-10);
        assert_eq!(config.max_subdivisions, 200);
    }

    #[test]
    fn test_target_uses_larger_of_abs_and_rel() {
        let config = QuadratureConfig::new(1e-8, 1e-6, 10);
        assert_eq!(config.target(0.0), 1e-8);
        assert!((config.target(100.0) - 1e-4).abs() < 1e-18);
    }

    #[test]
    #[should_panic(expected = "at least one tolerance must be positive")]
    fn test_zero_tolerances_panic() {
        let _ = QuadratureConfig::new(0.0, 0.0, 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_deserialisation_keeps_defaults() {
        let config: QuadratureConfig = toml::from_str("max_subdivisions = 500").unwrap();
        assert_eq!(config.max_subdivisions, 500);
        assert_eq!(config.abs_tolerance, 1e-10);
    }
}
