//! CLI configuration management
//!
//! Settings come from, lowest to highest priority:
//! 1. Built-in defaults (the reference scenario)
//! 2. A TOML file, `rough_heston.toml` unless `--config` says otherwise
//! 3. `ROUGH_HESTON_*` environment variables
//! 4. Command-line flags
//!
//! ```toml
//! log_level = "info"
//!
//! [model]
//! spot = 1.0
//! v0 = 0.02
//! kappa = 0.3
//! theta = 0.02
//! nu = 0.3
//! rho = -0.7
//! alpha = 0.6
//!
//! [grid]
//! steps = 100
//! maturity = 1.0
//!
//! [pricing]
//! cutoff = 5.0
//! log_moneyness = [-0.1]
//! abs_tolerance = 1e-10
//! rel_tolerance = 1e-10
//! max_subdivisions = 200
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_core::math::quadrature::QuadratureConfig;
use pricer_models::models::{HestonParameters, ModelParameters};
use pricer_pricing::fourier::{FourierConfig, DEFAULT_CUTOFF};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "ROUGH_HESTON_LOG_LEVEL";
/// Environment variable overriding the grid step count.
pub const ENV_STEPS: &str = "ROUGH_HESTON_STEPS";
/// Environment variable overriding the Fourier cutoff.
pub const ENV_CUTOFF: &str = "ROUGH_HESTON_CUTOFF";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// File could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable held an unparsable value.
    #[error("Environment variable {var}={value} is not valid")]
    EnvError {
        /// Variable name
        var: String,
        /// Offending value
        value: String,
    },

    /// Settings parsed but describe an invalid model or pricing run.
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Log levels accepted in the file and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-strike trace output
    Trace,
    /// Engine construction details
    Debug,
    /// Default
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[model]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    /// Spot price S0
    pub spot: f64,
    /// Initial variance V0
    pub v0: f64,
    /// Mean-reversion speed κ
    pub kappa: f64,
    /// Long-run variance θ
    pub theta: f64,
    /// Vol-of-vol ν
    pub nu: f64,
    /// Correlation ρ
    pub rho: f64,
    /// Fractional order α
    pub alpha: f64,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            spot: 1.0,
            v0: 0.02,
            kappa: 0.3,
            theta: 0.02,
            nu: 0.3,
            rho: -0.7,
            alpha: 0.6,
        }
    }
}

/// `[grid]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Number of time steps n
    pub steps: usize,
    /// Maturity T in years
    pub maturity: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            steps: 100,
            maturity: 1.0,
        }
    }
}

/// `[pricing]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSection {
    /// Upper limit of the rough-model frequency integral
    pub cutoff: f64,
    /// Strikes as `ln(K / S0)`
    pub log_moneyness: Vec<f64>,
    /// Quadrature tolerances and budget
    #[serde(flatten)]
    pub quadrature: QuadratureConfig,
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            log_moneyness: vec![-0.1],
            quadrature: QuadratureConfig::default(),
        }
    }
}

/// Full CLI configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Model parameters
    pub model: ModelSection,
    /// Time grid
    pub grid: GridSection,
    /// Fourier pricing settings
    pub pricing: PricingSection,
}

impl CliConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads `path` if it exists, otherwise starts from the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies `ROUGH_HESTON_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from any variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_error = |var: &str, value: &str| ConfigError::EnvError {
            var: var.to_string(),
            value: value.to_string(),
        };

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(steps) = lookup(ENV_STEPS) {
            self.grid.steps = steps
                .trim()
                .parse()
                .map_err(|_| env_error(ENV_STEPS, &steps))?;
        }
        if let Some(cutoff) = lookup(ENV_CUTOFF) {
            self.pricing.cutoff = cutoff
                .trim()
                .parse()
                .map_err(|_| env_error(ENV_CUTOFF, &cutoff))?;
        }
        Ok(())
    }

    /// Classical Heston parameters from `[model]`.
    pub fn heston_parameters(&self) -> Result<HestonParameters, ConfigError> {
        let m = &self.model;
        HestonParameters::new(m.spot, m.v0, m.kappa, m.theta, m.nu, m.rho)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Rough Heston parameters from `[model]`.
    pub fn model_parameters(&self) -> Result<ModelParameters, ConfigError> {
        ModelParameters::new(self.heston_parameters()?, self.model.alpha)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Fourier settings from `[pricing]`.
    pub fn fourier_config(&self) -> FourierConfig {
        FourierConfig::new(self.pricing.quadrature)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model_parameters()?;

        if self.grid.steps < 1 {
            return Err(ConfigError::Invalid("grid.steps must be at least 1".to_string()));
        }
        if !(self.grid.maturity > 0.0 && self.grid.maturity.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "grid.maturity must be positive, got {}",
                self.grid.maturity
            )));
        }
        if !(self.pricing.cutoff > 0.0 && self.pricing.cutoff.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "pricing.cutoff must be positive, got {}",
                self.pricing.cutoff
            )));
        }
        if self.pricing.log_moneyness.is_empty() {
            return Err(ConfigError::Invalid(
                "pricing.log_moneyness must list at least one strike".to_string(),
            ));
        }
        if let Some(k) = self.pricing.log_moneyness.iter().find(|k| !k.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "pricing.log_moneyness contains {}",
                k
            )));
        }
        let q = &self.pricing.quadrature;
        if !(q.abs_tolerance > 0.0 || q.rel_tolerance > 0.0) {
            return Err(ConfigError::Invalid(
                "at least one quadrature tolerance must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default_is_reference_scenario() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.model.alpha, 0.6);
        assert_eq!(config.model.rho, -0.7);
        assert_eq!(config.grid.steps, 100);
        assert_eq!(config.grid.maturity, 1.0);
        assert_eq!(config.pricing.cutoff, 5.0);
        assert_eq!(config.pricing.log_moneyness, vec![-0.1]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "debug"

            [model]
            alpha = 0.75

            [pricing]
            log_moneyness = [-0.2, 0.0, 0.2]
            max_subdivisions = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.model.alpha, 0.75);
        assert_eq!(config.model.v0, 0.02);
        assert_eq!(config.grid.steps, 100);
        assert_eq!(config.pricing.log_moneyness, vec![-0.2, 0.0, 0.2]);
        assert_eq!(config.pricing.quadrature.max_subdivisions, 50);
        assert_eq!(config.pricing.quadrature.abs_tolerance, 1e-10);
    }

    #[test]
    fn test_bad_log_level_in_file() {
        assert!(CliConfig::from_toml_str(r#"log_level = "loud""#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("rough_heston_does_not_exist.toml");
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "rough_heston_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[grid]\nsteps = 40\nmaturity = 0.5\n").unwrap();
        let config = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.grid.steps, 40);
        assert_eq!(config.grid.maturity, 0.5);
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (ENV_LOG_LEVEL, "WARN"),
                (ENV_STEPS, " 250 "),
                (ENV_CUTOFF, "7.5"),
            ]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.grid.steps, 250);
        assert_eq!(config.pricing.cutoff, 7.5);
    }

    #[test]
    fn test_unparsable_override_is_reported() {
        let mut config = CliConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_STEPS, "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { .. }));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("invalid").is_err());
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_validate_rejects_alpha_outside_range() {
        let mut config = CliConfig::default();
        config.model.alpha = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_grid_and_cutoff() {
        let mut config = CliConfig::default();
        config.grid.steps = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.pricing.cutoff = -1.0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.pricing.log_moneyness.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialises_back_to_toml() {
        let text = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert_eq!(CliConfig::from_toml_str(&text).unwrap(), CliConfig::default());
    }
}
