//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing or implied-volatility failure.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON output could not be produced.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML output could not be produced.
    #[error("TOML output error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_wraps() {
        let err = CliError::from(PricingError::InvalidParameter("steps".to_string()));
        assert_eq!(format!("{}", err), "Pricing error: Invalid parameter: steps");
    }

    #[test]
    fn test_config_error_wraps() {
        let err = CliError::from(ConfigError::InvalidLogLevel("loud".to_string()));
        assert!(format!("{}", err).starts_with("Configuration error: "));
    }
}
