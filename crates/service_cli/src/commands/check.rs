//! Check command implementation
//!
//! Prints the effective configuration as TOML after validation, so it can be
//! saved as a starting `rough_heston.toml`.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;
    print!("{}", render(config)?);
    info!("Configuration is valid");
    Ok(())
}

fn render(config: &CliConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
