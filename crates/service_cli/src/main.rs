//! rough-heston CLI - European option pricing under rough Heston
//!
//! # Commands
//!
//! - `rough-heston price` - Price calls (or puts) at the configured strikes
//! - `rough-heston compare` - Rough versus classical Heston in implied volatility
//! - `rough-heston check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the pricer crates and formats their output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::CliConfig;
pub use error::{CliError, Result};

/// Rough Heston option pricer
#[derive(Parser)]
#[command(name = "rough-heston")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "rough_heston.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price European options under rough Heston
    Price {
        /// Log-moneyness ln(K/S0), comma separated
        #[arg(short = 'k', long, value_delimiter = ',', allow_negative_numbers = true)]
        log_moneyness: Vec<f64>,

        /// Number of time steps
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Upper limit of the frequency integral
        #[arg(short = 'u', long)]
        cutoff: Option<f64>,

        /// Price puts instead of calls
        #[arg(long)]
        put: bool,
    },

    /// Compare rough and classical Heston implied volatilities
    Compare {
        /// Log-moneyness ln(K/S0), comma separated
        #[arg(short = 'k', long, value_delimiter = ',', allow_negative_numbers = true)]
        log_moneyness: Vec<f64>,

        /// Number of time steps
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Upper limit of the frequency integral
        #[arg(short = 'u', long)]
        cutoff: Option<f64>,
    },

    /// Validate and print the effective configuration
    Check,
}

impl Commands {
    /// Command-line flags take precedence over file and environment.
    fn apply_to(&self, config: &mut CliConfig) {
        let (log_moneyness, steps, cutoff) = match self {
            Commands::Price {
                log_moneyness,
                steps,
                cutoff,
                ..
            }
            | Commands::Compare {
                log_moneyness,
                steps,
                cutoff,
            } => (log_moneyness, *steps, *cutoff),
            Commands::Check => return,
        };
        if !log_moneyness.is_empty() {
            config.pricing.log_moneyness = log_moneyness.clone();
        }
        if let Some(steps) = steps {
            config.grid.steps = steps;
        }
        if let Some(cutoff) = cutoff {
            config.pricing.cutoff = cutoff;
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    let mut config = CliConfig::load(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    config
        .apply_env()
        .context("reading ROUGH_HESTON_* environment overrides")?;
    Ok(config)
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug"
        } else {
            config.log_level.as_filter_str()
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    init_tracing(cli.verbose, &config);
    debug!(path = %cli.config.display(), "configuration loaded");

    cli.command.apply_to(&mut config);
    config.validate().context("invalid configuration")?;
    info!(
        alpha = config.model.alpha,
        steps = config.grid.steps,
        maturity = config.grid.maturity,
        cutoff = config.pricing.cutoff,
        "effective settings"
    );

    match cli.command {
        Commands::Price { put, .. } => commands::price::run(&config, put),
        Commands::Compare { .. } => commands::compare::run(&config),
        Commands::Check => commands::check::run(&config),
    }
    .context("command failed")?;

    Ok(())
}
