//! expsum CLI - Root Isolation for Sums of Exponentials
//!
//! Command-line entry point for the expsum_core library.
//!
//! # Commands
//!
//! - `expsum solve <curve>` - Find every root of a curve on a range
//! - `expsum bound <curve>` - Print the analytic root bound
//! - `expsum eval <curve> --x <x>` - Evaluate a curve or one of its derivatives
//!
//! # Configuration
//!
//! Settings are read from an optional TOML file (`--config`), then
//! `EXPSUM_*` environment variables, then command-line flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod curve_file;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Root isolation for sums of exponentials
#[derive(Parser)]
#[command(name = "expsum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every root of a curve on a range
    Solve {
        /// Curve file (TOML or JSON)
        curve: PathBuf,

        /// Lower end of the search range
        #[arg(long, allow_negative_numbers = true)]
        x_min: Option<f64>,

        /// Upper end of the search range
        #[arg(long, allow_negative_numbers = true)]
        x_max: Option<f64>,

        /// Root finder (brent, bisection)
        #[arg(short, long)]
        method: Option<String>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Print the interval outside of which a curve has no root
    Bound {
        /// Curve file (TOML or JSON)
        curve: PathBuf,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Evaluate a curve or one of its derivatives at a point
    Eval {
        /// Curve file (TOML or JSON)
        curve: PathBuf,

        /// Point to evaluate at
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Derivative order (0 is the curve itself)
        #[arg(short, long, default_value_t = 0)]
        order: u32,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Cli {
    /// Configuration overrides carried by the command line
    fn overrides(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            ..Default::default()
        };
        match &self.command {
            Commands::Solve {
                x_min,
                x_max,
                method,
                format,
                ..
            } => {
                args.x_min = *x_min;
                args.x_max = *x_max;
                args.method = method.clone();
                args.format = format.clone();
            }
            Commands::Bound { format, .. } | Commands::Eval { format, .. } => {
                args.format = format.clone();
            }
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Solve { curve, .. } => commands::solve::run(curve, &config),
        Commands::Bound { curve, .. } => commands::bound::run(curve, config.format),
        Commands::Eval { curve, x, order, .. } => {
            commands::eval::run(curve, *x, *order, config.format)
        }
    }
}
