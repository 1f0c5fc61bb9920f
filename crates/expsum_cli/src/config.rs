//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and CLI arguments.

use expsum_core::isolation::{IsolationConfig, RootMethod, DEFAULT_MAX_DERIVATIVE_ORDER};
use expsum_core::math::solvers::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid root method: {0}. Must be one of: brent, bisection")]
    InvalidMethod(String),

    #[error("Invalid search range: [{0}, {1}]")]
    InvalidRange(f64, f64),

    #[error("Invalid tolerance: {0}. Must be positive")]
    InvalidTolerance(f64),

    #[error("Invalid iteration budget: max_root_iterations must be > 0")]
    InvalidIterations,

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
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

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Lower end of the search range
    pub x_min: f64,
    /// Upper end of the search range
    pub x_max: f64,
    /// Root tolerance on |f(x)|
    pub tolerance: f64,
    /// Iteration budget of each root search
    pub max_root_iterations: usize,
    /// Highest derivative order tried for dominance
    pub max_derivative_order: u32,
    /// Root finder on bracketed intervals
    pub method: RootMethod,
    /// Output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            x_min: f64::NEG_INFINITY,
            x_max: f64::INFINITY,
            tolerance: DEFAULT_TOLERANCE,
            max_root_iterations: DEFAULT_MAX_ITERATIONS,
            max_derivative_order: DEFAULT_MAX_DERIVATIVE_ORDER,
            method: RootMethod::Brent,
            format: OutputFormat::Table,
        }
    }
}

const ENV_LOG_LEVEL: &str = "EXPSUM_LOG_LEVEL";
const ENV_X_MIN: &str = "EXPSUM_X_MIN";
const ENV_X_MAX: &str = "EXPSUM_X_MAX";
const ENV_TOLERANCE: &str = "EXPSUM_TOLERANCE";
const ENV_MAX_ROOT_ITERATIONS: &str = "EXPSUM_MAX_ROOT_ITERATIONS";
const ENV_MAX_DERIVATIVE_ORDER: &str = "EXPSUM_MAX_DERIVATIVE_ORDER";
const ENV_METHOD: &str = "EXPSUM_METHOD";
const ENV_FORMAT: &str = "EXPSUM_FORMAT";

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not valid", name, value)))
}

impl CliConfig {
    /// Apply `EXPSUM_*` environment variables on top of this configuration
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup; unset names are skipped
    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(x_min) = lookup(ENV_X_MIN) {
            self.x_min = parse_env(ENV_X_MIN, &x_min)?;
        }
        if let Some(x_max) = lookup(ENV_X_MAX) {
            self.x_max = parse_env(ENV_X_MAX, &x_max)?;
        }
        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            self.tolerance = parse_env(ENV_TOLERANCE, &tolerance)?;
        }
        if let Some(iterations) = lookup(ENV_MAX_ROOT_ITERATIONS) {
            self.max_root_iterations = parse_env(ENV_MAX_ROOT_ITERATIONS, &iterations)?;
        }
        if let Some(order) = lookup(ENV_MAX_DERIVATIVE_ORDER) {
            self.max_derivative_order = parse_env(ENV_MAX_DERIVATIVE_ORDER, &order)?;
        }
        if let Some(method) = lookup(ENV_METHOD) {
            self.method = RootMethod::from_str(&method)
                .map_err(|_| ConfigError::InvalidMethod(method.clone()))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_min.is_nan() || self.x_max.is_nan() || self.x_min > self.x_max {
            return Err(ConfigError::InvalidRange(self.x_min, self.x_max));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.max_root_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(x_min) = cli.x_min {
            self.x_min = x_min;
        }
        if let Some(x_max) = cli.x_max {
            self.x_max = x_max;
        }
        if let Some(method) = &cli.method {
            self.method = RootMethod::from_str(method)
                .map_err(|_| ConfigError::InvalidMethod(method.clone()))?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Isolation settings for the core library
    ///
    /// Only call on a validated configuration.
    pub fn isolation_config(&self) -> IsolationConfig {
        IsolationConfig::default()
            .with_tolerance(self.tolerance)
            .with_max_root_iterations(self.max_root_iterations)
            .with_max_derivative_order(self.max_derivative_order)
            .with_method(self.method)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug unless one is given
    pub verbose: bool,
    /// Lower search bound override
    pub x_min: Option<f64>,
    /// Upper search bound override
    pub x_max: Option<f64>,
    /// Root method override
    pub method: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
