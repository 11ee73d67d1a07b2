//! CLI configuration management
//!
//! Settings come from, in increasing priority: defaults, a TOML file,
//! environment variables, command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;
use weibull_core::rng::Seed;
use weibull_core::{DType, RandomOptions};

use crate::error::{CliError, Result};

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "WEIBULL_SEED";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "WEIBULL_LOG_LEVEL";

/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "WEIBULL_FORMAT";

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
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
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

/// How generated values are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// One value per line, in generation order
    Lines,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true).map_err(|_| {
            CliError::Config(format!(
                "invalid output format: {}. Must be one of: json, pretty, lines",
                s
            ))
        })
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Scale parameter λ
    pub lambda: Option<f64>,
    /// Shape parameter k
    pub k: Option<f64>,
    /// Output encoding
    pub dtype: Option<DType>,
    /// Seed for a reproducible stream; entropy-seeded when absent
    pub seed: Option<i64>,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("failed to parse TOML: {}", e)))
    }

    /// Apply overrides from environment variables
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_lookup(|key| std::env::var(key).ok())
    }

    fn merge_with_lookup(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(seed) = lookup(ENV_SEED) {
            let parsed = seed.trim().parse::<i64>().map_err(|_| {
                CliError::Config(format!("{} must be an integer, got `{}`", ENV_SEED, seed))
            })?;
            self.seed = Some(parsed);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.lambda.is_some() {
            self.lambda = cli.lambda;
        }
        if cli.k.is_some() {
            self.k = cli.k;
        }
        if cli.dtype.is_some() {
            self.dtype = cli.dtype;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Generation options described by this configuration
    pub fn options(&self) -> RandomOptions {
        RandomOptions {
            lambda: self.lambda,
            k: self.k,
            dtype: self.dtype,
        }
    }

    /// Validated seed, if one is configured
    pub fn seed(&self) -> Result<Option<Seed>> {
        self.seed
            .map(Seed::try_from)
            .transpose()
            .map_err(CliError::from)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.options().validate()?;
        self.seed()?;
        Ok(())
    }
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// λ override
    pub lambda: Option<f64>,
    /// k override
    pub k: Option<f64>,
    /// Encoding override
    pub dtype: Option<DType>,
    /// Seed override
    pub seed: Option<i64>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Verbose logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.merge_with_env()?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
