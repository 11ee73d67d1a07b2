//! Weibull CLI - Command Line Variate Generation
//!
//! # Commands
//!
//! - `weibull generate --dims '[2,3]' --dtype float32` - Generate variates
//! - `weibull check` - Validate and print the effective configuration
//!
//! Results are written to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weibull_core::DType;

mod commands;
mod config;
mod error;
mod render;

use config::{build_config, CliArgs, OutputFormat};
pub use error::{CliError, Result};

/// Weibull random variate generator
#[derive(Parser)]
#[command(name = "weibull")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Generation parameters shared by every command
#[derive(Args, Clone, Debug, Default)]
struct GenerationArgs {
    /// Scale parameter lambda
    #[arg(long)]
    lambda: Option<f64>,

    /// Shape parameter k
    #[arg(short, long)]
    k: Option<f64>,

    /// Output encoding (generic, int8, uint8, uint8_clamped, int16, uint16,
    /// int32, uint32, float32, float64)
    #[arg(short, long)]
    dtype: Option<DType>,

    /// Positive integer seed for a reproducible stream
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Weibull variates
    Generate {
        /// Dimensions as JSON: a positive integer (`5`) or an array (`[2,3]`).
        /// Omit for a single value.
        #[arg(long, allow_negative_numbers = true)]
        dims: Option<String>,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Validate and print the effective configuration
    Check {
        #[command(flatten)]
        generation: GenerationArgs,
    },
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

fn cli_args(config_file: Option<PathBuf>, verbose: bool, generation: &GenerationArgs) -> CliArgs {
    CliArgs {
        config_file,
        lambda: generation.lambda,
        k: generation.k,
        dtype: generation.dtype,
        seed: generation.seed,
        format: generation.format,
        verbose,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (args, dims) = match &cli.command {
        Commands::Generate { dims, generation } => (
            cli_args(cli.config.clone(), cli.verbose, generation),
            Some(dims.clone()),
        ),
        Commands::Check { generation } => {
            (cli_args(cli.config.clone(), cli.verbose, generation), None)
        }
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level.as_filter_str());
    info!("Weibull CLI v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match dims {
        Some(dims) => commands::generate::run(&config, dims.as_deref(), &mut stdout),
        None => commands::check::run(&config, &mut stdout),
    }
}
