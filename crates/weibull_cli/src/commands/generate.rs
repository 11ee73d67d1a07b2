//! Generate command implementation
//!
//! Generates variates with the configured parameters and prints them.

use std::io::Write;

use tracing::info;
use weibull_core::{Dims, WeibullRandom};

use crate::config::CliConfig;
use crate::render::render;
use crate::{CliError, Result};

/// Parse the `--dims` JSON argument
pub fn parse_dims(raw: &str) -> Result<Dims> {
    serde_json::from_str(raw).map_err(|_| {
        CliError::InvalidArgument(format!(
            "dims must be a JSON number or array of numbers, got `{}`",
            raw
        ))
    })
}

/// Run the generate command
pub fn run(config: &CliConfig, dims: Option<&str>, out: &mut impl Write) -> Result<()> {
    let dims = dims.map(parse_dims).transpose()?;

    let mut generator: WeibullRandom = match config.seed()? {
        Some(seed) => {
            info!(seed = %seed, "Using seeded generator");
            WeibullRandom::with_seed(seed)?
        }
        None => WeibullRandom::new(),
    };

    let options = config.options();
    let variates = generator.random(dims.as_ref(), Some(&options))?;
    info!(
        kind = %variates.kind(),
        elements = variates.element_count(),
        "Generation complete"
    );

    render(&variates, config.format, out)
}
