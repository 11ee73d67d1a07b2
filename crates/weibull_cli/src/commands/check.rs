//! Check command implementation
//!
//! Prints the effective configuration after every source is merged.

use std::io::Write;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let resolved = config.options().resolve()?;
    info!("Configuration is valid");

    writeln!(out, "lambda:    {}", resolved.lambda)?;
    writeln!(out, "k:         {}", resolved.k)?;
    writeln!(out, "dtype:     {}", resolved.dtype)?;
    match config.seed()? {
        Some(seed) => writeln!(out, "seed:      {}", seed)?,
        None => writeln!(out, "seed:      (entropy)")?,
    }
    writeln!(out, "format:    {:?}", config.format)?;
    writeln!(out, "log_level: {}", config.log_level)?;
    Ok(())
}
