//! Output rendering.

use std::io::Write;

use weibull_core::Variates;

use crate::config::OutputFormat;
use crate::Result;

/// Write `variates` to `out` in the requested format.
pub fn render(variates: &Variates, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, variates)?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, variates)?;
            writeln!(out)?;
        }
        OutputFormat::Lines => {
            for value in variates.to_f64_vec() {
                writeln!(out, "{}", value)?;
            }
        }
    }
    Ok(())
}
