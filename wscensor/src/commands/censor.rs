// wscensor/src/commands/censor.rs
//! The `censor` command: workspace text in, censored workspace text out.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io;

use wscensor_core::{censor_json, CensorConfig};

use super::{info_msg, read_input, stderr_supports_color, warn_msg, write_output};
use crate::cli::CensorCommand;
use crate::ui::{diff_viewer, summary};

/// Censors one workspace document.
///
/// Nothing is written unless censoring succeeds.
pub fn run_censor(config: &CensorConfig, cmd: &CensorCommand, quiet: bool) -> Result<()> {
    info!("Starting censor operation.");

    if config.is_empty() && !quiet {
        warn_msg("No file patterns or banned words configured; output equals the reformatted input.");
    }

    let input = read_input(cmd.io.input_file.as_deref())?;
    let (censored, report) = censor_json(config, &input)?;
    debug!(
        "Workspace censored. Original length: {}, censored length: {}",
        input.len(),
        censored.len()
    );

    write_output(cmd.io.output.as_deref(), &censored)?;

    let color = stderr_supports_color();
    if cmd.diff {
        diff_viewer::print_diff(&input, &censored, &mut io::stderr(), color)
            .context("Failed to print diff")?;
    }
    if cmd.summary && !quiet {
        summary::print_summary(&report, &mut io::stderr(), color).context("Failed to print summary")?;
    }
    if let (Some(path), false) = (&cmd.io.output, quiet) {
        info_msg(format!("Censored workspace written to {}", path.display()));
    }

    info!("Censor operation completed.");
    Ok(())
}
