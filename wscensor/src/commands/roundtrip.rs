// wscensor/src/commands/roundtrip.rs
//! The `roundtrip` command.
//!
//! When censoring runs over git history, every untouched commit should produce
//! the blob it started with. This reads a workspace, writes it back without
//! censoring, and compares bytes.

use anyhow::{Context, Result};
use log::info;
use std::io;
use std::process::ExitCode;

use wscensor_core::roundtrip_json;

use super::{info_msg, read_input, stderr_supports_color, warn_msg, write_output};
use crate::cli::RoundtripCommand;
use crate::ui::diff_viewer;

/// Exit status when the rewritten bytes differ from the input.
pub const EXIT_DIFFERS: u8 = 2;

pub fn run_roundtrip(cmd: &RoundtripCommand, quiet: bool) -> Result<ExitCode> {
    let input = read_input(cmd.io.input_file.as_deref())?;
    let rewritten = roundtrip_json(&input)?;

    if let Some(path) = &cmd.io.output {
        write_output(Some(path), &rewritten)?;
    }

    if rewritten == input {
        info!("Round trip reproduced the input byte for byte.");
        if !quiet {
            info_msg("Round trip is byte-identical.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!(
        "Round trip differs: input {} bytes, rewritten {} bytes.",
        input.len(),
        rewritten.len()
    );
    if !quiet {
        warn_msg("Round trip changed the file's bytes.");
    }
    if cmd.diff {
        diff_viewer::print_diff(&input, &rewritten, &mut io::stderr(), stderr_supports_color())
            .context("Failed to print diff")?;
    }
    Ok(ExitCode::from(EXIT_DIFFERS))
}
