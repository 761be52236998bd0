// wscensor/src/commands/print.rs
//! The `print` command: emits a `git filter-repo` callback for the current rules.

use anyhow::{Context, Result};
use std::io::{self, Write};

use wscensor_core::{render_filter_callback, CensorConfig, SnippetOptions};

use super::info_msg;
use crate::cli::PrintCommand;

pub fn run_print(config: &CensorConfig, cmd: &PrintCommand, quiet: bool) -> Result<()> {
    let options = SnippetOptions {
        target: cmd.target.clone(),
        binary: cmd.binary.clone(),
    };
    let body = render_filter_callback(config, &options).context("Failed to render filter-repo callback")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writer.write_all(body.as_bytes()).context("Failed to write to stdout")?;
    writer.flush().context("Failed to flush stdout")?;

    if !quiet {
        info_msg("Use with: git filter-repo --file-info-callback \"$(wscensor print)\"");
    }
    Ok(())
}
