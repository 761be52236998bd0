// wscensor/src/commands/mod.rs
//! Command implementations and the plumbing they share: resolving the
//! configuration and moving workspace text in and out.

pub mod censor;
pub mod print;
pub mod roundtrip;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use wscensor_core::config::{merge_config, CensorConfig};

use crate::cli::{Cli, Commands};
use crate::ui::output_format;

/// Dispatches the parsed command line.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = resolve_config(cli)?;
    match &cli.command {
        Commands::Censor(cmd) => censor::run_censor(&config, cmd, cli.quiet).map(|_| ExitCode::SUCCESS),
        Commands::Roundtrip(cmd) => roundtrip::run_roundtrip(cmd, cli.quiet),
        Commands::Print(cmd) => print::run_print(&config, cmd, cli.quiet).map(|_| ExitCode::SUCCESS),
    }
}

/// Loads the file configuration (explicit, discovered, or none) and merges the
/// command-line rules into it.
pub fn resolve_config(cli: &Cli) -> Result<CensorConfig> {
    let file_config = if cli.no_config {
        debug!("Configuration discovery disabled.");
        None
    } else if let Some(path) = &cli.config {
        Some(CensorConfig::load_from_file(path)?)
    } else {
        CensorConfig::discover()?
    };

    let mut config = merge_config(file_config, &cli.patterns, &cli.words);
    if let Some(id_bytes) = cli.id_bytes {
        config.id_bytes = id_bytes;
    }
    config.validate().context("Invalid censor rules")?;

    info!(
        "Using {} file patterns and {} banned words.",
        config.file_patterns.len(),
        config.banned_words.len()
    );
    Ok(config)
}

/// Reads the workspace text from `path`, or stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading workspace from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            info!("Reading workspace from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read workspace from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `content` verbatim (no trailing newline) to `path`, or stdout when absent.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing workspace to {}", path.display());
            fs::write(path, content.as_bytes())
                .with_context(|| format!("Failed to write output file {}", path.display()))
        }
        None => {
            debug!("Writing workspace to stdout.");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(content.as_bytes()).context("Failed to write to stdout")?;
            writer.flush().context("Failed to flush stdout")
        }
    }
}

pub fn stderr_supports_color() -> bool {
    io::stderr().is_terminal()
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color());
}
