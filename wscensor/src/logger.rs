// wscensor/src/logger.rs
//! Logging setup for the wscensor CLI.
//!
//! Everything goes to stderr: stdout carries the censored document when the
//! binary runs as a filter.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::cli::Cli;

/// Initializes `env_logger`. Safe to call more than once; later calls are no-ops.
///
/// `level` overrides `RUST_LOG` when given; otherwise `RUST_LOG` applies and
/// defaults to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Maps the global logging flags onto a level override.
pub fn level_from_flags(cli: &Cli) -> Option<LevelFilter> {
    if cli.quiet {
        Some(LevelFilter::Error)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    }
}
