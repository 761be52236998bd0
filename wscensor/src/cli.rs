// wscensor/src/cli.rs
//! This file defines the command-line interface (CLI) for the wscensor application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use wscensor_core::snippet::DEFAULT_TARGET;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wscensor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Censor sensitive paths and searches out of an Obsidian workspace.json",
    long_about = "wscensor removes tabs that show banned files, blanks saved searches containing banned words and drops banned entries from the recently-opened list of an Obsidian workspace.json, repairing the layout's selected-tab and active-tab pointers so the result still loads. It is designed to run as a git filter-repo callback when publishing a vault's history.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Path to a YAML file with `file_patterns` and `banned_words`.
    #[arg(long = "config", value_name = "FILE", env = "WSCENSOR_CONFIG", help = "Path to a censor configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Skip configuration discovery and use only command-line rules.
    #[arg(long = "no-config", conflicts_with = "config", help = "Do not load any configuration file.")]
    pub no_config: bool,

    /// Extra file pattern, matched from the start of each path.
    #[arg(long = "pattern", short = 'P', value_name = "REGEX", help = "Ban file paths matching REGEX at their start (repeatable).")]
    pub patterns: Vec<String>,

    /// Extra banned word for search queries.
    #[arg(long = "word", short = 'w', value_name = "WORD", help = "Blank search queries containing WORD (repeatable).")]
    pub words: Vec<String>,

    /// Random bytes per regenerated identifier.
    #[arg(long = "id-bytes", value_name = "N", help = "Random bytes per regenerated tab identifier.")]
    pub id_bytes: Option<usize>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wscensor` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Censors a workspace file or stdin.
    #[command(visible_alias = "filter", about = "Censor a workspace.json from a file or stdin.")]
    Censor(CensorCommand),

    /// Re-serializes a workspace without censoring and reports whether the bytes survive.
    #[command(about = "Check that reading and rewriting a workspace.json reproduces it byte for byte.")]
    Roundtrip(RoundtripCommand),

    /// Prints a git filter-repo callback that censors the workspace file in every commit.
    #[command(about = "Print a git filter-repo --file-info-callback body using the current rules.")]
    Print(PrintCommand),
}

/// Input and output locations shared by the file-processing commands.
#[derive(ClapArgs, Debug)]
pub struct IoArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input", short = 'i', value_name = "FILE", help = "Read the workspace from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `censor` command.
#[derive(Parser, Debug)]
pub struct CensorCommand {
    #[command(flatten)]
    pub io: IoArgs,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,

    /// Print a table of what was censored.
    #[arg(long = "summary", help = "Print a censoring summary on stderr.")]
    pub summary: bool,
}

/// Arguments for the `roundtrip` command.
#[derive(Parser, Debug)]
pub struct RoundtripCommand {
    #[command(flatten)]
    pub io: IoArgs,

    /// Show where the rewritten text differs.
    #[arg(long, short = 'D', help = "Show a unified diff of any formatting differences on stderr.")]
    pub diff: bool,
}

/// Arguments for the `print` command.
#[derive(Parser, Debug)]
pub struct PrintCommand {
    /// Workspace path inside the repository, or inside a vault directory in it.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TARGET, help = "Path of the workspace file the callback rewrites.")]
    pub target: String,

    /// The wscensor executable the callback runs.
    #[arg(long, value_name = "PATH", default_value = "wscensor", help = "wscensor executable invoked by the callback.")]
    pub binary: String,
}
