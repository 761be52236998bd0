// File: wscensor-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for censoring JSON text in one call (non-interactive use).
//!
//! Output is pretty-printed with two-space indentation, LF line endings and no
//! trailing newline, which is how Obsidian writes `workspace.json`.

use anyhow::{Context, Result};

use crate::censor::{Censor, CensorReport};
use crate::config::CensorConfig;
use crate::model::Workspace;

/// Parses `workspace.json` text.
pub fn parse_workspace(input: &str) -> Result<Workspace> {
    serde_json::from_str(input).context("Failed to parse workspace JSON")
}

/// Serializes a workspace the way Obsidian does.
pub fn format_workspace(workspace: &Workspace) -> Result<String> {
    serde_json::to_string_pretty(workspace).context("Failed to serialize workspace JSON")
}

/// Parses, censors and re-serializes a workspace document.
///
/// # Arguments
///
/// * `config` - The merged ban lists (file config plus command-line additions).
/// * `input` - The `workspace.json` text.
pub fn censor_json(config: &CensorConfig, input: &str) -> Result<(String, CensorReport)> {
    let censor = Censor::new(config).context("Failed to build censor from configuration")?;
    let workspace = parse_workspace(input)?;
    let outcome = censor.censor(workspace).context("Censoring failed")?;
    Ok((format_workspace(&outcome.workspace)?, outcome.report))
}

/// Re-serializes a document without censoring it.
pub fn roundtrip_json(input: &str) -> Result<String> {
    format_workspace(&parse_workspace(input)?)
}
