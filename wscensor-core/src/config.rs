//! Configuration management for `wscensor-core`.
//!
//! This module defines the ban lists the censor is driven by. It handles
//! deserialization of YAML configurations and provides utilities for locating,
//! loading, merging and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum allowed length for a file pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Bytes per generated identifier. Hex-encoded this gives Obsidian's 16 characters.
pub const DEFAULT_ID_BYTES: usize = 8;

/// Accepted range for `id_bytes`.
pub const ID_BYTES_RANGE: std::ops::RangeInclusive<usize> = 4..=32;

/// The ban lists and knobs for one censoring run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CensorConfig {
    /// Regex patterns matched against file paths, anchored at the start of the path.
    pub file_patterns: Vec<String>,
    /// Case-sensitive substrings that blank a saved search query.
    pub banned_words: Vec<String>,
    /// Random bytes per regenerated identifier.
    pub id_bytes: usize,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            file_patterns: Vec::new(),
            banned_words: Vec::new(),
            id_bytes: DEFAULT_ID_BYTES,
        }
    }
}

impl CensorConfig {
    pub fn new(file_patterns: Vec<String>, banned_words: Vec<String>) -> Self {
        Self {
            file_patterns,
            banned_words,
            ..Self::default()
        }
    }

    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading censor configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CensorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded {} file patterns and {} banned words from {}.",
            config.file_patterns.len(),
            config.banned_words.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the first configuration found in [`config_candidate_paths`], if any.
    pub fn discover() -> Result<Option<Self>> {
        for candidate in config_candidate_paths() {
            if candidate.is_file() {
                debug!("Found configuration candidate at {}", candidate.display());
                return Self::load_from_file(&candidate).map(Some);
            }
        }
        debug!("No configuration file found in the default locations.");
        Ok(None)
    }

    /// Returns true when nothing would be censored.
    pub fn is_empty(&self) -> bool {
        self.file_patterns.is_empty() && self.banned_words.is_empty()
    }

    /// Checks every entry and reports all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for pattern in &self.file_patterns {
            if pattern.is_empty() {
                errors.push("A file pattern is empty; it would match every path.".to_string());
                continue;
            }
            if pattern.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "A file pattern is {} bytes long, the maximum is {}.",
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ));
                continue;
            }
            if let Err(e) = Regex::new(pattern) {
                errors.push(format!("File pattern '{}' is not a valid regex: {}", pattern, e));
            }
        }

        if self.banned_words.iter().any(String::is_empty) {
            errors.push("A banned word is empty; it would blank every search query.".to_string());
        }

        if !ID_BYTES_RANGE.contains(&self.id_bytes) {
            errors.push(format!(
                "id_bytes must be between {} and {}, got {}.",
                ID_BYTES_RANGE.start(),
                ID_BYTES_RANGE.end(),
                self.id_bytes
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Merges ban lists given on the command line into a file configuration.
///
/// File entries come first, then extra ones; duplicates keep their first position.
pub fn merge_config(
    file_config: Option<CensorConfig>,
    extra_patterns: &[String],
    extra_words: &[String],
) -> CensorConfig {
    let mut merged = file_config.unwrap_or_default();
    debug!(
        "merge_config: {} patterns and {} words from file, {} and {} extra.",
        merged.file_patterns.len(),
        merged.banned_words.len(),
        extra_patterns.len(),
        extra_words.len()
    );

    merged.file_patterns = dedupe_in_order(merged.file_patterns.iter().chain(extra_patterns));
    merged.banned_words = dedupe_in_order(merged.banned_words.iter().chain(extra_words));

    if merged.is_empty() {
        warn!("No file patterns or banned words configured; the workspace will pass through unchanged.");
    }
    merged
}

fn dedupe_in_order<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|&item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// Locations searched for a configuration when none is given explicitly, in order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        Some(PathBuf::from(".wscensor.yaml")),
        dirs::home_dir().map(|p| p.join(".wscensor").join("config.yaml")),
        dirs::config_dir().map(|p| p.join("wscensor").join("config.yaml")),
    ];

    candidates.into_iter().flatten().collect()
}
