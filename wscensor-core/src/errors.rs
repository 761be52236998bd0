//! errors.rs - Custom error types for the wscensor-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wscensor-core` library.
///
/// Every variant is fatal for the censoring call that produced it: no partially
/// censored workspace is ever returned alongside an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CensorError {
    /// The active tab was found in a split whose own `currentTab` points elsewhere.
    #[error(
        "Split '{split_id}': active tab sits at index {active_index} but currentTab is {selected_index}"
    )]
    SelectionMismatch {
        split_id: String,
        active_index: usize,
        selected_index: usize,
    },

    #[error("Tab '{tab_id}' has a malformed view state: {reason}")]
    MalformedTabState { tab_id: String, reason: String },

    #[error("The main pane has no split to regenerate into or fall back to")]
    MissingPrimarySplit,

    #[error("Failed to compile file pattern '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("File pattern '{0}...': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Banned word list contains an empty entry, which would match every query")]
    EmptyBannedWord,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse or write workspace JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render filter snippet: {0}")]
    Template(String),
}
