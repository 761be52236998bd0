// wscensor-core/src/lib.rs
//! # wscensor Core Library
//!
//! `wscensor-core` censors an Obsidian `workspace.json` layout before it is
//! committed or published: tabs showing banned files are closed, saved search
//! queries containing banned words are blanked, and banned entries are dropped
//! from the recently-opened list. The layout's own pointers (each split's
//! `currentTab`, the document-wide `active` tab) are repaired along the way so
//! the result still loads.
//!
//! The library is pure: it performs no I/O beyond optional config loading and
//! keeps no state between calls.
//!
//! ## Modules
//!
//! * `model`: The typed layout tree (`Workspace` → `Pane` → `Split` → `Tab`).
//! * `config`: `CensorConfig` ban lists, YAML loading, merging and validation.
//! * `matcher`: Anchored path patterns and banned-word checks.
//! * `redactor`: Blanks search queries.
//! * `planner`: Per-split removal masks.
//! * `repair`: `currentTab` and `active` repair after removal.
//! * `regenerate`: Placeholder tab for an emptied main area.
//! * `censor`: The traversal tying the above together.
//! * `headless`: JSON-text-in, JSON-text-out wrappers.
//! * `snippet`: `git filter-repo` callback generation.
//!
//! ## Usage Example
//!
//! ```rust
//! use wscensor_core::{censor_json, CensorConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = CensorConfig::new(
//!         vec![r"Some company/.*\.md".to_string()],
//!         vec!["secret".to_string()],
//!     );
//!     let input = r#"{
//!       "main": {"id": "m", "type": "split", "children": [
//!         {"id": "t", "type": "tabs", "children": [
//!           {"id": "a", "type": "leaf", "state": {"type": "markdown", "state": {"file": "Some company/plan.md"}}}
//!         ]}
//!       ]},
//!       "left": {"id": "l", "type": "split", "children": []},
//!       "right": {"id": "r", "type": "split", "children": []},
//!       "active": "a",
//!       "lastOpenFiles": ["Some company/plan.md", "Home/todo.md"]
//!     }"#;
//!
//!     let (output, report) = censor_json(&config, input)?;
//!     assert_eq!(report.tabs_removed(), 1);
//!     assert!(!output.contains("Some company"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Core operations return [`CensorError`]; the `headless` and `config` helpers
//! wrap it in `anyhow::Error` with context. Every error is fatal for the call
//! that raised it and no partially censored document is produced.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod censor;
pub mod config;
pub mod errors;
pub mod headless;
pub mod matcher;
pub mod model;
pub mod planner;
pub mod redactor;
pub mod regenerate;
pub mod repair;
pub mod sensitive;
pub mod snippet;

/// Re-exports the configuration types and functions for managing ban lists.
pub use config::{config_candidate_paths, merge_config, CensorConfig, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CensorError;

/// Re-exports the layout tree.
pub use model::{Pane, PaneName, Split, Tab, TabState, ViewState, Workspace};

/// Re-exports the censoring traversal and its results.
pub use censor::{censor, Censor, CensorOutcome, CensorReport, PaneReport};

pub use matcher::{compile_rules, path_is_banned, word_is_banned, CompiledRules};
pub use regenerate::{IdSource, RandomHexIds};
pub use repair::ActiveUpdate;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{censor_json, format_workspace, parse_workspace, roundtrip_json};

pub use snippet::{render_filter_callback, SnippetOptions};
