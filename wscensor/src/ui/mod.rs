// wscensor/src/ui/mod.rs
//! Terminal output helpers: status messages, diffs and summaries, all on stderr.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
