// wscensor/src/lib.rs
//! # wscensor CLI
//!
//! Command-line front end for `wscensor-core`. It reads an Obsidian
//! `workspace.json`, censors it with rules from a YAML configuration and the
//! command line, and writes the result. It can also print a
//! `git filter-repo` callback that applies the same rules to every commit.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
