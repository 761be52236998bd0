//! matcher.rs - Decides whether a path or a search query is banned.
//!
//! File patterns are compiled once per run into anchored regular expressions;
//! banned words are plain case-sensitive substrings.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{CensorConfig, MAX_PATTERN_LENGTH};
use crate::errors::CensorError;

/// A file pattern compiled to match at the start of a path.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The pattern as the user wrote it.
    pub source: String,
    pub regex: Regex,
}

/// Everything the censor matches against, ready for use.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    pub patterns: Vec<CompiledPattern>,
    pub words: Vec<String>,
}

impl CompiledRules {
    pub fn path_is_banned(&self, path: &str) -> bool {
        path_is_banned(path, &self.patterns)
    }

    pub fn word_is_banned(&self, text: &str) -> bool {
        word_is_banned(text, &self.words)
    }
}

/// True iff some pattern matches `path` starting at its first character.
///
/// The match need not cover the whole path: `Some company/.*\.md` bans
/// `Some company/x.md` and `Some company/x.md.bak` but not `zzSome company/x.md`.
pub fn path_is_banned(path: &str, patterns: &[CompiledPattern]) -> bool {
    patterns.iter().any(|p| p.regex.is_match(path))
}

/// True iff any word occurs in `text`. Stops at the first hit.
pub fn word_is_banned(text: &str, words: &[String]) -> bool {
    words.iter().any(|w| text.contains(w.as_str()))
}

/// Compiles one pattern as `^(?:pattern)`.
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, CensorError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        let head: String = pattern.chars().take(32).collect();
        return Err(CensorError::PatternLengthExceeded(
            head,
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| CensorError::RuleCompilation(pattern.to_string(), e))?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Compiles a configuration's ban lists.
///
/// Every pattern is attempted; if any fail, all failures are reported together.
pub fn compile_rules(config: &CensorConfig) -> Result<CompiledRules, CensorError> {
    debug!(
        "Compiling {} file patterns and {} banned words.",
        config.file_patterns.len(),
        config.banned_words.len()
    );

    if config.banned_words.iter().any(String::is_empty) {
        return Err(CensorError::EmptyBannedWord);
    }

    let mut patterns = Vec::with_capacity(config.file_patterns.len());
    let mut compilation_errors = Vec::new();

    for pattern in &config.file_patterns {
        match compile_pattern(pattern) {
            Ok(compiled) => patterns.push(compiled),
            Err(e) => compilation_errors.push(e),
        }
    }

    match compilation_errors.len() {
        0 => {
            debug!("Finished compiling rules. Total patterns: {}.", patterns.len());
            Ok(CompiledRules {
                patterns,
                words: config.banned_words.clone(),
            })
        }
        1 => Err(compilation_errors.remove(0)),
        n => {
            let error_message = compilation_errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            Err(CensorError::Config(format!(
                "Failed to compile {} file patterns:\n{}",
                n, error_message
            )))
        }
    }
}
