//! Blanks saved search queries that contain a banned word.

use log::debug;

use crate::matcher::CompiledRules;
use crate::sensitive::loggable;

/// Empties `query` if it contains any banned word. Returns whether it did.
///
/// The tab itself is kept: a search view with an empty query is still valid.
pub fn redact_search(query: &mut String, rules: &CompiledRules) -> bool {
    if !rules.word_is_banned(query) {
        return false;
    }
    debug!("Redacting search query {}", loggable(query));
    query.clear();
    true
}
