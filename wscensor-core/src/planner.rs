//! Removal planning for a single split.
//!
//! This is the first of two passes over a split's tabs: it decides, per tab,
//! whether the tab goes, and it redacts search queries on the way. Nothing is
//! removed here; [`crate::repair`] consumes the plan.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::errors::CensorError;
use crate::matcher::CompiledRules;
use crate::model::{Split, TabState};
use crate::redactor::redact_search;
use crate::sensitive::loggable;

/// The per-tab decisions for one split.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemovalPlan {
    /// One entry per original child, `true` meaning the child is removed.
    pub mask: Vec<bool>,
    /// Position of the document's active tab in this split, if it lives here.
    pub active_index: Option<usize>,
    /// Number of search queries blanked.
    pub redacted: usize,
}

impl RemovalPlan {
    pub fn removed_count(&self) -> usize {
        self.mask.iter().filter(|&&removed| removed).count()
    }

    /// Removals at positions `0..=index`.
    pub fn removed_through(&self, index: usize) -> usize {
        self.mask
            .iter()
            .take(index.saturating_add(1))
            .filter(|&&removed| removed)
            .count()
    }
}

/// Walks `split`'s tabs in order and builds its [`RemovalPlan`].
///
/// Search tabs are redacted in place and never removed. File tabs whose path is
/// banned are marked. Empty and unrecognized views are left alone.
pub fn plan_split(
    split: &mut Split,
    active_id: &str,
    rules: &CompiledRules,
) -> Result<RemovalPlan, CensorError> {
    let mut plan = RemovalPlan {
        mask: vec![false; split.children.len()],
        ..RemovalPlan::default()
    };

    for (idx, tab) in split.children.iter_mut().enumerate() {
        if tab.id == active_id {
            match plan.active_index {
                None => plan.active_index = Some(idx),
                Some(first) => warn!(
                    "Split '{}': active id '{}' appears at {} and {}; using the first.",
                    split.id, active_id, first, idx
                ),
            }
        }

        match tab.state_mut()? {
            TabState::Search { query } => {
                if redact_search(query, rules) {
                    plan.redacted += 1;
                }
            }
            TabState::File { path } => {
                if rules.path_is_banned(path) {
                    debug!("Split '{}': removing tab {} ({})", split.id, idx, loggable(path));
                    plan.mask[idx] = true;
                }
            }
            TabState::Empty | TabState::Other => {}
        }
    }

    Ok(plan)
}
