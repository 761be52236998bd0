//! Index repair: applies a [`RemovalPlan`] to its split and keeps the split's
//! `currentTab` and the document's `active` pointer consistent.
//!
//! The selected position shifts left by the number of removals at or before
//! it, so closing the selected tab selects its left neighbour (or the new first
//! tab when it was already first). This mirrors what Obsidian does itself.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::errors::CensorError;
use crate::model::Split;
use crate::planner::RemovalPlan;

/// What a split visit asks the orchestrator to do with the document's `active` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveUpdate {
    /// The active tab does not live in this split.
    Unchanged,
    /// The active tab lived here; focus the tab now selected in this split.
    Reassign(String),
    /// The active tab lived here and the split is now empty.
    Fallback,
}

/// Outcome of repairing one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRepair {
    pub removed: usize,
    /// Whether the active tab was recorded in this split.
    pub active_hit: bool,
}

/// Removes the planned tabs from `split` and recomputes its `currentTab`.
///
/// Fails without touching the split if the active tab was found at a position
/// other than the one the split claims is selected.
pub fn repair_split(split: &mut Split, plan: &RemovalPlan) -> Result<SplitRepair, CensorError> {
    let current = split.selected_index();

    if let Some(active_index) = plan.active_index {
        if active_index != current {
            return Err(CensorError::SelectionMismatch {
                split_id: split.id.clone(),
                active_index,
                selected_index: current,
            });
        }
    }

    let removed = plan.removed_count();
    let mut new_selected = current.saturating_sub(plan.removed_through(current));

    let children = std::mem::take(&mut split.children);
    split.children = children
        .into_iter()
        .zip(&plan.mask)
        .filter_map(|(tab, &remove)| (!remove).then_some(tab))
        .collect();

    let last = split.children.len().saturating_sub(1);
    if new_selected > last {
        warn!(
            "Split '{}': currentTab {} is out of range for {} remaining tabs; clamping to {}.",
            split.id,
            current,
            split.children.len(),
            last
        );
        new_selected = last;
    }
    split.set_selected_index(new_selected);

    if removed > 0 {
        debug!(
            "Split '{}': removed {} tabs, currentTab {} -> {}.",
            split.id, removed, current, new_selected
        );
    }

    Ok(SplitRepair {
        removed,
        active_hit: plan.active_index.is_some(),
    })
}

/// Turns a repaired split into an [`ActiveUpdate`].
///
/// Call after any regeneration so a refilled primary split reassigns to its
/// placeholder instead of falling back.
pub fn resolve_active(split: &Split, repair: &SplitRepair) -> ActiveUpdate {
    if !repair.active_hit {
        return ActiveUpdate::Unchanged;
    }
    match split.selected_tab_id() {
        Some(id) => ActiveUpdate::Reassign(id.to_string()),
        None => ActiveUpdate::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn split(ids: &[&str], current: Option<usize>) -> Split {
        let children: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "type": "leaf", "state": {"type": "markdown", "state": {"file": format!("{id}.md")}}}))
            .collect();
        let mut value = json!({"id": "tabs", "type": "tabs", "children": children});
        if let Some(c) = current {
            value["currentTab"] = json!(c);
        }
        serde_json::from_value(value).unwrap()
    }

    fn plan(mask: &[bool], active_index: Option<usize>) -> RemovalPlan {
        RemovalPlan {
            mask: mask.to_vec(),
            active_index,
            redacted: 0,
        }
    }

    fn ids(split: &Split) -> Vec<&str> {
        split.children.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_worked_example_keeps_focus_on_c() {
        let mut s = split(&["a", "b", "c"], Some(2));
        let repair = repair_split(&mut s, &plan(&[false, true, false], Some(2))).unwrap();
        assert_eq!(ids(&s), vec!["a", "c"]);
        assert_eq!(s.current_tab, Some(1));
        assert_eq!(repair.removed, 1);
        assert_eq!(resolve_active(&s, &repair), ActiveUpdate::Reassign("c".into()));
    }

    #[test]
    fn test_removing_selected_tab_selects_left_neighbour() {
        let mut s = split(&["a", "b", "c"], Some(2));
        let repair = repair_split(&mut s, &plan(&[false, false, true], Some(2))).unwrap();
        assert_eq!(ids(&s), vec!["a", "b"]);
        assert_eq!(s.current_tab, Some(1));
        assert_eq!(resolve_active(&s, &repair), ActiveUpdate::Reassign("b".into()));
    }

    #[test]
    fn test_selection_reaching_zero_drops_field() {
        let mut s = split(&["a", "b", "c"], Some(1));
        let repair = repair_split(&mut s, &plan(&[true, false, false], None)).unwrap();
        assert_eq!(ids(&s), vec!["b", "c"]);
        assert_eq!(s.current_tab, None);
        assert_eq!(resolve_active(&s, &repair), ActiveUpdate::Unchanged);
    }

    #[test]
    fn test_removing_first_selected_tab_selects_next() {
        let mut s = split(&["a", "b"], None);
        let repair = repair_split(&mut s, &plan(&[true, false], Some(0))).unwrap();
        assert_eq!(ids(&s), vec!["b"]);
        assert_eq!(s.current_tab, None);
        assert_eq!(resolve_active(&s, &repair), ActiveUpdate::Reassign("b".into()));
    }

    #[test]
    fn test_removals_after_selection_do_not_shift_it() {
        let mut s = split(&["a", "b", "c", "d"], Some(1));
        repair_split(&mut s, &plan(&[false, false, true, true], None)).unwrap();
        assert_eq!(ids(&s), vec!["a", "b"]);
        assert_eq!(s.current_tab, Some(1));
    }

    #[test]
    fn test_emptied_split_with_active_falls_back() {
        let mut s = split(&["a"], None);
        let repair = repair_split(&mut s, &plan(&[true], Some(0))).unwrap();
        assert!(s.children.is_empty());
        assert_eq!(resolve_active(&s, &repair), ActiveUpdate::Fallback);
    }

    #[test]
    fn test_mismatch_is_fatal_and_leaves_split_alone() {
        let mut s = split(&["a", "b", "c"], Some(2));
        let err = repair_split(&mut s, &plan(&[true, false, false], Some(1))).unwrap_err();
        match err {
            CensorError::SelectionMismatch {
                split_id,
                active_index,
                selected_index,
            } => {
                assert_eq!(split_id, "tabs");
                assert_eq!(active_index, 1);
                assert_eq!(selected_index, 2);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(ids(&s), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let mut s = split(&["a", "b"], Some(7));
        repair_split(&mut s, &plan(&[false, false], None)).unwrap();
        assert_eq!(s.current_tab, Some(1));
    }

    #[test]
    fn test_literal_zero_is_dropped() {
        let mut s = split(&["a", "b"], Some(0));
        repair_split(&mut s, &plan(&[false, false], None)).unwrap();
        assert_eq!(s.current_tab, None);
    }
}
