//! The censoring traversal.
//!
//! One synchronous pass over `main`, `left` and `right` (in that order), and
//! over each pane's splits in order. Every split is planned, repaired and, for
//! the primary split, regenerated. The document's `active` id is threaded
//! through as an accumulator and written once at the end.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::CensorConfig;
use crate::errors::CensorError;
use crate::matcher::{compile_rules, CompiledRules};
use crate::model::{PaneName, Split, Workspace};
use crate::planner::plan_split;
use crate::regenerate::{regenerate_if_empty, IdSource, RandomHexIds};
use crate::repair::{repair_split, resolve_active, ActiveUpdate};
use crate::sensitive::loggable;

/// What censoring did to one pane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaneReport {
    pub tabs_removed: usize,
    pub queries_redacted: usize,
    pub splits_regenerated: usize,
}

/// What censoring did to the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CensorReport {
    pub main: PaneReport,
    pub left: PaneReport,
    pub right: PaneReport,
    pub recent_files_dropped: usize,
    pub active_before: String,
    pub active_after: String,
}

impl CensorReport {
    pub fn pane(&self, name: PaneName) -> &PaneReport {
        match name {
            PaneName::Main => &self.main,
            PaneName::Left => &self.left,
            PaneName::Right => &self.right,
        }
    }

    fn pane_mut(&mut self, name: PaneName) -> &mut PaneReport {
        match name {
            PaneName::Main => &mut self.main,
            PaneName::Left => &mut self.left,
            PaneName::Right => &mut self.right,
        }
    }

    pub fn tabs_removed(&self) -> usize {
        PaneName::ORDER.iter().map(|&n| self.pane(n).tabs_removed).sum()
    }

    pub fn queries_redacted(&self) -> usize {
        PaneName::ORDER.iter().map(|&n| self.pane(n).queries_redacted).sum()
    }

    pub fn active_changed(&self) -> bool {
        self.active_before != self.active_after
    }

    /// True when censoring found nothing to remove or redact.
    pub fn is_clean(&self) -> bool {
        self.tabs_removed() == 0 && self.queries_redacted() == 0 && self.recent_files_dropped == 0
    }
}

/// The censored document together with its report.
#[derive(Debug, Clone)]
pub struct CensorOutcome {
    pub workspace: Workspace,
    pub report: CensorReport,
}

/// A compiled censor, reusable across documents.
#[derive(Debug, Clone)]
pub struct Censor {
    rules: CompiledRules,
    id_bytes: usize,
}

impl Censor {
    pub fn new(config: &CensorConfig) -> Result<Self, CensorError> {
        if !crate::config::ID_BYTES_RANGE.contains(&config.id_bytes) {
            return Err(CensorError::Config(format!(
                "id_bytes must be within {:?}, got {}",
                crate::config::ID_BYTES_RANGE,
                config.id_bytes
            )));
        }
        Ok(Self {
            rules: compile_rules(config)?,
            id_bytes: config.id_bytes,
        })
    }

    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }

    /// Censors `workspace` using random identifiers for regenerated nodes.
    pub fn censor(&self, workspace: Workspace) -> Result<CensorOutcome, CensorError> {
        let mut ids = RandomHexIds::new(self.id_bytes);
        self.censor_with_ids(workspace, &mut ids)
    }

    /// Censors `workspace`, drawing regenerated identifiers from `ids`.
    ///
    /// The input is consumed; on error no document is returned.
    pub fn censor_with_ids(
        &self,
        mut workspace: Workspace,
        ids: &mut dyn IdSource,
    ) -> Result<CensorOutcome, CensorError> {
        let original_active = workspace.active.clone();
        let mut report = CensorReport {
            active_before: original_active.clone(),
            ..CensorReport::default()
        };

        let before = workspace.last_open_files.len();
        workspace
            .last_open_files
            .retain(|path| !self.rules.path_is_banned(path));
        report.recent_files_dropped = before - workspace.last_open_files.len();

        let mut resolved = ActiveUpdate::Unchanged;
        for name in PaneName::ORDER {
            let pane_report = report.pane_mut(name);
            for (idx, split) in workspace.pane_mut(name).children.iter_mut().enumerate() {
                let primary = name == PaneName::Main && idx == 0;
                let update = self.visit_split(split, &original_active, primary, ids, pane_report)?;
                accumulate(&mut resolved, update, name, &split.id);
            }
        }

        match resolved {
            ActiveUpdate::Unchanged => {}
            ActiveUpdate::Reassign(id) => workspace.active = id,
            ActiveUpdate::Fallback => {
                let id = workspace
                    .main
                    .children
                    .first()
                    .and_then(Split::selected_tab_id)
                    .ok_or(CensorError::MissingPrimarySplit)?;
                debug!("Active tab's split was emptied; focusing main tab '{}'.", id);
                workspace.active = id.to_string();
            }
        }
        report.active_after = workspace.active.clone();

        info!(
            "Censored workspace: {} tabs removed, {} queries redacted, {} recent files dropped.",
            report.tabs_removed(),
            report.queries_redacted(),
            report.recent_files_dropped
        );

        Ok(CensorOutcome { workspace, report })
    }

    fn visit_split(
        &self,
        split: &mut Split,
        active_id: &str,
        primary: bool,
        ids: &mut dyn IdSource,
        report: &mut PaneReport,
    ) -> Result<ActiveUpdate, CensorError> {
        let plan = plan_split(split, active_id, &self.rules)?;
        let repair = repair_split(split, &plan)?;
        report.tabs_removed += repair.removed;
        report.queries_redacted += plan.redacted;

        if primary && regenerate_if_empty(split, ids) {
            report.splits_regenerated += 1;
        }

        Ok(resolve_active(split, &repair))
    }
}

/// Keeps the first non-`Unchanged` update of the traversal.
fn accumulate(resolved: &mut ActiveUpdate, update: ActiveUpdate, pane: PaneName, split_id: &str) {
    if update == ActiveUpdate::Unchanged {
        return;
    }
    if *resolved == ActiveUpdate::Unchanged {
        *resolved = update;
    } else {
        warn!(
            "Active tab also found in {} split '{}'; keeping the first match ({}).",
            pane,
            split_id,
            match &*resolved {
                ActiveUpdate::Reassign(id) => loggable(id).into_owned(),
                _ => "fallback".to_string(),
            }
        );
    }
}

/// Censors `workspace` with the given ban lists.
///
/// The one-call form of [`Censor`]: compiles the patterns, censors, and drops
/// the report.
pub fn censor(
    workspace: Workspace,
    file_patterns: &[String],
    banned_words: &[String],
) -> Result<Workspace, CensorError> {
    let config = CensorConfig::new(file_patterns.to_vec(), banned_words.to_vec());
    Censor::new(&config)?
        .censor(workspace)
        .map(|outcome| outcome.workspace)
}
