//! Regeneration of the primary split when censoring leaves it empty.
//!
//! Obsidian never leaves the main editor area without a tab: closing the last
//! one gives a fresh split holding a single "New tab". The censor reproduces
//! that so the rewritten layout matches what the editor would have saved.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use rand::RngCore;

use crate::config::DEFAULT_ID_BYTES;
use crate::model::{Split, Tab};

/// Supplies identifiers for regenerated nodes.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Hex-encoded random identifiers drawn from the thread-local CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomHexIds {
    bytes: usize,
}

impl RandomHexIds {
    /// `bytes` random bytes per identifier, i.e. `2 * bytes` hex characters.
    pub fn new(bytes: usize) -> Self {
        Self { bytes }
    }
}

impl Default for RandomHexIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_BYTES)
    }
}

impl IdSource for RandomHexIds {
    fn next_id(&mut self) -> String {
        let mut buf = vec![0u8; self.bytes];
        rand::rng().fill_bytes(&mut buf);
        hex::encode(buf)
    }
}

/// Refills `split` with a placeholder tab if it has no children left.
///
/// The split gets a new identifier, its only child is a fresh empty tab, and its
/// selection pointer is cleared. Returns whether anything was regenerated.
pub fn regenerate_if_empty(split: &mut Split, ids: &mut dyn IdSource) -> bool {
    if !split.children.is_empty() {
        return false;
    }

    let old_id = std::mem::replace(&mut split.id, ids.next_id());
    split.children.push(Tab::placeholder(ids.next_id()));
    split.current_tab = None;

    debug!(
        "Regenerated emptied primary split '{}' as '{}' with placeholder tab '{}'.",
        old_id, split.id, split.children[0].id
    );
    true
}
