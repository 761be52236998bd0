//! The layout tree of an Obsidian `workspace.json`.
//!
//! Only the fields the censoring traversal reads or rewrites are typed. Everything
//! else is captured in `extra` maps and written back untouched. Fields are declared
//! in the order Obsidian writes them so that, with `serde_json`'s `preserve_order`,
//! an untouched document serializes back to the same text.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CensorError;

/// View type of a saved search tab.
pub const SEARCH_VIEW: &str = "search";
/// View type of a tab with nothing opened in it.
pub const EMPTY_VIEW: &str = "empty";
/// Node type Obsidian uses for tabs.
pub const LEAF_NODE: &str = "leaf";

/// The whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub main: Pane,
    pub left: Pane,
    pub right: Pane,
    /// Keys such as `left-ribbon` that the censor never touches.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Identifier of the focused tab, anywhere in the document.
    pub active: String,
    #[serde(rename = "lastOpenFiles")]
    pub last_open_files: Vec<String>,
}

/// Names of the three panes, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneName {
    Main,
    Left,
    Right,
}

impl PaneName {
    /// Main first, so sidebar fallbacks see the repaired main area.
    pub const ORDER: [PaneName; 3] = [PaneName::Main, PaneName::Left, PaneName::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            PaneName::Main => "main",
            PaneName::Left => "left",
            PaneName::Right => "right",
        }
    }
}

impl std::fmt::Display for PaneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Workspace {
    pub fn pane(&self, name: PaneName) -> &Pane {
        match name {
            PaneName::Main => &self.main,
            PaneName::Left => &self.left,
            PaneName::Right => &self.right,
        }
    }

    pub fn pane_mut(&mut self, name: PaneName) -> &mut Pane {
        match name {
            PaneName::Main => &mut self.main,
            PaneName::Left => &mut self.left,
            PaneName::Right => &mut self.right,
        }
    }

    /// Every tab in the document, in traversal order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> + '_ {
        PaneName::ORDER
            .into_iter()
            .flat_map(move |name| self.pane(name).children.iter())
            .flat_map(|split| split.children.iter())
    }
}

/// One of the three top-level regions. More than one child split means a
/// vertical side-by-side arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub children: Vec<Split>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ordered group of tabs with its own selection pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub children: Vec<Tab>,
    /// Absent means 0. Obsidian never writes a literal 0.
    #[serde(rename = "currentTab", default, skip_serializing_if = "Option::is_none")]
    pub current_tab: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Split {
    pub fn selected_index(&self) -> usize {
        self.current_tab.unwrap_or(0)
    }

    /// Stores `index`, omitting the field when it is 0.
    pub fn set_selected_index(&mut self, index: usize) {
        self.current_tab = (index > 0).then_some(index);
    }

    /// Identifier of the tab `currentTab` points at, if it points at one.
    pub fn selected_tab_id(&self) -> Option<&str> {
        self.children
            .get(self.selected_index())
            .map(|tab| tab.id.as_str())
    }
}

/// A leaf node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub state: ViewState,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The raw view object stored under a tab's `state` key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Map<String, Value>>,
    /// `icon`, `title` and anything else the view carries.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The classification of a tab's view state that the censor acts on.
///
/// Borrowed from the underlying [`ViewState`], so a redacted query is written
/// straight back into the document.
#[derive(Debug, PartialEq, Eq)]
pub enum TabState<'a> {
    Search { query: &'a mut String },
    File { path: &'a str },
    Empty,
    Other,
}

impl Tab {
    /// A fresh "New tab" placeholder, as Obsidian creates when the last tab of
    /// the main area is closed.
    pub fn placeholder(id: String) -> Self {
        let mut extra = Map::new();
        extra.insert("icon".to_string(), Value::from("lucide-file"));
        extra.insert("title".to_string(), Value::from("New tab"));

        Self {
            id,
            kind: Some(LEAF_NODE.to_string()),
            state: ViewState {
                view_type: EMPTY_VIEW.to_string(),
                state: Some(Map::new()),
                extra,
            },
            extra: Map::new(),
        }
    }

    /// Classifies the view state.
    ///
    /// A `search` view is `Search` regardless of other keys. Any other view
    /// carrying a `file` entry (markdown, backlink, outline...) is `File`.
    pub fn state_mut(&mut self) -> Result<TabState<'_>, CensorError> {
        let view = &mut self.state;

        if view.view_type == SEARCH_VIEW {
            return match view.state.as_mut().and_then(|s| s.get_mut("query")) {
                Some(Value::String(query)) => Ok(TabState::Search { query }),
                _ => Err(malformed(&self.id, "search view without a string `query`")),
            };
        }

        match view.state.as_ref().and_then(|s| s.get("file")) {
            Some(Value::String(path)) => return Ok(TabState::File { path }),
            Some(_) => return Err(malformed(&self.id, "`file` entry is not a string")),
            None => {}
        }

        if view.view_type == EMPTY_VIEW {
            Ok(TabState::Empty)
        } else {
            Ok(TabState::Other)
        }
    }
}

fn malformed(tab_id: &str, reason: &str) -> CensorError {
    CensorError::MalformedTabState {
        tab_id: tab_id.to_string(),
        reason: reason.to_string(),
    }
}
