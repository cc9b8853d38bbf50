//! The data side of the menu: which tiles exist, what artwork they carry and
//! what unfolds above each one.

use crate::menu::ChildKind;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// A whole menu, in display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuManifest {
    pub entries: Vec<EntryDef>,
    /// Optional image drawn on the backdrop plane behind the tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryDef {
    pub name: String,
    /// Icon composited onto the tile artwork; a plain tile without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildDef>,
}

/// A sub-entry is either an icon tile or a text strip; the variant decides
/// the parent's layout rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChildDef {
    Icon { source: String },
    Text { label: String },
}

impl ChildDef {
    pub fn kind(&self) -> ChildKind {
        match self {
            ChildDef::Icon { .. } => ChildKind::Icon,
            ChildDef::Text { .. } => ChildKind::Text,
        }
    }

    /// Display name: the label, or the icon source for icon children.
    pub fn name(&self) -> &str {
        match self {
            ChildDef::Icon { source } => source,
            ChildDef::Text { label } => label,
        }
    }
}

impl MenuManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("failed to read menu manifest {path:?}: {e}"))?;
        Ok(Self::from_json(&json)?)
    }

    /// The built-in seven-tile launcher menu, usable without any manifest
    /// file on disk.
    pub fn demo() -> Self {
        let text = |label: &str| ChildDef::Text {
            label: label.to_string(),
        };
        let icon = |source: &str| ChildDef::Icon {
            source: format!("assets/icons/{source}.png"),
        };
        let entry = |name: &str, icon_name: &str, children: Vec<ChildDef>| EntryDef {
            name: name.to_string(),
            icon: Some(format!("assets/icons/{icon_name}.png")),
            children,
        };

        MenuManifest {
            entries: vec![
                entry("SETTINGS", "settings", vec![]),
                entry(
                    "APPS",
                    "apps",
                    vec![
                        icon("netflix"),
                        icon("youtube"),
                        icon("facebook"),
                        icon("twitter"),
                    ],
                ),
                entry(
                    "PROFILES",
                    "home",
                    vec![text("FAMILY"), text("GUEST"), text("OPTIONS")],
                ),
                entry("LIVE TV", "live_tv", vec![text("GUIDE"), text("WHAT'S ON")]),
                entry(
                    "RECORDINGS",
                    "recorded",
                    vec![text("RECENT"), text("SETUP")],
                ),
                entry(
                    "ON DEMAND",
                    "on_demand",
                    vec![text("POPULAR"), text("FAVORITES")],
                ),
                entry(
                    "SEARCH",
                    "search",
                    vec![
                        text("MOVIES"),
                        text("SERIES"),
                        text("CHANNELS"),
                        text("CLEAR RECENT"),
                    ],
                ),
            ],
            backdrop: Some("assets/backdrop.png".to_string()),
        }
    }
}
