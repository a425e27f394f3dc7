//! Settings model

use std::path::{Path, PathBuf};

use pathmark_content::header::DEFAULT_LABEL;
use serde::{Deserialize, Serialize};

/// Effective settings after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Header tag text
    pub label: String,

    /// Synchronize the header on open and save events
    pub auto_insert_on_open: bool,

    /// Prefix paths with the project root's name
    pub include_workspace_folder: bool,

    pub status_bar: StatusBarSettings,

    /// Explicit project roots; empty means discover roots from markers
    pub roots: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            auto_insert_on_open: false,
            include_workspace_folder: false,
            status_bar: StatusBarSettings::default(),
            roots: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusBarSettings {
    pub enabled: bool,
}

impl Default for StatusBarSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Settings {
    /// The label to render, never blank.
    pub fn effective_label(&self) -> &str {
        match self.label.trim() {
            "" => DEFAULT_LABEL,
            trimmed => trimmed,
        }
    }

    /// Overlay the values present in `layer`.
    pub fn apply(&mut self, layer: &SettingsLayer) {
        if let Some(label) = &layer.label {
            self.label = label.clone();
        }
        if let Some(auto) = layer.auto_insert_on_open {
            self.auto_insert_on_open = auto;
        }
        if let Some(include) = layer.include_workspace_folder {
            self.include_workspace_folder = include;
        }
        if let Some(enabled) = layer.status_bar.as_ref().and_then(|bar| bar.enabled) {
            self.status_bar.enabled = enabled;
        }
        if let Some(roots) = &layer.roots {
            self.roots = roots.clone();
        }
    }
}

/// One source of settings. Absent keys leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_insert_on_open: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_workspace_folder: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar: Option<StatusBarLayer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roots: Option<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBarLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl SettingsLayer {
    /// Resolve relative root entries against `base`.
    pub fn anchor_roots(&mut self, base: &Path) {
        if let Some(roots) = &mut self.roots {
            for root in roots.iter_mut() {
                if root.is_relative() {
                    *root = base.join(&*root);
                }
            }
        }
    }
}
