//! Layered settings resolution

use std::path::{Path, PathBuf};

use pathmark_fs::{ConfigStore, NormalizedPath, ProjectMarker, ProjectRoot};

use super::settings::{Settings, SettingsLayer};
use crate::Result;

/// Resolves [`Settings`] by merging every configured source.
///
/// Project-layer `roots` are ignored: the project layer is located through
/// the root, so it cannot also choose it.
#[derive(Debug, Clone, Default)]
pub struct SettingsResolver {
    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()/pathmark` is used.
    global_config_dir_override: Option<PathBuf>,

    /// File given with `--config`
    explicit_file: Option<PathBuf>,

    /// Values given on the command line
    overrides: SettingsLayer,

    store: ConfigStore,
}

impl SettingsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom global config directory instead of the platform one.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Add an explicit settings file. It must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Command-line values, applied last.
    pub fn with_overrides(mut self, overrides: SettingsLayer) -> Self {
        self.overrides = overrides;
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("pathmark"))
    }

    /// Settings without the project layer. Decides which roots exist.
    pub fn base(&self) -> Result<Settings> {
        self.resolve(None)
    }

    /// Merge global, project (when `root` is known), explicit and override
    /// layers in that order.
    pub fn resolve(&self, root: Option<&ProjectRoot>) -> Result<Settings> {
        let mut settings = Settings::default();

        // Layer 1 - Global (<config_dir>/pathmark/config.toml)
        if let Some(global_dir) = self.global_config_dir() {
            let global_path = global_dir.join("config.toml");
            if global_path.is_file() {
                tracing::debug!(?global_path, "Loading global settings (layer 1)");
                settings.apply(&self.load_layer(&global_path)?);
            } else {
                tracing::debug!(?global_path, "No global settings found (layer 1), skipping");
            }
        }

        // Layer 2 - Project settings file at the root
        if let Some(root) = root {
            match project_settings_file(root) {
                Some(project_path) => {
                    tracing::debug!(?project_path, "Loading project settings (layer 2)");
                    let mut layer = self.load_layer(&project_path)?;
                    if layer.roots.take().is_some() {
                        tracing::warn!(?project_path, "`roots` is ignored in project settings");
                    }
                    settings.apply(&layer);
                }
                None => tracing::debug!(root = %root.path, "No project settings (layer 2)"),
            }
        }

        // Layer 3 - Explicit --config file
        if let Some(explicit_path) = &self.explicit_file {
            tracing::debug!(?explicit_path, "Loading explicit settings (layer 3)");
            settings.apply(&self.load_layer(explicit_path)?);
        }

        // Layer 4 - Command-line overrides
        settings.apply(&self.overrides);

        Ok(settings)
    }

    fn load_layer(&self, path: &Path) -> Result<SettingsLayer> {
        let mut layer: SettingsLayer = self.store.load(&NormalizedPath::new(path))?;
        if let Some(dir) = path.parent() {
            layer.anchor_roots(dir);
        }
        Ok(layer)
    }
}

/// First settings file present at `root`, in marker precedence order.
fn project_settings_file(root: &ProjectRoot) -> Option<PathBuf> {
    let dir = root.path.to_native();
    ProjectMarker::SETTINGS
        .iter()
        .find(|marker| marker.is_present_in(&dir))
        .map(|marker| dir.join(marker.as_str()))
}
