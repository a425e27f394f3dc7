#![allow(dead_code)]

use pathmark_core::{SettingsLayer, SettingsResolver, Workspace};
use pathmark_test_utils::TestProject;

/// Workspace rooted at the project's temp dir with no real global settings.
pub fn workspace(project: &TestProject) -> Workspace {
    workspace_with(project, SettingsLayer::default())
}

pub fn workspace_with(project: &TestProject, overrides: SettingsLayer) -> Workspace {
    let resolver = SettingsResolver::new()
        .with_global_config_dir(project.outside().join("global-config"))
        .with_overrides(overrides);
    Workspace::new(project.root(), resolver)
}
