//! Builds the core workspace from global flags

use std::path::Path;

use pathmark_core::{SettingsLayer, SettingsResolver, Workspace};
use pathmark_fs::absolutize;

use crate::cli::Cli;

/// Workspace for `cwd` with the settings sources named on the command line.
pub fn workspace(cli: &Cli, cwd: &Path) -> Workspace {
    let roots = (!cli.roots.is_empty()).then(|| {
        cli.roots
            .iter()
            .map(|root| absolutize(root, cwd).to_native())
            .collect()
    });

    let overrides = SettingsLayer {
        label: cli.label.clone(),
        roots,
        ..Default::default()
    };

    let mut resolver = SettingsResolver::new().with_overrides(overrides);
    if let Some(config) = &cli.config {
        resolver = resolver.with_config_file(cwd.join(config));
    }

    Workspace::new(cwd, resolver)
}
