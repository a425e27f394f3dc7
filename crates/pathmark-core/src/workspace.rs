//! The host context every operation runs in

use std::path::{Path, PathBuf};

use pathmark_content::{CommentStyle, HeaderSpec, file_type_for_path};
use pathmark_fs::{ProjectRoots, RobustnessConfig, absolutize};

use crate::Result;
use crate::config::{Settings, SettingsResolver};
use crate::resolve::ResolvedPath;

/// Working directory, settings sources and write behaviour shared by all
/// operations.
#[derive(Debug, Clone)]
pub struct Workspace {
    cwd: PathBuf,
    resolver: SettingsResolver,
    robustness: RobustnessConfig,
}

/// A file as one operation sees it: where it is and which settings apply.
#[derive(Debug, Clone)]
pub struct ActiveFile {
    pub path: ResolvedPath,
    pub settings: Settings,
}

impl Workspace {
    pub fn new(cwd: impl Into<PathBuf>, resolver: SettingsResolver) -> Self {
        Self {
            cwd: cwd.into(),
            resolver,
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub(crate) fn robustness(&self) -> RobustnessConfig {
        self.robustness
    }

    /// Resolve `file` against the roots and settings in effect.
    ///
    /// The file does not have to exist.
    pub fn open(&self, file: &Path) -> Result<ActiveFile> {
        let base = self.resolver.base()?;
        let roots = if base.roots.is_empty() {
            ProjectRoots::discover()
        } else {
            ProjectRoots::explicit(&base.roots, &self.cwd)
        };

        let path = ResolvedPath::resolve(absolutize(file, &self.cwd), &roots);
        let settings = self.resolver.resolve(path.root.as_ref())?;
        tracing::debug!(file = %path.absolute, root = ?path.root.as_ref().map(|r| &r.name), "opened file");

        Ok(ActiveFile { path, settings })
    }
}

impl ActiveFile {
    /// Path text with the root-name prefix applied per settings.
    pub fn path_text(&self) -> String {
        self.path.display_text(self.settings.include_workspace_folder)
    }

    /// `language` when given, else detected from the file name.
    pub fn file_type(&self, language: Option<&str>) -> String {
        match language {
            Some(language) => language.to_string(),
            None => file_type_for_path(self.path.absolute.as_str()).to_string(),
        }
    }

    /// The header this file should carry for `file_type`.
    pub fn header_spec(&self, file_type: &str) -> HeaderSpec {
        HeaderSpec::new(
            CommentStyle::resolve(file_type),
            self.settings.effective_label(),
            self.path_text(),
        )
    }
}
