//! Relative path resolution
//!
//! Maps a file to the text pathmark shows for it: the path below its
//! project root, or the absolute path when no root contains it.

use pathmark_fs::{NormalizedPath, ProjectRoot, ProjectRoots};
use serde::Serialize;

/// Where a file sits relative to the known project roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute, canonical file location
    pub absolute: NormalizedPath,
    /// Root containing the file, if any
    pub root: Option<ProjectRoot>,
    /// Path below `root`, forward-slash separated
    pub relative: Option<NormalizedPath>,
}

impl ResolvedPath {
    pub fn resolve(absolute: NormalizedPath, roots: &ProjectRoots) -> Self {
        let root = roots.root_for(&absolute);
        let relative = root.as_ref().and_then(|root| root.relative(&absolute));
        if relative.is_none() {
            tracing::debug!(file = %absolute, "no project root, using absolute path");
        }
        Self {
            absolute,
            root,
            relative,
        }
    }

    /// Relative path, or the native absolute path as fallback.
    pub fn path_text(&self) -> String {
        match &self.relative {
            Some(relative) => relative.as_str().to_string(),
            None => self.absolute.to_native().to_string_lossy().into_owned(),
        }
    }

    /// [`Self::path_text`], prefixed with `<root name>/` when requested and
    /// a root is known.
    pub fn display_text(&self, include_root_name: bool) -> String {
        match (&self.root, &self.relative) {
            (Some(root), Some(relative)) if include_root_name => {
                format!("{}/{}", root.name, relative)
            }
            _ => self.path_text(),
        }
    }

    /// Machine-readable form for `--json` output.
    pub fn report(&self) -> PathReport {
        PathReport {
            path: self.path_text(),
            root: self
                .root
                .as_ref()
                .map(|root| root.path.to_native().to_string_lossy().into_owned()),
            relative: self.relative.as_ref().map(|r| r.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub path: String,
    pub root: Option<String>,
    pub relative: Option<String>,
}
