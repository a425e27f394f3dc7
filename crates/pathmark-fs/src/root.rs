//! Project root resolution
//!
//! A file's project root is either one of the explicitly configured roots
//! (the deepest one containing the file, like nested workspace folders) or,
//! when none are configured, the nearest ancestor directory carrying a
//! [`ProjectMarker`].

use std::path::Path;

use crate::{NormalizedPath, ProjectMarker};

/// A directory treated as the base for relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    /// Absolute, canonical location of the root
    pub path: NormalizedPath,
    /// Display name, the root directory's own name
    pub name: String,
}

impl ProjectRoot {
    pub fn new(path: NormalizedPath) -> Self {
        let name = path
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| path.as_str().to_string());
        Self { path, name }
    }

    /// Path of `file` below this root, if the root contains it.
    pub fn relative(&self, file: &NormalizedPath) -> Option<NormalizedPath> {
        file.relative_to(&self.path)
    }
}

/// The set of roots a host knows about.
#[derive(Debug, Clone, Default)]
pub struct ProjectRoots {
    explicit: Vec<ProjectRoot>,
}

impl ProjectRoots {
    /// Roots discovered from markers only.
    pub fn discover() -> Self {
        Self::default()
    }

    /// Use the given directories as the only roots. Relative entries are
    /// resolved against `cwd`.
    pub fn explicit<I, P>(roots: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let explicit = roots
            .into_iter()
            .map(|root| ProjectRoot::new(absolutize(root.as_ref(), cwd)))
            .collect();
        Self { explicit }
    }

    pub fn is_explicit(&self) -> bool {
        !self.explicit.is_empty()
    }

    /// Find the root for an absolute, normalized file path.
    pub fn root_for(&self, file: &NormalizedPath) -> Option<ProjectRoot> {
        if self.is_explicit() {
            return self
                .explicit
                .iter()
                .filter(|root| file.starts_with(&root.path) && file != &root.path)
                .max_by_key(|root| root.path.depth())
                .cloned();
        }
        find_marked_ancestor(file)
    }
}

/// Walk up from the file's directory looking for a project marker.
fn find_marked_ancestor(file: &NormalizedPath) -> Option<ProjectRoot> {
    let mut current = file.parent();
    while let Some(dir) = current {
        let native = dir.to_native();
        if let Some(marker) = ProjectMarker::ALL
            .iter()
            .find(|marker| marker.is_present_in(&native))
        {
            tracing::debug!(root = %dir, %marker, "found project root");
            return Some(ProjectRoot::new(dir));
        }
        current = dir.parent();
    }
    tracing::debug!(file = %file, "no project root above file");
    None
}

/// Make `path` absolute and canonical.
///
/// Existing paths are canonicalized with `dunce` so symlinked directories
/// compare equal to their targets. For a path that does not exist yet the
/// nearest existing ancestor is canonicalized and the rest appended
/// lexically.
pub fn absolutize(path: &Path, cwd: &Path) -> NormalizedPath {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let lexical = NormalizedPath::new(&joined);

    if let Ok(canonical) = dunce::canonicalize(lexical.to_native()) {
        return NormalizedPath::new(canonical);
    }

    let mut missing: Vec<String> = Vec::new();
    let mut current = Some(lexical.clone());
    while let Some(dir) = current {
        if let Ok(canonical) = dunce::canonicalize(dir.to_native()) {
            let mut resolved = NormalizedPath::new(canonical);
            for segment in missing.iter().rev() {
                resolved = resolved.join(segment);
            }
            return resolved;
        }
        if let Some(name) = dir.file_name() {
            missing.push(name.to_string());
        }
        current = dir.parent();
    }
    lexical
}
