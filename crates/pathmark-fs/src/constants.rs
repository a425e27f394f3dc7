//! Marker entries that identify a project root on disk.

use std::path::Path;

/// Filesystem entries whose presence marks a directory as a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMarker {
    /// The `.git` directory (or worktree `.git` file)
    Git,
    /// The `.hg` directory
    Mercurial,
    /// The `.svn` directory
    Subversion,
    /// A `.pathmark.toml` settings file
    SettingsToml,
    /// A `.pathmark.json` settings file
    SettingsJson,
    /// A `.pathmark.yaml` settings file
    SettingsYaml,
}

impl ProjectMarker {
    /// All markers, in the order they are checked.
    pub const ALL: [ProjectMarker; 6] = [
        Self::Git,
        Self::Mercurial,
        Self::Subversion,
        Self::SettingsToml,
        Self::SettingsJson,
        Self::SettingsYaml,
    ];

    /// Settings-file markers, in precedence order.
    pub const SETTINGS: [ProjectMarker; 3] =
        [Self::SettingsToml, Self::SettingsJson, Self::SettingsYaml];

    /// Get the string representation of the marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => ".git",
            Self::Mercurial => ".hg",
            Self::Subversion => ".svn",
            Self::SettingsToml => ".pathmark.toml",
            Self::SettingsJson => ".pathmark.json",
            Self::SettingsYaml => ".pathmark.yaml",
        }
    }

    /// Whether `dir` contains this marker.
    pub fn is_present_in(&self, dir: &Path) -> bool {
        dir.join(self.as_str()).exists()
    }
}

impl AsRef<Path> for ProjectMarker {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectMarker {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
