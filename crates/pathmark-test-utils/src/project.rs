//! [`TestProject`] builder for pathmark test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::marker;

/// A temporary directory holding a project tree.
///
/// The project directory is a child of the temp dir so tests can also
/// place files *outside* any project root.
///
/// # Example
///
/// ```rust,no_run
/// use pathmark_test_utils::TestProject;
///
/// let project = TestProject::with_git("my-app");
/// let file = project.write("src/app.py", "print('hi')\n");
/// assert!(file.exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    /// Create an empty project directory named `name` with no marker.
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let base = dunce::canonicalize(temp_dir.path()).unwrap();
        let root = base.join(name);
        fs::create_dir_all(&root).unwrap();
        Self { temp_dir, root }
    }

    /// Create a project directory carrying a fake `.git` marker.
    pub fn with_git(name: &str) -> Self {
        let project = Self::new(name);
        marker::fake_git_dir(&project.root);
        project
    }

    /// Canonical project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical temp directory that contains the project.
    pub fn outside(&self) -> PathBuf {
        dunce::canonicalize(self.temp_dir.path()).unwrap()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the project root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join(relative))
            .unwrap_or_else(|e| panic!("TestProject::read: {relative}: {e}"))
    }

    /// Write `.pathmark.toml` at the project root.
    pub fn settings(&self, toml: &str) {
        marker::settings_file(&self.root, toml);
    }
}
