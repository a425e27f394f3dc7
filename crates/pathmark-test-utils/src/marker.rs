//! Project marker fixtures.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory **without** initialising a real git
/// repository. Enough to satisfy project-root discovery.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Writes a `.pathmark.toml` settings file, which also marks the directory
/// as a project root.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn settings_file(path: &Path, toml: &str) {
    fs::write(path.join(".pathmark.toml"), toml)
        .unwrap_or_else(|e| panic!("settings_file: failed to write .pathmark.toml: {e}"));
}
