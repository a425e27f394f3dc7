use std::path::Path;

use crate::resolve::ResolvedPath;
use crate::{Result, Workspace};

impl Workspace {
    /// The file's location relative to its root, never root-name prefixed.
    ///
    /// Backs the snippet value: callers print [`ResolvedPath::path_text`].
    pub fn relative_path(&self, file: &Path) -> Result<ResolvedPath> {
        Ok(self.open(file)?.path)
    }

    /// Text placed on the clipboard, root-name prefixed per settings.
    pub fn copy_text(&self, file: &Path) -> Result<String> {
        Ok(self.open(file)?.path_text())
    }
}
