//! Path command implementation

use std::path::Path;

use pathmark_core::Workspace;

use crate::error::Result;

/// Print the file's relative path, or its absolute path outside any root.
pub fn run_path(workspace: &Workspace, file: &Path, json: bool) -> Result<()> {
    let resolved = workspace.relative_path(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&resolved.report())?);
    } else {
        println!("{}", resolved.path_text());
    }
    Ok(())
}
