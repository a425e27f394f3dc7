//! Copy command implementation

use std::path::Path;

use arboard::Clipboard;
use colored::Colorize;
use pathmark_core::Workspace;

use crate::error::Result;

/// Put the path text on the system clipboard.
pub fn run_copy(workspace: &Workspace, file: &Path) -> Result<()> {
    let text = workspace.copy_text(file)?;

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.clone())?;

    println!("{} {}", "Copied:".green(), text);
    Ok(())
}
