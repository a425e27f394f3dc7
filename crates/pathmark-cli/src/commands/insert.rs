//! Insert command implementation

use std::path::Path;

use colored::Colorize;
use pathmark_content::Position;
use pathmark_core::Workspace;

use crate::error::Result;

/// Insert the path text at every cursor.
pub fn run_insert(
    workspace: &Workspace,
    file: &Path,
    cursors: &[Position],
    dry_run: bool,
) -> Result<()> {
    let outcome = workspace.insert_at_cursors(file, cursors, dry_run)?;

    if let Some(diff) = outcome.diff {
        print!("{diff}");
        return Ok(());
    }

    println!(
        "{} {} at {} position(s)",
        "Inserted".green(),
        outcome.text.cyan(),
        outcome.inserted
    );
    Ok(())
}
