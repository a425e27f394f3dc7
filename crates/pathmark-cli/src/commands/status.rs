//! Status command implementation

use std::path::Path;

use colored::Colorize;
use pathmark_core::Workspace;

use crate::error::Result;

/// Print the status item, or nothing when the status bar is disabled.
pub fn run_status(workspace: &Workspace, file: &Path, json: bool) -> Result<()> {
    let Some(item) = workspace.status_item(file)? else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}", item.text);
        println!("{}: {}", "Tooltip".dimmed(), item.tooltip);
        println!("{}: pathmark {}", "Click".dimmed(), item.command.cyan());
    }
    Ok(())
}
