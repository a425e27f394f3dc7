//! Header command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use pathmark_core::{HeaderAction, HeaderOutcome, Workspace};

use crate::error::{CliError, Result};

/// Synchronize the header of every file and report each outcome.
///
/// With several files every one is attempted; failures are reported per
/// file and the command fails at the end if any occurred.
pub fn run_header(
    workspace: &Workspace,
    files: &[PathBuf],
    language: Option<&str>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let mut outcomes = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for file in files {
        match workspace.sync_header(file, language, dry_run) {
            Ok(outcome) => {
                if !json {
                    print_outcome(&outcome, dry_run);
                }
                outcomes.push(outcome);
            }
            Err(e) if files.len() == 1 => return Err(e.into()),
            Err(e) => {
                failed += 1;
                report_failure(file, &e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    match failed {
        0 => Ok(()),
        n => Err(CliError::user(format!("{n} of {} files failed", files.len()))),
    }
}

fn print_outcome(outcome: &HeaderOutcome, dry_run: bool) {
    if let Some(diff) = &outcome.diff {
        print!("{diff}");
        return;
    }

    let action = match outcome.action {
        HeaderAction::Inserted => outcome.action.to_string().green(),
        HeaderAction::Updated => outcome.action.to_string().yellow(),
        HeaderAction::Unchanged => outcome.action.to_string().dimmed(),
    };
    let suffix = if dry_run { " (dry run)" } else { "" };
    println!("{action} {} -> {}{suffix}", outcome.file, outcome.path.cyan());
}

fn report_failure(file: &Path, error: &pathmark_core::Error) {
    eprintln!("{}: {}: {}", "error".red().bold(), file.display(), error);
}
