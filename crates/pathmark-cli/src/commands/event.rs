//! Event command implementation

use std::path::Path;

use colored::Colorize;
use pathmark_core::{HeaderAction, HostEvent, Workspace};

use crate::cli::EventKind;

impl From<EventKind> for HostEvent {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Open => HostEvent::Open,
            EventKind::Save => HostEvent::Save,
        }
    }
}

/// Handle an editor event. Prints only when the header changed.
pub fn run_event(workspace: &Workspace, kind: EventKind, file: &Path) {
    let Some(outcome) = workspace.on_event(kind.into(), file) else {
        return;
    };
    if outcome.action != HeaderAction::Unchanged {
        println!("{} {}", outcome.action.to_string().green(), outcome.file);
    }
}
