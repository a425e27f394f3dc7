use std::path::Path;

use serde::Serialize;

use crate::{Result, Workspace};

/// Command a status item click runs.
pub const STATUS_COMMAND: &str = "insert";

/// Status indicator for the current file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusItem {
    pub text: String,
    pub tooltip: String,
    pub command: &'static str,
}

impl Workspace {
    /// The status item for `file`, or `None` when the status bar is disabled.
    pub fn status_item(&self, file: &Path) -> Result<Option<StatusItem>> {
        let active = self.open(file)?;
        if !active.settings.status_bar.enabled {
            return Ok(None);
        }

        let text = active.path_text();
        Ok(Some(StatusItem {
            tooltip: format!(
                "{}: {} (click to insert at cursor)",
                active.settings.effective_label(),
                text
            ),
            text,
            command: STATUS_COMMAND,
        }))
    }
}
