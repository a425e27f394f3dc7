use std::path::Path;

use super::header::HeaderOutcome;
use crate::{Result, Workspace};

/// Editor events that may trigger header synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Open,
    Save,
}

impl Workspace {
    /// Handle an open or save event.
    ///
    /// Synchronizes the header when `autoInsertOnOpen` is set. Never fails:
    /// a missing file or any error yields `None` and a debug log line.
    pub fn on_event(&self, event: HostEvent, file: &Path) -> Option<HeaderOutcome> {
        match self.try_event(event, file) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(?event, file = %file.display(), error = %e, "event handling failed");
                None
            }
        }
    }

    fn try_event(&self, event: HostEvent, file: &Path) -> Result<Option<HeaderOutcome>> {
        if !self.cwd().join(file).is_file() {
            tracing::debug!(?event, file = %file.display(), "no document, ignoring event");
            return Ok(None);
        }

        let active = self.open(file)?;
        if !active.settings.auto_insert_on_open {
            tracing::debug!(?event, "autoInsertOnOpen disabled");
            return Ok(None);
        }

        self.sync_active(&active, file, None, false).map(Some)
    }
}
