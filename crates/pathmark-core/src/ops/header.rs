use std::fmt;
use std::path::Path;

use pathmark_content::diff::unified_diff;
use pathmark_content::{Document, EditDecision, synchronize};
use pathmark_fs::io;
use serde::Serialize;

use crate::workspace::ActiveFile;
use crate::{Result, Workspace};

/// What header synchronization did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
    Inserted,
    Updated,
    Unchanged,
}

impl fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderOutcome {
    /// The file as it was named by the caller
    pub file: String,
    pub action: HeaderAction,
    /// Path recorded in the header
    pub path: String,
    /// Unified diff, only for dry runs that change something
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl Workspace {
    /// Insert or update the path header of `file`.
    ///
    /// `language` overrides file-type detection. A dry run computes the
    /// change and its diff without writing.
    pub fn sync_header(
        &self,
        file: &Path,
        language: Option<&str>,
        dry_run: bool,
    ) -> Result<HeaderOutcome> {
        let active = self.open(file)?;
        self.sync_active(&active, file, language, dry_run)
    }

    pub(crate) fn sync_active(
        &self,
        active: &ActiveFile,
        file: &Path,
        language: Option<&str>,
        dry_run: bool,
    ) -> Result<HeaderOutcome> {
        let file_type = active.file_type(language);
        let spec = active.header_spec(&file_type);

        let source = io::read_text(&active.path.absolute)?;
        let document = Document::new(source, file_type);
        let decision = synchronize(&document, &spec)?;

        let action = match decision {
            EditDecision::NoOp => HeaderAction::Unchanged,
            EditDecision::InsertAt { .. } => HeaderAction::Inserted,
            EditDecision::ReplaceRange { .. } => HeaderAction::Updated,
        };

        let mut diff = None;
        if let Some(edit) = decision.to_edit(&document) {
            let updated = edit.apply(document.text());
            if dry_run {
                diff = Some(unified_diff(document.text(), &updated, &active.path.path_text()));
            } else {
                let content = document.to_source(&updated);
                io::write_atomic(&active.path.absolute, content.as_bytes(), self.robustness())?;
            }
        }

        tracing::debug!(file = %active.path.absolute, %action, dry_run, "header synchronized");

        Ok(HeaderOutcome {
            file: file.display().to_string(),
            action,
            path: spec.relative_path().to_string(),
            diff,
        })
    }
}
