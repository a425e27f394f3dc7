use std::path::Path;

use pathmark_content::diff::unified_diff;
use pathmark_content::{Document, Edit, Position};
use pathmark_fs::io;

use crate::{Result, Workspace};

/// Result of inserting the path text at cursor positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The text inserted at each cursor
    pub text: String,
    /// Number of insertions
    pub inserted: usize,
    /// Unified diff, only for dry runs
    pub diff: Option<String>,
}

impl Workspace {
    /// Insert the path text at every cursor as one atomic write.
    ///
    /// Cursors are zero-based and clamp to the document. Cursors sharing a
    /// position receive their insertions in the given order.
    pub fn insert_at_cursors(
        &self,
        file: &Path,
        cursors: &[Position],
        dry_run: bool,
    ) -> Result<InsertOutcome> {
        let active = self.open(file)?;
        let text = active.path_text();

        let source = io::read_text(&active.path.absolute)?;
        let document = Document::new(source, active.file_type(None));

        let edits: Vec<Edit> = cursors
            .iter()
            .map(|cursor| Edit::insert(document.offset_at(*cursor), text.clone()))
            .collect();
        let updated = Edit::apply_all(document.text(), &edits)?;

        let diff = if dry_run {
            Some(unified_diff(document.text(), &updated, &active.path.path_text()))
        } else {
            if !edits.is_empty() {
                let content = document.to_source(&updated);
                io::write_atomic(&active.path.absolute, content.as_bytes(), self.robustness())?;
            }
            None
        };

        tracing::debug!(file = %active.path.absolute, count = edits.len(), dry_run, "inserted path text");

        Ok(InsertOutcome {
            text,
            inserted: edits.len(),
            diff,
        })
    }
}
