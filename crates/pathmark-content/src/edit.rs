//! Edit types for content modification.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Insert new content at a zero-width span.
    Insert,
    /// Replace existing content.
    Replace,
}

/// An edit operation on document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Byte range in the source the edit applies to.
    pub span: Range<usize>,
    /// Content currently at `span`.
    pub old_content: String,
    /// Content that replaces `span`.
    pub new_content: String,
}

impl Edit {
    pub fn insert(offset: usize, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            span: offset..offset,
            old_content: String::new(),
            new_content: content.into(),
        }
    }

    pub fn replace(source: &str, span: Range<usize>, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Replace,
            old_content: source[span.clone()].to_string(),
            span,
            new_content: content.into(),
        }
    }

    /// Apply this edit to `source`.
    pub fn apply(&self, source: &str) -> String {
        let mut result =
            String::with_capacity(source.len() - self.span.len() + self.new_content.len());
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.new_content);
        result.push_str(&source[self.span.end..]);
        result
    }

    /// Apply a batch of edits computed against the same `source`.
    ///
    /// Spans are interpreted against the original text, so the batch is
    /// applied back to front. Insertions sharing an offset land in the order
    /// they were given. Overlapping spans are rejected.
    pub fn apply_all(source: &str, edits: &[Edit]) -> Result<String> {
        let mut ordered: Vec<&Edit> = edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

        for pair in ordered.windows(2) {
            if pair[1].span.start < pair[0].span.end {
                return Err(Error::OverlappingEdits(pair[1].span.clone()));
            }
        }

        let mut result = source.to_string();
        for edit in ordered.iter().rev() {
            result.replace_range(edit.span.clone(), &edit.new_content);
        }
        Ok(result)
    }
}
