//! Path header synchronization
//!
//! A path header is a single comment line such as `# Path: src/app.py`
//! near the top of a file. [`synchronize`] compares a document against the
//! header it should carry and returns the smallest edit that makes it
//! correct: nothing, an insertion, or a replacement of the existing line.
//!
//! # Header slot
//!
//! The header lives in one well-defined line, the *slot*. Starting at line
//! 0, a shebang line is skipped, then blank lines, without leaving the scan
//! window of the first [`SCAN_LINES`] lines. Only the slot line is tested
//! against the header pattern, and new headers are inserted at the slot, so
//! a header written by one run is exactly the line the next run inspects.
//! Lines elsewhere in the file that merely resemble a header are ignored.

use std::ops::Range;

use regex::Regex;

use crate::document::{Document, LineEnding, Position};
use crate::edit::Edit;
use crate::error::Result;
use crate::syntax::CommentStyle;

/// Label used when none is configured or the configured one is blank.
pub const DEFAULT_LABEL: &str = "Path";

/// Number of leading lines a header may occupy.
pub const SCAN_LINES: usize = 10;

/// The header a document should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    style: CommentStyle,
    label: String,
    relative_path: String,
}

impl HeaderSpec {
    /// `label` is trimmed; a blank label becomes [`DEFAULT_LABEL`].
    pub fn new(style: CommentStyle, label: &str, relative_path: impl Into<String>) -> Self {
        let label = match label.trim() {
            "" => DEFAULT_LABEL,
            trimmed => trimmed,
        };
        Self {
            style,
            label: label.to_string(),
            relative_path: relative_path.into(),
        }
    }

    pub fn style(&self) -> CommentStyle {
        self.style
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// The full header line, terminated with `eol`.
    pub fn render(&self, eol: LineEnding) -> String {
        let body = format!("{}: {}", self.label, self.relative_path);
        format!("{}{}", self.style.wrap(&body), eol.as_str())
    }

    /// Pattern matching a header line (without terminator) for this
    /// style and label, capturing the recorded path.
    pub fn pattern(&self) -> Result<Regex> {
        let pattern = format!(
            r"^[ \t]*{}{}:[ \t]*(.+){}[ \t]*$",
            regex::escape(self.style.prefix()),
            regex::escape(&self.label),
            regex::escape(self.style.suffix()),
        );
        Ok(Regex::new(&pattern)?)
    }
}

/// An existing header found in the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Zero-based line of the header.
    pub line: usize,
    /// Byte span of the header line including its terminator.
    pub span: Range<usize>,
    /// Recorded path, trimmed.
    pub captured_path: String,
}

/// What has to happen to bring a document's header up to date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDecision {
    /// The header is already correct.
    NoOp,
    /// No header exists; insert `text` at `position`.
    InsertAt { position: Position, text: String },
    /// A stale header occupies `range`; replace it with `new_text`.
    ReplaceRange {
        range: Range<usize>,
        new_text: String,
    },
}

impl EditDecision {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Convert to a byte-level edit against `document`.
    pub fn to_edit(&self, document: &Document) -> Option<Edit> {
        match self {
            Self::NoOp => None,
            Self::InsertAt { position, text } => {
                Some(Edit::insert(document.offset_at(*position), text.clone()))
            }
            Self::ReplaceRange { range, new_text } => Some(Edit::replace(
                document.text(),
                range.clone(),
                new_text.clone(),
            )),
        }
    }
}

/// Line index of the header slot.
///
/// May equal `line_count` when the document is a lone shebang line without
/// a terminator.
pub fn header_slot(document: &Document) -> usize {
    let window = document.line_count().min(SCAN_LINES);
    let mut slot = 0;
    if document.line(0).starts_with("#!") {
        slot = 1;
    }
    while slot + 1 < window && document.line(slot).trim().is_empty() {
        slot += 1;
    }
    slot
}

/// Where a new header goes: column 0 of the header slot.
pub fn insertion_position(document: &Document) -> Position {
    Position::new(header_slot(document), 0)
}

/// Look for a header matching `spec`'s style and label in the slot.
pub fn find_header(document: &Document, spec: &HeaderSpec) -> Result<Option<HeaderMatch>> {
    let slot = header_slot(document);
    if slot >= document.line_count() {
        return Ok(None);
    }

    let pattern = spec.pattern()?;
    let found = pattern.captures(document.line(slot)).and_then(|caps| {
        caps.get(1).map(|path| HeaderMatch {
            line: slot,
            span: document.line_span(slot),
            captured_path: path.as_str().trim().to_string(),
        })
    });
    Ok(found)
}

/// Decide the edit that makes `document` carry the header described by
/// `spec`.
pub fn synchronize(document: &Document, spec: &HeaderSpec) -> Result<EditDecision> {
    let rendered = spec.render(document.eol());

    let decision = match find_header(document, spec)? {
        Some(existing) if existing.captured_path == spec.relative_path() => EditDecision::NoOp,
        Some(existing) => {
            tracing::debug!(
                line = existing.line,
                old = %existing.captured_path,
                new = %spec.relative_path(),
                "replacing stale header"
            );
            EditDecision::ReplaceRange {
                range: existing.span,
                new_text: rendered,
            }
        }
        None => {
            let position = insertion_position(document);
            if position.line >= document.line_count() {
                // Lone shebang without a terminator: break the line first.
                EditDecision::InsertAt {
                    position: document.end_position(),
                    text: format!("{}{}", document.eol().as_str(), rendered),
                }
            } else {
                tracing::debug!(line = position.line, "inserting header");
                EditDecision::InsertAt {
                    position,
                    text: rendered,
                }
            }
        }
    };

    Ok(decision)
}
