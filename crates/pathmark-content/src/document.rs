//! Document snapshot with line addressing

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Line terminator style of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    /// Detect from the first terminator in `text`. Text without any line
    /// break is treated as LF.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if idx > 0 && text.as_bytes()[idx - 1] == b'\r' => Self::Crlf,
            _ => Self::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Zero-based line/character position. `character` counts Unicode scalar
/// values within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// UTF-8 byte-order mark.
pub const BOM: char = '\u{feff}';

/// An immutable snapshot of a text document and its file type.
///
/// Lines are split on `\n`; a trailing `\r` belongs to the terminator. A
/// document always has at least one line, and text ending in a line break
/// has an empty last line.
///
/// A leading byte-order mark is not part of the text. Offsets and lines
/// address the text after it, and [`Document::to_source`] puts it back.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    file_type: String,
    eol: LineEnding,
    line_starts: Vec<usize>,
    bom: bool,
}

impl Document {
    pub fn new(text: impl Into<String>, file_type: impl Into<String>) -> Self {
        let text = text.into();
        let (text, bom) = match text.strip_prefix(BOM) {
            Some(rest) => (rest.to_string(), true),
            None => (text, false),
        };
        let eol = LineEnding::detect(&text);
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            text,
            file_type: file_type.into(),
            eol,
            line_starts,
            bom,
        }
    }

    /// Whether the source started with a byte-order mark.
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// Turn edited document text back into file content, restoring the
    /// byte-order mark at offset 0.
    pub fn to_source(&self, text: &str) -> String {
        if self.bom {
            format!("{BOM}{text}")
        } else {
            text.to_string()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editor-style file type identifier, e.g. `python` or `html`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn eol(&self) -> LineEnding {
        self.eol
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte span of a line including its terminator.
    pub fn line_span(&self, line: usize) -> Range<usize> {
        let Some(&start) = self.line_starts.get(line) else {
            return self.text.len()..self.text.len();
        };
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        start..end
    }

    /// Text of a line without its terminator. Out-of-range lines are empty.
    pub fn line(&self, line: usize) -> &str {
        let raw = &self.text[self.line_span(line)];
        let raw = raw.strip_suffix('\n').unwrap_or(raw);
        raw.strip_suffix('\r').unwrap_or(raw)
    }

    /// Byte offset of a position, clamped to the line end and the
    /// document end.
    pub fn offset_at(&self, position: Position) -> usize {
        if position.line >= self.line_count() {
            return self.text.len();
        }
        let start = self.line_starts[position.line];
        let line = self.line(position.line);
        let within = line
            .char_indices()
            .nth(position.character)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len());
        start + within
    }

    /// Position at the very end of the document.
    pub fn end_position(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line(last).chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_bom_is_kept_out_of_the_text() {
        let doc = Document::new("\u{feff}#!/bin/sh\necho\n", "shellscript");
        assert!(doc.has_bom());
        assert_eq!(doc.line(0), "#!/bin/sh");
        assert_eq!(doc.offset_at(Position::new(0, 0)), 0);
        assert_eq!(doc.to_source(doc.text()), "\u{feff}#!/bin/sh\necho\n");
    }

    #[test]
    fn to_source_without_bom_is_identity() {
        let doc = Document::new("a\n", "plaintext");
        assert!(!doc.has_bom());
        assert_eq!(doc.to_source("b\n"), "b\n");
    }

    #[test]
    fn empty_document_has_one_line() {
        let doc = Document::new("", "plaintext");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0), "");
    }

    #[test]
    fn trailing_newline_adds_empty_last_line() {
        let doc = Document::new("a\nb\n", "plaintext");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(1), "b");
        assert_eq!(doc.line(2), "");
    }

    #[test]
    fn crlf_lines_strip_carriage_return() {
        let doc = Document::new("one\r\ntwo\r\n", "plaintext");
        assert_eq!(doc.eol(), LineEnding::Crlf);
        assert_eq!(doc.line(0), "one");
        assert_eq!(doc.line_span(0), 0..5);
    }

    #[test]
    fn detect_uses_first_terminator() {
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\n"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect("no breaks"), LineEnding::Lf);
    }

    #[test]
    fn offset_at_counts_characters_and_clamps() {
        let doc = Document::new("héllo\nworld", "plaintext");
        assert_eq!(doc.offset_at(Position::new(0, 2)), 3);
        assert_eq!(doc.offset_at(Position::new(0, 99)), 6);
        assert_eq!(doc.offset_at(Position::new(1, 0)), 7);
        assert_eq!(doc.offset_at(Position::new(9, 0)), doc.text().len());
    }

    #[test]
    fn end_position_points_past_last_character() {
        let doc = Document::new("a\nbc", "plaintext");
        assert_eq!(doc.end_position(), Position::new(1, 2));
    }
}
