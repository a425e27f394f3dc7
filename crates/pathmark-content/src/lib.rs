//! Content model and header synchronization for pathmark
//!
//! Holds the pieces that operate on document text: line addressing and
//! line-ending detection, edits, the per-file-type comment syntax table and
//! the engine that keeps a `Path: <relative-path>` header in sync.

pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
pub mod header;
pub mod language;
pub mod syntax;

pub use document::{Document, LineEnding, Position};
pub use edit::{Edit, EditKind};
pub use error::{Error, Result};
pub use header::{EditDecision, HeaderMatch, HeaderSpec, synchronize};
pub use language::file_type_for_path;
pub use syntax::CommentStyle;
