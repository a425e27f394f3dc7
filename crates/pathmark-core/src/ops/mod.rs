//! Trigger operations
//!
//! Each operation takes a file, resolves it through the [`Workspace`] and
//! computes everything from a fresh read. Nothing is carried between calls.
//!
//! [`Workspace`]: crate::Workspace

mod event;
mod header;
mod insert;
mod path;
mod status;

pub use event::HostEvent;
pub use header::{HeaderAction, HeaderOutcome};
pub use insert::InsertOutcome;
pub use status::{STATUS_COMMAND, StatusItem};
