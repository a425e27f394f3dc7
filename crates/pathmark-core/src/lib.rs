//! Core operations for pathmark
//!
//! Sits between the host surface and the lower crates:
//!
//! ```text
//!            pathmark-cli
//!                 |
//!           pathmark-core
//!            /         \
//!  pathmark-fs    pathmark-content
//! ```
//!
//! - **Settings**: layered resolution of user, project and command-line values
//! - **Path resolution**: root-relative path text with absolute fallback
//! - **Operations**: relative path, insert at cursors, header sync, events,
//!   status item

pub mod config;
pub mod error;
pub mod ops;
pub mod resolve;
pub mod workspace;

pub use config::{Settings, SettingsLayer, SettingsResolver};
pub use error::{Error, Result};
pub use ops::{HeaderAction, HeaderOutcome, HostEvent, InsertOutcome, STATUS_COMMAND, StatusItem};
pub use resolve::{PathReport, ResolvedPath};
pub use workspace::{ActiveFile, Workspace};
