//! Filesystem layer for pathmark
//!
//! Provides normalized path handling, atomic locked writes, format-agnostic
//! config loading and project-root discovery.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod root;

pub use config::ConfigStore;
pub use constants::ProjectMarker;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
pub use root::{ProjectRoot, ProjectRoots, absolutize};
