//! Shared test utilities for the pathmark workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`marker`]: project-root marker fixtures
//! - [`project`]: [`TestProject`] builder for files inside a temporary project

pub mod marker;
pub mod project;

pub use project::TestProject;
