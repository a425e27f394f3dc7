//! Command implementations

mod completions;
mod copy;
mod event;
mod header;
mod insert;
mod path;
mod status;

pub use completions::run_completions;
pub use copy::run_copy;
pub use event::run_event;
pub use header::run_header;
pub use insert::run_insert;
pub use path::run_path;
pub use status::run_status;
