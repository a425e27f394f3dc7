//! Settings and their layered resolution
//!
//! Settings are merged from these sources, later sources overriding earlier:
//!
//! 1. **Global** - `<config_dir>/pathmark/config.toml`
//! 2. **Project** - `.pathmark.toml`, `.pathmark.json` or `.pathmark.yaml`
//!    at the file's project root
//! 3. **Explicit** - a file passed with `--config`
//! 4. **Overrides** - individual values from the command line
//!
//! # Example
//!
//! ```ignore
//! use pathmark_core::config::{SettingsLayer, SettingsResolver};
//!
//! let resolver = SettingsResolver::new().with_overrides(SettingsLayer {
//!     label: Some("File".into()),
//!     ..Default::default()
//! });
//! let settings = resolver.resolve(None)?;
//! assert_eq!(settings.effective_label(), "File");
//! ```

mod resolver;
mod settings;

pub use resolver::SettingsResolver;
pub use settings::{Settings, SettingsLayer, StatusBarLayer, StatusBarSettings};
