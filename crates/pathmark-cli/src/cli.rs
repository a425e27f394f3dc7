//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use pathmark_content::Position;

/// pathmark - Keep `Path: <relative-path>` headers in your source files
#[derive(Parser, Debug)]
#[command(name = "pathmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra settings file (TOML, JSON or YAML), applied after project settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root; repeat for several. Disables marker discovery
    #[arg(long = "root", global = true, value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Header label, overriding settings
    #[arg(long, global = true, value_name = "TEXT")]
    pub label: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the file's path relative to its project root
    ///
    /// Falls back to the absolute path when no root contains the file.
    Path {
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Insert the relative path at one or more cursor positions
    ///
    /// Examples:
    ///   pathmark insert src/app.py --at 3:10
    ///   pathmark insert src/app.py --at 1:1 --at 20:5 --dry-run
    Insert {
        file: PathBuf,

        /// 1-based LINE:COL cursor position
        #[arg(long = "at", required = true, value_name = "LINE:COL", value_parser = parse_cursor)]
        cursors: Vec<Position>,

        /// Show the change as a diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Insert or update the path header of each file
    Header {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// File type identifier, overriding detection (e.g. `python`)
        #[arg(long, value_name = "ID")]
        language: Option<String>,

        /// Show the change as a diff without writing
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Copy the relative path to the system clipboard
    Copy { file: PathBuf },

    /// Handle an editor event; never fails
    ///
    /// Synchronizes the header when `autoInsertOnOpen` is enabled.
    Event {
        #[arg(value_enum)]
        kind: EventKind,

        file: PathBuf,
    },

    /// Print the status bar item for a file
    Status {
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   pathmark completions bash > ~/.local/share/bash-completion/completions/pathmark
    ///   pathmark completions zsh > ~/.zfunc/_pathmark
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Open,
    Save,
}

/// Parse a 1-based `LINE:COL` into a zero-based position.
fn parse_cursor(s: &str) -> Result<Position, String> {
    let (line, col) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got `{s}`"))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line in `{s}`"))?;
    let col: usize = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in `{s}`"))?;
    if line == 0 || col == 0 {
        return Err(format!("positions are 1-based, got `{s}`"));
    }
    Ok(Position::new(line - 1, col - 1))
}
