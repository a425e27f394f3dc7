//! pathmark CLI
//!
//! Command-line host for relative paths and path headers.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command.clone() else {
        println!("{} relative path headers", "pathmark".green().bold());
        println!();
        println!("Run {} for available commands.", "pathmark --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        return commands::run_completions(shell);
    }

    let cwd = std::env::current_dir()?;
    let workspace = context::workspace(&cli, &cwd);

    match command {
        Commands::Path { file, json } => commands::run_path(&workspace, &file, json),
        Commands::Insert {
            file,
            cursors,
            dry_run,
        } => commands::run_insert(&workspace, &file, &cursors, dry_run),
        Commands::Header {
            files,
            language,
            dry_run,
            json,
        } => commands::run_header(&workspace, &files, language.as_deref(), dry_run, json),
        Commands::Copy { file } => commands::run_copy(&workspace, &file),
        Commands::Event { kind, file } => {
            commands::run_event(&workspace, kind, &file);
            Ok(())
        }
        Commands::Status { file, json } => commands::run_status(&workspace, &file, json),
        Commands::Completions { .. } => Ok(()),
    }
}
