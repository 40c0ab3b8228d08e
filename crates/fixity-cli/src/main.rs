//! fixity CLI
//!
//! Records SHA3-256 digests of the files in a directory and later checks
//! the directory against them.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

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

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("warning: could not install tracing subscriber");
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => interactive::run_menu(),
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate { path } => commands::run_generate(&path),
        Commands::Verify { path, json } => commands::run_verify(&path, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixity_test_utils::TestDir;

    #[test]
    fn test_execute_generate_then_verify() {
        let dir = TestDir::new().with_file("a.txt", "hello");

        execute_command(Commands::Generate {
            path: dir.root().to_path_buf(),
        })
        .unwrap();
        let result = execute_command(Commands::Verify {
            path: dir.root().to_path_buf(),
            json: true,
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_integrity_failure_message() {
        let error = crate::error::CliError::IntegrityFailure { count: 2 };
        assert_eq!(error.to_string(), "2 file(s) failed verification");
    }
}
