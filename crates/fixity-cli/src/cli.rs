//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fixity - Record and verify SHA3-256 digests of the files in a directory
#[derive(Parser, Debug)]
#[command(name = "fixity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run; without one an interactive menu is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Hash every file in a directory and write hashtable.json
    ///
    /// Only the files directly inside the directory are hashed; .json files
    /// and subdirectories are skipped.
    ///
    /// Examples:
    ///   fixity generate ./photos
    Generate {
        /// Directory to hash
        path: PathBuf,
    },

    /// Check a directory against its hashtable.json
    ///
    /// Reports each recorded file as valid, invalid or deleted, and lists
    /// files added since the manifest was generated. Exits with status 1
    /// when anything changed.
    ///
    /// Examples:
    ///   fixity verify ./photos
    ///   fixity verify ./photos --json
    Verify {
        /// Directory to verify
        path: PathBuf,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
