//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use fixity_core::Fixity;

use crate::error::Result;

/// Run the generate command
///
/// Hashes the files in `path` and writes the manifest next to them.
pub fn run_generate(path: &Path) -> Result<()> {
    println!(
        "{} Hashing files in {}...",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    let summary = Fixity::default().generate(path)?;

    println!(
        "{} Hash table generated and saved to {}",
        "OK".green().bold(),
        summary.directory
    );
    println!(
        "   {} {} file(s) recorded in {}",
        "+".green(),
        summary.entries,
        summary.manifest_path.file_name().unwrap_or_default()
    );
    if summary.failed > 0 {
        println!(
            "   {} {} file(s) could not be hashed and were recorded as errors",
            "!".yellow(),
            summary.failed
        );
    }

    Ok(())
}
