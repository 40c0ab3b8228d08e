//! Verify command implementation

use std::path::Path;

use colored::Colorize;
use fixity_core::{FileCheck, FileStatus, Fixity, VerificationReport};

use crate::error::{CliError, Result};

/// Run the verify command
///
/// Compares `path` with its manifest and prints one line per file. A
/// missing manifest is reported and is not an error. Any file that is not
/// valid makes the command fail so the exit status reflects the result.
pub fn run_verify(path: &Path, json: bool) -> Result<()> {
    let report = match Fixity::default().verify(path) {
        Err(fixity_core::Error::ManifestNotFound { path }) => {
            tracing::debug!(path = %path.display(), "No manifest to verify against");
            println!(
                "{} Hash table file not found in the specified directory.",
                "MISSING".yellow().bold()
            );
            return Ok(());
        }
        result => result?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_intact() {
        Ok(())
    } else {
        Err(CliError::IntegrityFailure {
            count: report.problem_count(),
        })
    }
}

fn print_report(report: &VerificationReport) {
    println!(
        "{} Verifying {}...",
        "=>".blue().bold(),
        report.directory.cyan()
    );

    for check in &report.checks {
        println!("   {}", describe(check));
        if let Some(detail) = &check.detail {
            println!("      {}", detail.dimmed());
        }
    }

    println!();
    if report.is_intact() {
        println!(
            "{} All {} file(s) match the hash table.",
            "OK".green().bold(),
            report.checks.len()
        );
    } else {
        println!(
            "{} {} valid, {} invalid, {} deleted, {} added",
            "CHANGED".red().bold(),
            report.count(FileStatus::Valid),
            report.count(FileStatus::Invalid),
            report.count(FileStatus::Deleted),
            report.count(FileStatus::Added)
        );
    }
}

fn describe(check: &FileCheck) -> String {
    match check.status {
        FileStatus::Valid => format!("{} hash is {}", check.path, "VALID".green()),
        FileStatus::Invalid => format!("{} hash is {}", check.path, "INVALID".red()),
        FileStatus::Deleted => format!("{} file {}", check.path, "Deleted".yellow()),
        FileStatus::Added => format!("{} New file {}", check.path, "Added".cyan()),
    }
}
