//! Verification of a directory against its stored manifest
//!
//! Every manifest entry is classified as [`FileStatus::Valid`],
//! [`FileStatus::Invalid`] or [`FileStatus::Deleted`], in manifest order.
//! Files found on disk but missing from the manifest follow as
//! [`FileStatus::Added`], in directory enumeration order.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use fixity_fs::NormalizedPath;
use fixity_fs::checksum::compute_file_digest;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::snapshot::{resolve_root, scan_root};
use crate::{FixityConfig, Manifest, Result};

/// Outcome for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Content matches the recorded digest
    Valid,
    /// Content differs from the recorded digest, or could not be compared
    Invalid,
    /// Recorded in the manifest but no longer on disk
    Deleted,
    /// On disk but not recorded in the manifest
    Added,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
            Self::Deleted => write!(f, "deleted"),
            Self::Added => write!(f, "added"),
        }
    }
}

/// Verification result for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCheck {
    /// Absolute path as recorded in (or discovered for) the manifest
    pub path: String,
    pub status: FileStatus,
    /// Why an `Invalid` file could not be compared, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileCheck {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Report from a verification pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Directory that was verified
    pub directory: String,
    /// Manifest entries in manifest order, then added files
    pub checks: Vec<FileCheck>,
}

impl VerificationReport {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            checks: Vec::new(),
        }
    }

    pub fn push(&mut self, check: FileCheck) {
        self.checks.push(check);
    }

    /// Checks with the given status, in report order.
    pub fn with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileCheck> {
        self.checks.iter().filter(move |c| c.status == status)
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.with_status(status).count()
    }

    /// Status recorded for `path`, if it appears in the report.
    pub fn status_of(&self, path: &str) -> Option<FileStatus> {
        self.checks.iter().find(|c| c.path == path).map(|c| c.status)
    }

    /// True when every file is `Valid`.
    pub fn is_intact(&self) -> bool {
        self.checks.iter().all(|c| c.status == FileStatus::Valid)
    }

    /// Number of files that are not `Valid`.
    pub fn problem_count(&self) -> usize {
        self.checks.len() - self.count(FileStatus::Valid)
    }
}

/// Verify `dir` against the manifest stored inside it.
///
/// # Errors
///
/// Returns [`crate::Error::NotADirectory`] for a bad root,
/// [`crate::Error::ManifestNotFound`] when no manifest exists (no
/// comparisons are made), and [`crate::Error::ManifestParse`] when the
/// manifest is malformed.
pub fn verify(dir: &Path, config: &FixityConfig) -> Result<VerificationReport> {
    let root = resolve_root(dir)?;
    let manifest = Manifest::load(&root.join(&config.manifest_name))?;
    verify_against(&root, &manifest, config)
}

/// Compare a loaded manifest with the live contents of `root`.
pub fn verify_against(
    root: &NormalizedPath,
    manifest: &Manifest,
    config: &FixityConfig,
) -> Result<VerificationReport> {
    let mut report = VerificationReport::new(root.as_str());
    let live = scan_root(root, config)?;
    let live_paths: HashMap<&str, &Path> = live
        .iter()
        .map(|file| (file.key.as_str(), file.native.as_path()))
        .collect();

    for (path, expected) in manifest.iter() {
        // Recorded paths that the scan no longer lists may still exist as
        // something unhashable, such as a directory; those are Invalid.
        let fallback;
        let native = match live_paths.get(path) {
            Some(native) => *native,
            None => {
                fallback = NormalizedPath::new(path).to_native();
                if !fallback.exists() {
                    debug!(%path, "Recorded file is gone");
                    report.push(FileCheck::new(path, FileStatus::Deleted));
                    continue;
                }
                fallback.as_path()
            }
        };

        let check = match compute_file_digest(native) {
            Ok(live) if expected.matches(&live) => FileCheck::new(path, FileStatus::Valid),
            Ok(_) => FileCheck::new(path, FileStatus::Invalid),
            Err(e) => FileCheck::new(path, FileStatus::Invalid).with_detail(e.to_string()),
        };
        debug!(%path, status = %check.status, "Checked file");
        report.push(check);
    }

    for file in live {
        if !manifest.contains(file.key.as_str()) {
            debug!(path = %file.key, "Found file missing from manifest");
            report.push(FileCheck::new(file.key.into_string(), FileStatus::Added));
        }
    }

    info!(
        dir = %root,
        valid = report.count(FileStatus::Valid),
        invalid = report.count(FileStatus::Invalid),
        deleted = report.count(FileStatus::Deleted),
        added = report.count(FileStatus::Added),
        "Verification complete"
    );
    Ok(report)
}
