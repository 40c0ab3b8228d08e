//! Directory snapshots
//!
//! A snapshot covers the direct children of one directory. Directories,
//! special files and anything the config excludes (the manifest and other
//! `.json` files by default) are skipped. Symlinks count when they point at
//! a regular file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use fixity_fs::NormalizedPath;
use fixity_fs::checksum::compute_file_digest;
use tracing::{debug, info, warn};

use crate::{DigestEntry, Error, FixityConfig, Manifest, Result};

/// Resolve `dir` to an absolute normalized path and check it is a directory.
pub fn resolve_root(dir: &Path) -> Result<NormalizedPath> {
    let root = NormalizedPath::absolute(dir).map_err(|e| fixity_fs::Error::io(dir, e))?;
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    Ok(root)
}

/// A file picked up by a scan.
///
/// `key` is the manifest key; `native` is the path as listed by the OS and
/// is what gets read. They differ when the name is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub key: NormalizedPath,
    pub native: PathBuf,
}

/// List the files a snapshot of `dir` would hash, in directory order.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `dir` is not a directory, or a
/// filesystem error if it cannot be listed.
pub fn scan(dir: &Path, config: &FixityConfig) -> Result<Vec<ScannedFile>> {
    let root = resolve_root(dir)?;
    scan_root(&root, config)
}

pub(crate) fn scan_root(root: &NormalizedPath, config: &FixityConfig) -> Result<Vec<ScannedFile>> {
    let native_root = root.to_native();
    let entries = fs::read_dir(&native_root).map_err(|e| fixity_fs::Error::io(&native_root, e))?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %root, error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        let native = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        // Follows symlinks, so a link to a regular file is kept
        let is_regular = fs::metadata(&native).map(|m| m.is_file()).unwrap_or(false);
        if !is_regular {
            debug!(name = %file_name, "Skipping non-regular entry");
            continue;
        }
        if config.is_excluded(&file_name) {
            debug!(name = %file_name, "Skipping excluded file");
            continue;
        }

        let key = root.join(&file_name);
        if !seen.insert(key.as_str().to_string()) {
            warn!(
                path = %key,
                native = %native.display(),
                "Skipping file whose name collides with another after UTF-8 conversion"
            );
            continue;
        }
        files.push(ScannedFile { key, native });
    }

    Ok(files)
}

/// Digest every file [`scan`] finds in `dir`.
///
/// A file that cannot be hashed does not abort the snapshot; it is
/// recorded as [`DigestEntry::Failed`] with the reason.
///
/// # Errors
///
/// Fails only when `dir` itself is not a listable directory.
pub fn snapshot(dir: &Path, config: &FixityConfig) -> Result<Manifest> {
    let root = resolve_root(dir)?;
    snapshot_root(&root, config)
}

pub(crate) fn snapshot_root(root: &NormalizedPath, config: &FixityConfig) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    for file in scan_root(root, config)? {
        let entry = digest_entry(&file);
        manifest.insert(file.key.into_string(), entry);
    }

    info!(
        dir = %root,
        files = manifest.len(),
        failed = manifest.failed_count(),
        "Snapshot complete"
    );
    Ok(manifest)
}

fn digest_entry(file: &ScannedFile) -> DigestEntry {
    let entry = DigestEntry::from(compute_file_digest(&file.native));
    if let DigestEntry::Failed(reason) = &entry {
        warn!(path = %file.key, %reason, "Could not hash file; recording failure");
    }
    entry
}
