//! Manifest file I/O
//!
//! A manifest is replaced by writing a sibling temp file named
//! `.{file}.{pid}.tmp` and renaming it over the target, so readers see the
//! old manifest or the new one, never a partial write. A crash between the
//! two steps can leave the temp file behind; [`is_temp_name`] lets scanners
//! recognize it.

use fs2::FileExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

const TEMP_SUFFIX: &str = ".tmp";

/// Temp file name this process uses while replacing `file_name`.
pub fn temp_name(file_name: &str) -> String {
    format!(".{}.{}{}", file_name, std::process::id(), TEMP_SUFFIX)
}

/// Whether `name` is a temp file left by any process replacing `file_name`.
pub fn is_temp_name(file_name: &str, name: &str) -> bool {
    name.strip_prefix('.')
        .and_then(|rest| rest.strip_prefix(file_name))
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_suffix(TEMP_SUFFIX))
        .is_some_and(|pid| !pid.is_empty() && pid.bytes().all(|b| b.is_ascii_digit()))
}

/// Replace the file at `path` with `content`.
///
/// Missing parent directories are created. On failure the temp file is
/// removed and any previous file at `path` is left untouched.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp = target.with_file_name(temp_name(path.file_name().unwrap_or_default()));
    let replaced = write_locked(&temp, content)
        .and_then(|()| fs::rename(&temp, &target).map_err(|e| Error::io(&target, e)));
    if replaced.is_err() {
        let _ = fs::remove_file(&temp);
    }
    replaced?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file");
    Ok(())
}

fn write_locked(temp: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp).map_err(|e| Error::io(temp, e))?;
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: temp.to_path_buf(),
    })?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(temp, e))?;
    FileExt::unlock(&file).map_err(|_| Error::LockFailed {
        path: temp.to_path_buf(),
    })
}

/// Read UTF-8 text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write UTF-8 text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
