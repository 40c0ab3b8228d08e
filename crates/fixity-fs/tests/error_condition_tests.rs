//! Tests for error handling under adverse filesystem conditions
//!
//! These tests verify that fixity-fs reports real error conditions with the
//! offending path attached.

use fixity_fs::checksum::compute_file_digest;
use fixity_fs::{Error, NormalizedPath, io};
use tempfile::tempdir;

#[test]
fn read_text_nonexistent_file_returns_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("does_not_exist.txt"));

    let result = io::read_text(&path);

    assert!(result.is_err(), "Reading non-existent file should fail");
}

#[test]
fn digest_of_directory_is_an_io_error() {
    let dir = tempdir().unwrap();

    let result = compute_file_digest(dir.path());

    match result {
        Err(Error::Io { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn read_text_rejects_invalid_utf8() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("binary.json");
    std::fs::write(&file_path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let result = io::read_text(&NormalizedPath::new(&file_path));

    assert!(result.is_err(), "Manifest text must be UTF-8");
}

#[test]
fn write_atomic_cleans_up_temp_file_on_success() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("hashtable.json"));

    io::write_text(&path, "{\n}\n").unwrap();

    // The temp file pattern is .{filename}.{pid}.tmp
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();

    assert!(
        leftovers.is_empty(),
        "No temp files should remain after successful write, found: {:?}",
        leftovers.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn digest_permission_denied_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("locked.bin");
        fs::write(&file_path, "secret content").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let result = compute_file_digest(&file_path);

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        let err = result.expect_err("Hashing unreadable file should fail");
        assert!(err.to_string().contains("locked.bin"));
    }

    #[test]
    fn write_atomic_unwritable_parent_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let parent = dir.path().join("parent");
        fs::create_dir(&parent).unwrap();

        let file_path = parent.join("hashtable.json");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        // The temp file cannot be created next to the target
        let result = io::write_text(&NormalizedPath::new(&file_path), "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err(), "Writing when parent is read-only should fail");
        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(
            content, "original",
            "Original file content must be preserved when write fails"
        );
    }
}
