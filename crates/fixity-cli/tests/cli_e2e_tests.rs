//! CLI end-to-end tests that invoke the compiled `fixity` binary.

use assert_cmd::Command;
use fixity_test_utils::TestDir;
use predicates::prelude::*;

/// `fixity` with colors disabled so output can be matched as plain text.
fn fixity() -> Command {
    let mut cmd = Command::cargo_bin("fixity").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    fixity()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_version_flag() {
    fixity()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fixity"));
}

#[test]
fn test_generate_writes_manifest() {
    let dir = TestDir::new()
        .with_file("a.txt", "hello")
        .with_file("b.txt", "world");

    fixity()
        .arg("generate")
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Hash table generated and saved to"))
        .stdout(predicate::str::contains("2 file(s) recorded"));

    dir.assert_file_exists("hashtable.json");
    assert!(dir.manifest_text().starts_with("{\n"));
}

#[test]
fn test_generate_on_file_fails() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .arg("generate")
        .arg(dir.path("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_verify_unchanged_directory() {
    let dir = TestDir::new().with_file("a.txt", "hello");
    fixity().arg("generate").arg(dir.root()).assert().success();

    fixity()
        .arg("verify")
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt hash is VALID"));
}

#[test]
fn test_verify_reports_changes_and_exits_nonzero() {
    let dir = TestDir::new()
        .with_file("a.txt", "hello")
        .with_file("b.txt", "world");
    fixity().arg("generate").arg(dir.root()).assert().success();

    dir.remove("a.txt");
    dir.write("b.txt", "world!");
    dir.write("c.txt", "new");

    fixity()
        .arg("verify")
        .arg(dir.root())
        .assert()
        .failure()
        .stdout(predicate::str::contains("a.txt file Deleted"))
        .stdout(predicate::str::contains("b.txt hash is INVALID"))
        .stdout(predicate::str::contains("c.txt New file Added"))
        .stderr(predicate::str::contains("3 file(s) failed verification"));
}

#[test]
fn test_verify_json_output() {
    let dir = TestDir::new().with_file("a.txt", "hello");
    fixity().arg("generate").arg(dir.root()).assert().success();
    dir.write("extra.txt", "added later");

    let output = fixity()
        .args(["verify", "--json"])
        .arg(dir.root())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let checks = report["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0]["status"], "valid");
    assert_eq!(checks[1]["status"], "added");
}

#[test]
fn test_verify_without_manifest_is_reported() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .arg("verify")
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hash table file not found in the specified directory.",
        ));
}

#[test]
fn test_verify_corrupt_manifest_fails() {
    let dir = TestDir::new().with_file("a.txt", "hello");
    dir.write("hashtable.json", "{\n  broken\n}\n");

    fixity()
        .arg("verify")
        .arg(dir.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest at line 2"));
}

#[test]
fn test_menu_generate() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .write_stdin(format!("1\n{}\n", dir.root().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hashing Program using SHA3-256"))
        .stdout(predicate::str::contains("Hash table generated and saved to"));

    dir.assert_file_exists("hashtable.json");
}

#[test]
fn test_menu_verify() {
    let dir = TestDir::new().with_file("a.txt", "hello");
    fixity().arg("generate").arg(dir.root()).assert().success();

    fixity()
        .write_stdin(format!("2\n{}\n", dir.root().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the directory path to verify"))
        .stdout(predicate::str::contains("hash is VALID"));
}

#[test]
fn test_menu_rejects_unknown_option() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .write_stdin(format!("3\n{}\n", dir.root().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option selected. Program will exit.",
        ));

    dir.assert_file_not_exists("hashtable.json");
}

#[test]
fn test_menu_empty_path_uses_current_directory() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .current_dir(dir.root())
        .write_stdin("1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) recorded"));

    dir.assert_file_exists("hashtable.json");
}

#[test]
fn test_verify_on_file_is_not_a_directory() {
    let dir = TestDir::new().with_file("a.txt", "hello");

    fixity()
        .arg("verify")
        .arg(dir.path("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
