//! [`TestDir`] builder for manifest test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the manifest file written by `generate`.
pub const MANIFEST_NAME: &str = "hashtable.json";

/// A temporary directory with helpers to create, change and remove files
/// between `generate` and `verify` runs.
///
/// # Example
///
/// ```rust,no_run
/// use fixity_test_utils::TestDir;
///
/// let dir = TestDir::new()
///     .with_file("a.txt", "hello")
///     .with_file("b.txt", "world");
/// dir.remove("a.txt");
/// dir.assert_file_not_exists("a.txt");
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Manifest location inside the directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.path(MANIFEST_NAME)
    }

    /// Builder form of [`TestDir::write`].
    pub fn with_file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.write(name, content);
        self
    }

    /// Create or overwrite `name` with `content`.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.path(name), content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", name, e));
    }

    /// Create a subdirectory.
    pub fn mkdir(&self, name: &str) {
        fs::create_dir_all(self.path(name)).unwrap();
    }

    /// Delete the file `name`.
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path(name))
            .unwrap_or_else(|e| panic!("Could not remove {}: {}", name, e));
    }

    /// Read the manifest text.
    ///
    /// # Panics
    /// Panics if no manifest has been written.
    pub fn manifest_text(&self) -> String {
        fs::read_to_string(self.manifest_path())
            .unwrap_or_else(|_| panic!("No manifest at {}", self.manifest_path().display()))
    }

    /// Assert that `name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Make `name` unreadable and return a guard that restores it on drop.
    ///
    /// Returns `None` when permissions cannot take effect, e.g. when the
    /// tests run as root.
    #[cfg(unix)]
    pub fn lock(&self, name: &str) -> Option<LockedFile> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::File::open(&path).is_ok() {
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
            return None;
        }
        Some(LockedFile { path })
    }
}

/// Restores read permission on a file made unreadable by [`TestDir::lock`].
#[cfg(unix)]
pub struct LockedFile {
    path: PathBuf,
}

#[cfg(unix)]
impl Drop for LockedFile {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o644));
    }
}
