//! Absolute, lexically normalized paths used as manifest keys

use std::path::{Component, Path, PathBuf};

/// A lexically normalized path.
///
/// `.` components are dropped and `..` pops the preceding component without
/// touching the filesystem, so symlinks are never resolved. On Windows the
/// separator is stored as a forward slash; elsewhere a backslash is an
/// ordinary file name character and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let cleaned = clean(dunce::simplified(path.as_ref()));
        let inner = cleaned.to_string_lossy();
        let inner = if cfg!(windows) {
            inner.replace('\\', "/")
        } else {
            inner.into_owned()
        };
        Self { inner }
    }

    /// Make `path` absolute against the current directory, then normalize it.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn absolute(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let absolute = std::path::absolute(path.as_ref())?;
        Ok(Self::new(absolute))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path, returning the normalized string.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a single file name.
    pub fn join(&self, segment: &str) -> Self {
        Self::new(Path::new(&self.inner).join(segment))
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx + 1 < trimmed.len() => Some(&trimmed[idx + 1..]),
            Some(_) => None,
            None if trimmed.is_empty() => None,
            None => Some(trimmed),
        }
    }

    /// Check if this path exists on the filesystem, following symlinks.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a regular file, following symlinks.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Resolve `.` and `..` components without consulting the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_current_dir() {
        assert_eq!(clean(Path::new("a/./b/.")), PathBuf::from("a/b"));
    }

    #[test]
    fn clean_keeps_leading_parent_of_relative_path() {
        assert_eq!(clean(Path::new("../a/../../b")), PathBuf::from("../../b"));
    }

    #[test]
    fn clean_empty_becomes_current_dir() {
        assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
    }
}
