//! Path to digest mapping persisted next to the files it describes
//!
//! A [`Manifest`] maps absolute, normalized file paths to a [`DigestEntry`].
//! Entries are kept sorted by path so encoding is deterministic. The text
//! format lives in [`codec`].

pub mod codec;

use std::collections::BTreeMap;
use std::collections::btree_map;

use fixity_fs::{NormalizedPath, io};

use crate::{Error, Result};

pub use codec::{decode, encode};

/// Digest recorded for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestEntry {
    /// Lowercase hex digest of the file's content
    Digest(String),
    /// The file could not be hashed; carries the failure reason
    Failed(String),
}

impl DigestEntry {
    /// Prefix marking a failed entry in the manifest text.
    pub const FAILURE_PREFIX: &'static str = "ERROR: ";

    /// Interpret a value read from the manifest text.
    pub fn from_stored(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.strip_prefix(Self::FAILURE_PREFIX) {
            Some(reason) => Self::Failed(reason.to_string()),
            None => Self::Digest(value),
        }
    }

    /// Value written to the manifest text.
    pub fn to_stored(&self) -> String {
        match self {
            Self::Digest(hex) => hex.clone(),
            Self::Failed(reason) => format!("{}{}", Self::FAILURE_PREFIX, reason),
        }
    }

    /// The recorded digest, if hashing succeeded.
    pub fn digest(&self) -> Option<&str> {
        match self {
            Self::Digest(hex) => Some(hex),
            Self::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether a freshly computed digest matches this entry.
    ///
    /// A failed entry never matches.
    pub fn matches(&self, live_digest: &str) -> bool {
        self.digest() == Some(live_digest)
    }
}

impl From<fixity_fs::Result<String>> for DigestEntry {
    fn from(result: fixity_fs::Result<String>) -> Self {
        match result {
            Ok(hex) => Self::Digest(hex),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Mapping from absolute file path to its recorded digest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, DigestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entry` for `path`, returning any entry it replaced.
    pub fn insert(&mut self, path: impl Into<String>, entry: DigestEntry) -> Option<DigestEntry> {
        self.entries.insert(path.into(), entry)
    }

    pub fn get(&self, path: &str) -> Option<&DigestEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DigestEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }

    /// Number of entries recorded as failures.
    pub fn failed_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_failed()).count()
    }

    /// Read and decode the manifest stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestNotFound`] if nothing exists at `path`,
    /// [`Error::ManifestParse`] if the text is malformed, and a filesystem
    /// error if it cannot be read.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound {
                path: path.to_native(),
            });
        }
        let text = io::read_text(path)?;
        let manifest = decode(&text)?;
        tracing::debug!(path = %path, entries = manifest.len(), "Loaded manifest");
        Ok(manifest)
    }

    /// Encode and write the manifest to `path`, replacing any previous file.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        io::write_text(path, &encode(self))?;
        tracing::debug!(path = %path, entries = self.len(), "Saved manifest");
        Ok(())
    }
}

impl FromIterator<(String, DigestEntry)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, DigestEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Manifest {
    type Item = (String, DigestEntry);
    type IntoIter = btree_map::IntoIter<String, DigestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
