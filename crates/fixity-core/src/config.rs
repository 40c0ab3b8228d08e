//! Settings shared by snapshotting and verification

use serde::{Deserialize, Serialize};

/// Default manifest file name, written directly inside the scanned directory.
pub const DEFAULT_MANIFEST_NAME: &str = "hashtable.json";

/// Default extension of files left out of every snapshot.
pub const DEFAULT_EXCLUDED_EXTENSION: &str = ".json";

/// Manifest location and exclusion settings.
///
/// The digest algorithm and read chunk size are fixed and deliberately
/// not part of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixityConfig {
    /// File name of the manifest inside the scanned directory
    pub manifest_name: String,
    /// Files whose lowercased name ends with this suffix are never hashed
    pub excluded_extension: String,
}

impl Default for FixityConfig {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            excluded_extension: DEFAULT_EXCLUDED_EXTENSION.to_string(),
        }
    }
}

impl FixityConfig {
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn with_excluded_extension(mut self, extension: impl Into<String>) -> Self {
        self.excluded_extension = extension.into();
        self
    }

    /// Whether a directory entry with this file name is left out of snapshots.
    ///
    /// The manifest itself is always excluded, even when its name does not
    /// carry the excluded extension, and so are temp files left by an
    /// interrupted manifest write.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        if file_name == self.manifest_name
            || fixity_fs::io::is_temp_name(&self.manifest_name, file_name)
        {
            return true;
        }
        !self.excluded_extension.is_empty()
            && file_name
                .to_lowercase()
                .ends_with(&self.excluded_extension.to_lowercase())
    }
}
