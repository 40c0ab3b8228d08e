//! `generate` and `verify` entry points

use std::path::Path;

use fixity_fs::NormalizedPath;
use tracing::info;

use crate::snapshot::{resolve_root, snapshot_root};
use crate::verify::verify as verify_directory;
use crate::{FixityConfig, Result, VerificationReport};

/// What `generate` wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Absolute normalized directory that was snapshotted
    pub directory: NormalizedPath,
    /// Where the manifest was written
    pub manifest_path: NormalizedPath,
    /// Number of files recorded
    pub entries: usize,
    /// Number of files recorded as failures
    pub failed: usize,
}

/// Manifest generation and verification for directories.
#[derive(Debug, Clone, Default)]
pub struct Fixity {
    config: FixityConfig,
}

impl Fixity {
    pub fn new(config: FixityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixityConfig {
        &self.config
    }

    /// Location of the manifest for `dir`.
    pub fn manifest_path(&self, dir: &Path) -> Result<NormalizedPath> {
        Ok(resolve_root(dir)?.join(&self.config.manifest_name))
    }

    /// Snapshot `dir` and write its manifest, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a directory or the manifest cannot
    /// be written. Files that cannot be hashed are recorded, not fatal.
    pub fn generate(&self, dir: &Path) -> Result<GenerateSummary> {
        let root = resolve_root(dir)?;
        let manifest = snapshot_root(&root, &self.config)?;
        let manifest_path = root.join(&self.config.manifest_name);
        manifest.save(&manifest_path)?;

        info!(path = %manifest_path, entries = manifest.len(), "Manifest generated");
        Ok(GenerateSummary {
            directory: root,
            manifest_path,
            entries: manifest.len(),
            failed: manifest.failed_count(),
        })
    }

    /// Verify `dir` against the manifest stored inside it.
    ///
    /// # Errors
    ///
    /// See [`crate::verify::verify`].
    pub fn verify(&self, dir: &Path) -> Result<VerificationReport> {
        verify_directory(dir, &self.config)
    }
}

/// [`Fixity::generate`] with the default configuration.
pub fn generate(dir: impl AsRef<Path>) -> Result<GenerateSummary> {
    Fixity::default().generate(dir.as_ref())
}

/// [`Fixity::verify`] with the default configuration.
pub fn verify(dir: impl AsRef<Path>) -> Result<VerificationReport> {
    Fixity::default().verify(dir.as_ref())
}
