//! Core orchestration layer for fixity
//!
//! Produces directory manifests of file digests and verifies a directory
//! against a previously written manifest.
//!
//! - [`snapshot`] enumerates a directory and digests each regular file
//! - [`manifest`] holds the path to digest mapping and its text codec
//! - [`verify`] diffs a stored manifest against the live directory
//! - [`Fixity`] ties them together as `generate` and `verify`

pub mod config;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod snapshot;
pub mod verify;

pub use config::FixityConfig;
pub use engine::{Fixity, GenerateSummary, generate, verify};
pub use error::{Error, Result};
pub use manifest::{DigestEntry, Manifest};
pub use verify::{FileCheck, FileStatus, VerificationReport};
