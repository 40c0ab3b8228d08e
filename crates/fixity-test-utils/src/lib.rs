//! Shared test utilities for the fixity workspace.
//!
//! This crate provides standardised directory fixtures so each crate's test
//! suite builds scanned directories the same way. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`dir`]: [`TestDir`] builder for a directory to generate and verify

pub mod dir;

pub use dir::TestDir;
