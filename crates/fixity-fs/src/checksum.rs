//! SHA3-256 digest engine
//!
//! Every digest produced by this module is a lowercase hex string of
//! [`DIGEST_HEX_LEN`] characters. Files are streamed in [`CHUNK_SIZE`]
//! chunks so memory use does not grow with file size.

use sha3::{Digest, Sha3_256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::{Error, Result};

/// Name of the digest algorithm, shown to users.
pub const ALGORITHM_NAME: &str = "SHA3-256";

/// Size of chunks for streaming digest computation
pub const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// Length of a hex-encoded digest (32 bytes).
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute the digest of in-memory content.
pub fn compute_content_digest(content: &[u8]) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Compute the digest of everything readable from `reader`.
///
/// # Errors
///
/// Returns the underlying I/O error if a read fails mid-stream.
pub fn compute_reader_digest<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha3_256::new();
    let mut buffer = vec![0; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the digest of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_digest(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let digest = compute_reader_digest(file).map_err(|e| Error::io(path, e))?;
    tracing::trace!(path = %path.display(), %digest, "Hashed file");
    Ok(digest)
}

/// Check whether `s` looks like a digest produced by this module.
pub fn is_digest_hex(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
