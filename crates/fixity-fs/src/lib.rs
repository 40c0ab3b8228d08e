//! Filesystem primitives for fixity
//!
//! Provides the streaming digest engine, absolute normalized paths used as
//! manifest keys, and the text I/O used to persist manifests.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{ALGORITHM_NAME, CHUNK_SIZE, DIGEST_HEX_LEN};
pub use error::{Error, Result};
pub use path::NormalizedPath;
