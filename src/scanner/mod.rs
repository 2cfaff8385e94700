//! Scanner module for directory traversal and content hashing.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: recursive traversal and catalog construction
//! - [`hasher`]: BLAKE3 content digests (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner;
//! use std::path::Path;
//!
//! let catalog = scanner::walk(Path::new("."), Some("txt")).unwrap();
//! for record in catalog.records() {
//!     println!("{}: {} bytes", record.path.display(), record.size);
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

pub use hasher::{hash_to_hex, Digest};
pub use walker::{walk, TraversalError};

/// Metadata for one discovered file.
///
/// The path is unique within one scan and doubles as the file's identity.
/// Size and digest together approximate content equality; the collision
/// risk of the 256-bit digest is accepted, not defended against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// BLAKE3 digest of the full content
    pub digest: Digest,
}

impl FileRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(path: PathBuf, size: u64, digest: Digest) -> Self {
        Self { path, size, digest }
    }
}
