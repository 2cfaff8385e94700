//! Recursive directory walker that builds the catalog.
//!
//! Uses [`walkdir`] with sorted entry order so traversal is deterministic
//! across platforms. The walk is all-or-nothing: the first entry that
//! cannot be read aborts the whole scan and no partial catalog is
//! surfaced. Exactly one file handle is open at a time, scoped to the
//! hashing of a single file.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::hasher::{self, Digest};
use super::FileRecord;
use crate::catalog::Catalog;

/// Error raised when a scan cannot complete.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// The root or a directory entry could not be read.
    #[error("walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A visited file could not be opened or streamed.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Walk `root` recursively and build a catalog of regular files.
///
/// Directories are skipped. When `extension` is `Some`, only files whose
/// extension equals it are included; matching is case-sensitive and the
/// filter is a bare word without the leading dot (`"txt"`, not `".txt"`).
/// Each included file is opened once, streamed through the hasher and
/// closed again; its size comes from filesystem metadata.
///
/// The returned catalog is unsorted - directory iteration order is not
/// guaranteed stable, call [`Catalog::sort`] before presenting it.
///
/// # Errors
///
/// Returns [`TraversalError`] if the root cannot be opened or any visited
/// file cannot be read. Partial results are discarded.
pub fn walk(root: &Path, extension: Option<&str>) -> Result<Catalog, TraversalError> {
    log::debug!("scanning {} (filter: {:?})", root.display(), extension);

    let mut records = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if let Some(ext) = extension {
            if !extension_matches(path, ext) {
                continue;
            }
        }

        let size = entry.metadata()?.len();
        let digest = hash_file(path).map_err(|source| TraversalError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        log::trace!("scanned {} ({} bytes)", path.display(), size);
        records.push(FileRecord::new(path.to_path_buf(), size, digest));
    }

    log::debug!("scan complete: {} file(s)", records.len());
    Ok(Catalog::from_records(records))
}

/// Open one file and digest its full contents.
///
/// The handle is dropped when this function returns, whether or not
/// digesting succeeded.
fn hash_file(path: &Path) -> io::Result<Digest> {
    let mut file = File::open(path)?;
    hasher::digest_stream(&mut file)
}

/// Case-sensitive extension match against the text after the final dot.
///
/// A name with no dot never matches. The leading dot itself is not part
/// of the filter word.
fn extension_matches(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, ext)| ext == extension)
}
