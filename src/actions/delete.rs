//! Deletion of selected duplicate files with freed-space accounting.
//!
//! Deletion acts on the filesystem only; the in-memory listing is never
//! mutated and is stale after the first successful removal. A second
//! deletion pass requires a fresh scan.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::duplicates::Duplicates;

/// Error raised when a selected file could not be removed.
///
/// Deletion stops at the first failure. `freed_so_far` reports the bytes
/// already reclaimed by removals that succeeded earlier in the same call,
/// so the caller can still account for partial progress.
#[derive(Debug, Error)]
#[error("cannot delete {path}: {source}")]
pub struct DeletionError {
    /// Path whose removal failed
    pub path: PathBuf,
    /// Underlying filesystem error
    #[source]
    pub source: io::Error,
    /// Bytes freed before the failure
    pub freed_so_far: u64,
}

/// Delete the files behind the selected display ids.
///
/// Ids are processed in the order given. An id with no match in the
/// listing is silently ignored - selection input is untrusted user text
/// and range validation happens at the prompt boundary. Returns the total
/// bytes freed when every removal succeeds.
///
/// # Errors
///
/// Returns [`DeletionError`] on the first removal failure; remaining ids
/// are never attempted.
pub fn delete_selected(duplicates: &Duplicates, selected: &[u32]) -> Result<u64, DeletionError> {
    let mut freed = 0u64;
    for &id in selected {
        let Some(entry) = duplicates.get(id) else {
            log::warn!("selection id {id} not in duplicate listing, ignoring");
            continue;
        };
        match fs::remove_file(&entry.record.path) {
            Ok(()) => {
                freed += entry.record.size;
                log::debug!(
                    "deleted {} ({} bytes)",
                    entry.record.path.display(),
                    entry.record.size
                );
            }
            Err(source) => {
                return Err(DeletionError {
                    path: entry.record.path.clone(),
                    source,
                    freed_so_far: freed,
                });
            }
        }
    }
    Ok(freed)
}
