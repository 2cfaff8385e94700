//! Duplicate-set construction over a scanned catalog.
//!
//! Two files are duplicates when they agree on both size and content
//! digest. Grouping is keyed by `(size, digest)` in a hash map - one pass
//! over the catalog, same exact-match semantics as comparing every pair.
//! Sets are emitted in the order their first member appears in the input
//! catalog, members keep catalog order within a set, and only sets with at
//! least two members survive.
//!
//! Display ids come from a single counter starting at 1 and are never
//! reused across sets within one grouping pass. The id lives on the
//! [`DuplicateEntry`] pairing, not on the catalog record, so the same
//! record can appear in the full catalog and in a duplicate listing
//! without aliasing ambiguity.
//!
//! # Example
//!
//! ```
//! use dupescan::catalog::Catalog;
//! use dupescan::duplicates::find_duplicates;
//! use dupescan::scanner::FileRecord;
//! use std::path::PathBuf;
//!
//! let catalog = Catalog::from_records(vec![
//!     FileRecord::new(PathBuf::from("a"), 3, [1; 32]),
//!     FileRecord::new(PathBuf::from("b"), 3, [1; 32]),
//!     FileRecord::new(PathBuf::from("c"), 3, [2; 32]),
//! ]);
//!
//! let duplicates = find_duplicates(&catalog);
//! assert_eq!(duplicates.len(), 2); // "c" shares size but not digest
//! ```

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::scanner::{Digest, FileRecord};

/// One member of a duplicate set, paired with its display id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// 1-based selection id, unique within one grouping pass
    pub id: u32,
    /// The underlying catalog record
    pub record: FileRecord,
}

/// Flat listing of all duplicate sets, members contiguous per set.
///
/// Stale immediately after any deletion - re-scan before grouping again.
#[derive(Debug, Clone, Default)]
pub struct Duplicates {
    entries: Vec<DuplicateEntry>,
}

impl Duplicates {
    /// Entries in listing order.
    #[must_use]
    pub fn entries(&self) -> &[DuplicateEntry] {
        &self.entries
    }

    /// Number of entries, which is also the largest valid display id.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by display id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&DuplicateEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl<'a> IntoIterator for &'a Duplicates {
    type Item = &'a DuplicateEntry;
    type IntoIter = std::slice::Iter<'a, DuplicateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Partition the catalog into duplicate sets.
///
/// Only files with at least one other record of identical `(size, digest)`
/// appear in the result. A file that shares a size with others but not a
/// digest is excluded entirely. Zero-length files all carry the empty
/// digest and therefore group with one another - that is content equality
/// working as intended.
#[must_use]
pub fn find_duplicates(catalog: &Catalog) -> Duplicates {
    let mut groups: HashMap<(u64, Digest), Vec<&FileRecord>> = HashMap::new();
    let mut discovery_order: Vec<(u64, Digest)> = Vec::new();

    for record in catalog.records() {
        let key = (record.size, record.digest);
        let members = groups.entry(key).or_insert_with(|| {
            discovery_order.push(key);
            Vec::new()
        });
        members.push(record);
    }

    let mut entries = Vec::new();
    let mut next_id = 1u32;
    for key in discovery_order {
        let members = &groups[&key];
        if members.len() < 2 {
            continue;
        }
        for record in members {
            entries.push(DuplicateEntry {
                id: next_id,
                record: (*record).clone(),
            });
            next_id += 1;
        }
    }

    log::debug!(
        "grouped {} of {} file(s) into duplicate sets",
        entries.len(),
        catalog.len()
    );
    Duplicates { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, size: u64, digest_byte: u8) -> FileRecord {
        FileRecord::new(PathBuf::from(path), size, [digest_byte; 32])
    }

    #[test]
    fn test_pairs_with_matching_size_and_digest() {
        let catalog = Catalog::from_records(vec![
            record("a", 5, 1),
            record("b", 5, 1),
            record("c", 5, 2),
        ]);
        let duplicates = find_duplicates(&catalog);

        let paths: Vec<&str> = duplicates
            .entries()
            .iter()
            .map(|e| e.record.path.to_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn test_singletons_are_excluded() {
        let catalog = Catalog::from_records(vec![record("only", 5, 1)]);
        assert!(find_duplicates(&catalog).is_empty());
    }

    #[test]
    fn test_ids_are_contiguous_across_sets() {
        let catalog = Catalog::from_records(vec![
            record("a", 5, 1),
            record("b", 5, 1),
            record("x", 9, 3),
            record("y", 9, 3),
            record("z", 9, 3),
        ]);
        let duplicates = find_duplicates(&catalog);

        let ids: Vec<u32> = duplicates.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sets_follow_first_discovery_order() {
        let catalog = Catalog::from_records(vec![
            record("second/one", 9, 3),
            record("first/one", 5, 1),
            record("second/two", 9, 3),
            record("first/two", 5, 1),
        ]);
        let duplicates = find_duplicates(&catalog);

        let paths: Vec<&str> = duplicates
            .entries()
            .iter()
            .map(|e| e.record.path.to_str().unwrap())
            .collect();
        assert_eq!(
            paths,
            vec!["second/one", "second/two", "first/one", "first/two"]
        );
    }

    #[test]
    fn test_zero_length_files_group_together() {
        let empty_digest = *blake3::hash(b"").as_bytes();
        let catalog = Catalog::from_records(vec![
            FileRecord::new(PathBuf::from("e1"), 0, empty_digest),
            FileRecord::new(PathBuf::from("e2"), 0, empty_digest),
        ]);
        assert_eq!(find_duplicates(&catalog).len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_records(vec![record("a", 5, 1), record("b", 5, 1)]);
        let duplicates = find_duplicates(&catalog);

        assert_eq!(duplicates.get(2).unwrap().record.path, PathBuf::from("b"));
        assert!(duplicates.get(3).is_none());
        assert!(duplicates.get(0).is_none());
    }
}
