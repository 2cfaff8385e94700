//! Plain-text renderers for catalog and duplicate listings.
//!
//! All writers are generic over `io::Write` so the session tests can
//! capture output in a buffer.

use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::duplicates::Duplicates;
use crate::scanner::{hash_to_hex, Digest};

/// Print the catalog grouped by size.
///
/// A `"<size> bytes"` header is emitted whenever the size changes from the
/// previous line, followed by one path per line. Sort the catalog first;
/// on unsorted input the headers repeat.
pub fn print_sizes<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let mut current_size: Option<u64> = None;
    for record in catalog {
        if current_size != Some(record.size) {
            writeln!(out, "{} bytes", record.size)?;
            current_size = Some(record.size);
        }
        writeln!(out, "{}", record.path.display())?;
    }
    Ok(())
}

/// Print the duplicate listing.
///
/// Size headers as in [`print_sizes`], plus a `"Hash: <hex>"` header
/// whenever the digest changes, then `"<id>. <path>"` per member.
pub fn print_duplicates<W: Write>(out: &mut W, duplicates: &Duplicates) -> io::Result<()> {
    let mut current_size: Option<u64> = None;
    let mut current_digest: Option<Digest> = None;
    for entry in duplicates {
        if current_size != Some(entry.record.size) {
            writeln!(out, "{} bytes", entry.record.size)?;
            current_size = Some(entry.record.size);
        }
        if current_digest != Some(entry.record.digest) {
            writeln!(out, "Hash: {}", hash_to_hex(&entry.record.digest))?;
            current_digest = Some(entry.record.digest);
        }
        writeln!(out, "{}. {}", entry.id, entry.record.path.display())?;
    }
    Ok(())
}

/// Print the freed-space summary after deletion.
pub fn print_freed<W: Write>(out: &mut W, freed: u64) -> io::Result<()> {
    writeln!(out, "Total freed up space: {freed} bytes")
}
