//! BLAKE3 content hashing with streaming support.
//!
//! Digests are computed by feeding the input through [`blake3::Hasher`] via
//! `std::io::copy`; the file is never buffered in memory as a whole.
//! Identical content always yields an identical digest, any length
//! included. Distinct content colliding is a statistical risk of the
//! 256-bit output width and is documented here rather than defended
//! against.

use std::io::{self, Read};

/// A 32-byte BLAKE3 content digest.
pub type Digest = [u8; 32];

/// Digest an arbitrary byte stream, consuming it to EOF.
///
/// Empty input yields the fixed BLAKE3 empty-input digest, so all
/// zero-length files compare equal to one another.
///
/// # Errors
///
/// Returns the underlying I/O error if the stream fails mid-read.
pub fn digest_stream<R: Read>(reader: &mut R) -> io::Result<Digest> {
    let mut hasher = blake3::Hasher::new();
    io::copy(reader, &mut hasher)?;
    Ok(*hasher.finalize().as_bytes())
}

/// Render a digest as a lowercase hex string for display.
#[must_use]
pub fn hash_to_hex(digest: &Digest) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
