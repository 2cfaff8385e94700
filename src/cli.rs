//! Command-line interface definitions for dupescan.
//!
//! The CLI takes a single positional argument, the root directory to scan.
//! Everything else (extension filter, sort order, deletion selection) is
//! gathered interactively on stdin once the program is running.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory interactively
//! dupescan ~/Downloads
//!
//! # Verbose mode for debugging
//! dupescan -v ~/Downloads
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Interactive duplicate file finder.
///
/// Scans PATH recursively, fingerprints file contents with BLAKE3, lists
/// files grouped by size and walks you through reviewing and deleting
/// duplicate copies.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
