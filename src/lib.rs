//! dupescan - interactive duplicate file finder.
//!
//! Scans a directory tree, fingerprints file contents with BLAKE3, groups
//! byte-identical files into duplicate sets and lets the user delete
//! selected copies while accounting the freed space.

pub mod actions;
pub mod catalog;
pub mod cli;
pub mod duplicates;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod scanner;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use crate::cli::Cli;

/// Run the application against real stdin/stdout.
pub fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&cli.path, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive one interactive scan session over the given streams.
///
/// The session owns the whole pipeline: gather parameters, walk and hash,
/// sort and list, then optionally group duplicates and delete a selection.
/// The catalog and duplicate listing live here and are handed to each
/// stage by reference; no stage retains them.
pub fn run_session<R: BufRead, W: Write>(
    root: &Path,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let extension = prompt::read_extension(input, out)?;
    let order = prompt::read_sort_order(input, out)?;

    let mut catalog = scanner::walk(root, extension.as_deref())
        .with_context(|| format!("failed to scan {}", root.display()))?;
    catalog.sort(order);
    output::print_sizes(out, &catalog)?;

    if !prompt::read_yes_no(input, out, "Check for duplicates?")? {
        return Ok(());
    }

    let duplicates = duplicates::find_duplicates(&catalog);
    output::print_duplicates(out, &duplicates)?;

    if !prompt::read_yes_no(input, out, "Delete files?")? {
        return Ok(());
    }

    let selected = prompt::read_selection(input, out, duplicates.len())?;
    match actions::delete_selected(&duplicates, &selected) {
        Ok(freed) => output::print_freed(out, freed)?,
        Err(err) => {
            log::error!("{err}");
            writeln!(out, "Failed to delete files")?;
            output::print_freed(out, err.freed_so_far)?;
        }
    }

    Ok(())
}
