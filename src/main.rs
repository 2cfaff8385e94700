//! dupescan - interactive duplicate file finder.
//!
//! Entry point for the dupescan CLI application.

use clap::Parser;
use dupescan::cli::Cli;

fn main() {
    let cli = Cli::parse();
    dupescan::logging::init(cli.verbose, cli.quiet);

    if let Err(err) = dupescan::run_app(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
