//! CLI entry point for the image hole filling tool

use clap::Parser;
use holefill::io::cli::{Cli, FileProcessor};
use holefill::io::logging::init_logging;

fn main() -> holefill::Result<()> {
    let cli = Cli::parse();
    let (quiet, verbose) = (cli.quiet, cli.verbose);
    let mut processor = FileProcessor::new(cli);
    let _logger = init_logging(quiet, verbose, processor.multi_progress())?;
    processor.process()
}
