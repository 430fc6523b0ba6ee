//! CLI entry point for radical badge generation and PNG processing

use clap::Parser;
use radical_art::io::cli::Cli;

fn main() -> radical_art::Result<()> {
    Cli::parse().run()?;
    Ok(())
}
