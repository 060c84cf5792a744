//! Wordchain command-line entry point

use anyhow::Result;
use clap::Parser;
use wordchain_cli::commands::Commands;

/// Group the words of a text into chains where neighbours differ by one edit
#[derive(Debug, Parser)]
#[command(name = "wordchain", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
