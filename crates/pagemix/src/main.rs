//! pagemix CLI - mixed markdown and `PlantUML` content for Confluence.
//!
//! Provides commands for:
//! - `convert`: Print the Confluence storage body for a file
//! - `confluence create`: Create a Confluence page from a file
//! - `confluence update`: Replace a Confluence page body or title
//! - `confluence search`: Full-text search across pages
//! - `confluence check`: Verify credentials against a space

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfluenceCommand, ConvertArgs};
use output::Output;

/// pagemix - Publish mixed markdown and `PlantUML` content to Confluence.
#[derive(Parser)]
#[command(name = "pagemix", version, about)]
struct Cli {
    /// Enable info-level logging (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file to Confluence storage format.
    Convert(ConvertArgs),
    /// Confluence publishing commands.
    #[command(subcommand)]
    Confluence(ConfluenceCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Confluence(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
